//! Integration tests for the normalization API.

use std::sync::Arc;

use postal_rest::config::ServiceConfig;
use postal_rest::engine::{LabeledComponent, RuleEngine};
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_welcome_is_open() {
    let (addr, _shutdown) = common::start_service(ServiceConfig::default(), Arc::new(RuleEngine::new())).await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.starts_with("libpostal REST wrapper"));
}

#[tokio::test]
async fn test_expand_requires_auth() {
    let (addr, _shutdown) = common::start_service(ServiceConfig::default(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{addr}/expand"))
        .json(&json!(["123 Main St"]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    assert!(res.headers().contains_key("www-authenticate"));

    let res = client
        .post(format!("http://{addr}/expand"))
        .basic_auth("admin", Some("wrong"))
        .json(&json!(["123 Main St"]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
}

#[tokio::test]
async fn test_expand_batch_order_and_cardinality() {
    let (addr, _shutdown) = common::start_service(ServiceConfig::default(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    let addresses = json!(["456 Oak Ave", "123 Main St", "456 Oak Ave"]);
    let results: Value = client
        .post(format!("http://{addr}/expand"))
        .basic_auth("admin", Some("admin"))
        .json(&addresses)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["address"], "456 Oak Ave");
    assert_eq!(results[1]["address"], "123 Main St");
    assert_eq!(results[2]["address"], "456 Oak Ave");
    assert!(results[1]["expansions"]
        .as_array()
        .unwrap()
        .contains(&json!("123 main street")));
}

#[tokio::test]
async fn test_expand_empty_batch() {
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    let results: Value = client
        .post(format!("http://{addr}/expand"))
        .json(&json!([]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{addr}/expand"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn test_expand_default_is_stable() {
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/expand/default");

    let first: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let second: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(first, second);

    // Engine defaults, not zero values.
    assert_eq!(first["latin_ascii"], json!(true));
    assert_ne!(first["address_components"], json!(0));
    assert_eq!(first["languages"], json!([]));
}

#[tokio::test]
async fn test_expand_advanced_applies_options() {
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    // Fetch defaults, flip one flag, send back: the documented advanced flow.
    let mut options: Value = client
        .get(format!("http://{addr}/expand/default"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    options["lowercase"] = json!(false);

    let results: Value = client
        .post(format!("http://{addr}/expand/advanced"))
        .json(&json!({ "options": options, "addresses": ["Main Ave"] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(results[0]["address"], "Main Ave");
    assert_eq!(results[0]["expansions"][0], "Main avenue");
}

#[tokio::test]
async fn test_parse_end_to_end() {
    let (addr, _shutdown) = common::start_service(ServiceConfig::default(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    let results: Value = client
        .post(format!("http://{addr}/parse"))
        .basic_auth("admin", Some("admin"))
        .json(&json!(["123 Main St, Springfield"]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["address"], "123 Main St, Springfield");
    assert_eq!(results[0]["parse"]["house_number"], "123");
    assert_eq!(results[0]["parse"]["road"], "main st");
    assert_eq!(results[0]["parse"]["city"], "springfield");
    // Unset fields are omitted, not null.
    assert!(results[0]["parse"].get("country").is_none());
}

#[tokio::test]
async fn test_parse_default_is_unspecified() {
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(RuleEngine::new())).await;

    let options: Value = reqwest::get(format!("http://{addr}/parse/default"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(options, json!({ "language": "", "country": "" }));
}

#[tokio::test]
async fn test_parse_duplicate_label_last_wins() {
    let engine = common::ScriptedEngine {
        components: vec![
            LabeledComponent::new("road", "Main St"),
            LabeledComponent::new("road", "Elm St"),
        ],
    };
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(engine)).await;
    let client = reqwest::Client::new();

    let results: Value = client
        .post(format!("http://{addr}/parse"))
        .json(&json!(["anything"]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(results[0]["parse"]["road"], "Elm St");
}

#[tokio::test]
async fn test_parse_tolerates_unknown_labels() {
    let engine = common::ScriptedEngine {
        components: vec![
            LabeledComponent::new("road", "main street"),
            LabeledComponent::new("phone_number", "555-0100"),
            LabeledComponent::new("unit", ""),
        ],
    };
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(engine)).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{addr}/parse"))
        .json(&json!(["anything"]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let results: Value = res.json().await.unwrap();
    assert_eq!(results[0]["parse"]["road"], "main street");
    // Empty engine value for a known label stays present-and-empty.
    assert_eq!(results[0]["parse"]["unit"], "");
    assert!(results[0]["parse"].get("phone_number").is_none());
}

#[tokio::test]
async fn test_parse_advanced_accepts_hints() {
    let (addr, _shutdown) = common::start_service(common::open_config(), Arc::new(RuleEngine::new())).await;
    let client = reqwest::Client::new();

    let results: Value = client
        .post(format!("http://{addr}/parse/advanced"))
        .json(&json!({
            "options": { "language": "en", "country": "US" },
            "addresses": ["10 Elm Rd, Boston"]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(results[0]["address"], "10 Elm Rd, Boston");
    assert_eq!(results[0]["parse"]["house_number"], "10");
    assert_eq!(results[0]["parse"]["city"], "boston");
}
