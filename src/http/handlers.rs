//! Endpoint handlers.
//!
//! Each handler decodes the body, picks the request's options (explicit for
//! the `/advanced` variants, the process-wide defaults otherwise), runs the
//! batch, and serializes the result. Malformed bodies are rejected by the
//! `Json` extractor before any batch work begins.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::batch::{expand_batch, parse_batch};
use crate::engine;
use crate::http::server::AppState;
use crate::options::{
    export_expand_options, export_parse_options, import_expand_options, import_parse_options,
    ExpandOptions, ParserOptions,
};

/// Body of `POST /expand/advanced`.
#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    #[serde(default)]
    pub options: ExpandOptions,
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// Body of `POST /parse/advanced`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub options: ParserOptions,
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// GET `/`
pub async fn welcome() -> String {
    format!("libpostal REST wrapper ({})", env!("CARGO_PKG_VERSION"))
}

/// POST `/expand`: expand a batch with the engine's default options.
pub async fn expand(
    State(state): State<AppState>,
    Json(addresses): Json<Vec<String>>,
) -> Response {
    expand_response(&state, &addresses, state.defaults.expand.clone())
}

/// POST `/expand/advanced`: expand a batch with caller-supplied options.
pub async fn expand_advanced(
    State(state): State<AppState>,
    Json(request): Json<ExpandRequest>,
) -> Response {
    let options = import_expand_options(request.options);
    expand_response(&state, &request.addresses, options)
}

/// GET `/expand/default`: introspect the default expansion options.
pub async fn expand_default(State(state): State<AppState>) -> Json<ExpandOptions> {
    Json(export_expand_options(state.defaults.expand.clone()))
}

/// POST `/parse`: parse a batch with the default (auto-detect) options.
pub async fn parse(State(state): State<AppState>, Json(addresses): Json<Vec<String>>) -> Response {
    parse_response(&state, &addresses, state.defaults.parse.clone())
}

/// POST `/parse/advanced`: parse a batch with caller-supplied options.
pub async fn parse_advanced(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Response {
    let options = import_parse_options(request.options);
    parse_response(&state, &request.addresses, options)
}

/// GET `/parse/default`: introspect the default parser options.
pub async fn parse_default(State(state): State<AppState>) -> Json<ParserOptions> {
    Json(export_parse_options(state.defaults.parse.clone()))
}

fn expand_response(
    state: &AppState,
    addresses: &[String],
    options: engine::ExpandOptions,
) -> Response {
    match expand_batch(state.engine.as_ref(), addresses, &options) {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "expand batch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Engine failure").into_response()
        }
    }
}

fn parse_response(
    state: &AppState,
    addresses: &[String],
    options: engine::ParserOptions,
) -> Response {
    match parse_batch(state.engine.as_ref(), addresses, &options) {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "parse batch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Engine failure").into_response()
        }
    }
}
