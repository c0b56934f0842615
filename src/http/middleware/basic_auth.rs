//! Basic auth middleware (RFC 7617).
//!
//! Guards the expand/parse endpoint groups. The welcome route is mounted
//! outside this layer and stays open.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::http::server::AppState;

pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.auth.enabled {
        return next.run(request).await;
    }

    let credentials = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok());

    let authorized = credentials
        .as_deref()
        .and_then(|creds| creds.split_once(':'))
        .map(|(user, password)| {
            state
                .auth
                .users
                .get(user)
                .is_some_and(|expected| expected == password)
        })
        .unwrap_or(false);

    if authorized {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "rejecting unauthenticated request");

    let mut response = (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    if let Ok(challenge) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", state.auth.realm)) {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, challenge);
    }
    response
}
