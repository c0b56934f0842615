//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all endpoint handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID, CORS,
//!   basic auth)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::{AuthConfig, CorsConfig};
use crate::config::ServiceConfig;
use crate::defaults::EngineDefaults;
use crate::engine::AddressEngine;
use crate::http::handlers;
use crate::http::middleware::basic_auth_middleware;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn AddressEngine>,
    pub defaults: Arc<EngineDefaults>,
    pub auth: Arc<AuthConfig>,
}

/// HTTP server for the normalization API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server around an engine backend.
    ///
    /// Default options are resolved from the engine here, once, and shared
    /// read-only with every request.
    pub fn new(config: ServiceConfig, engine: Arc<dyn AddressEngine>) -> Self {
        let defaults = Arc::new(EngineDefaults::resolve(engine.as_ref()));

        let state = AppState {
            engine,
            defaults,
            auth: Arc::new(config.auth.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        // Expand/parse groups sit behind basic auth; the welcome route does not.
        let api = Router::new()
            .route("/expand", post(handlers::expand))
            .route("/expand/advanced", post(handlers::expand_advanced))
            .route("/expand/default", get(handlers::expand_default))
            .route("/parse", post(handlers::parse))
            .route("/parse/advanced", post(handlers::parse_advanced))
            .route("/parse/default", get(handlers::parse_default))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                basic_auth_middleware,
            ));

        let mut router = Router::new()
            .route("/", get(handlers::welcome))
            .merge(api)
            .with_state(state)
            .layer(middleware::from_fn(track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::new(
                HeaderName::from_static(X_REQUEST_ID),
                MakeRequestUuid,
            ))
            .layer(TraceLayer::new_for_http());

        if config.cors.enabled {
            router = router.layer(cors_layer(&config.cors));
        }

        router
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Record request count and latency for every completed request.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, &path, response.status().as_u16(), start);
    response
}
