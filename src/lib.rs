//! Batch address normalization REST service.

pub mod batch;
pub mod components;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod options;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
