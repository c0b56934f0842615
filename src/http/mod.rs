//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/basic_auth.rs (guards /expand* and /parse*)
//!     → handlers.rs (decode body, pick options, run batch)
//!     → batch + options + components (the translation core)
//!     → JSON response
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
