//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - Ordered startup in `main`: config first, then engine + defaults, then
//!   the listener
//! - Shutdown is signal-driven and graceful: stop accepting, drain in-flight
//!   requests, exit

pub mod shutdown;

pub use shutdown::Shutdown;
