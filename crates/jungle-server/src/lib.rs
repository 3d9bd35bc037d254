//! Static serving host for built jungle routes.
//!
//! Turns a completed mount registry into an axum router of static-file
//! services and binds the process listener, TCP or Unix socket, with
//! friendly reporting for the two classic bind failures.

pub mod port;
pub mod server;

pub use port::{normalize_port, Listener};
pub use server::{build_router, ServerError, ServingHost};
