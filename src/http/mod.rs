//! HTTP server startup and lifecycle.
//!
//! The server runs plain HTTP (TLS termination is expected to happen at a
//! reverse proxy, if at all) and shuts down gracefully on SIGTERM/SIGINT,
//! draining in-flight connections before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
