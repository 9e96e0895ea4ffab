//! echod - a bearer-token authenticated HTTP echo service.
//!
//! Exposes a single gated endpoint, `/echo`, that validates an `input` query
//! parameter and echoes it back as JSON, plus an open `/health` liveness
//! probe. The request pipeline is: request ID span -> bearer auth gate ->
//! echo handler.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
