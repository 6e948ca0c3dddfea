//! Language tandem API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint share the same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
