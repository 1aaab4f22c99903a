//! # Middleware Modules
//!
//! Tower middleware layers for the API service.

pub mod cors;
pub mod tracing_layer;
