//! # API Route Modules
//!
//! - `filialen`: CRUD over branch offices with HAL hypermedia responses.

pub mod filialen;
