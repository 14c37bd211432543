//! Transport layer implementations
//!
//! The assistant is served over plain HTTP with JSON bodies.

/// actix-web application exposing the status, discover and execute routes
pub mod http_server;
