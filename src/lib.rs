/// Process configuration resolved once at startup
pub mod config;

/// GitHub REST API client and its error classification
pub mod github;

/// Projections from GitHub REST documents to client-facing summaries
pub mod projection;

/// Operation registry, dispatcher and discovery manifest
pub mod tools;

/// HTTP transport serving the dispatcher
pub mod transport;

/// Core type definitions and domain models used throughout the library
pub mod types;
