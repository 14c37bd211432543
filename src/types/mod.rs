//! Core type definitions shared by the client, projections and dispatcher

pub mod envelope;
pub mod issue;
pub mod repository;
pub mod search;

pub use envelope::*;
pub use issue::*;
pub use repository::*;
pub use search::*;
