//! Operation handlers, one module per upstream resource

pub mod issue;
pub mod repository;
