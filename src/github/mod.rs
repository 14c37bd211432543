pub mod client;
pub mod error;

pub use client::GitHubClient;
pub use error::UpstreamError;
