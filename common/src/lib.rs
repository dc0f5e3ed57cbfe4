//! Shared primitives for the inu paste client.
//!
//! This crate holds the small value types every other member leans on:
//! source locations for errors, HTTP status codes, and an API key wrapper
//! that keeps credentials out of logs.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Server configuration and paste documents
//! - **paste-core**: Protocol client operating on models
//! - **inu**: Command-line wiring

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
