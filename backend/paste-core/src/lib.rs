//! Protocol client for dogbin and hastebin paste servers.
//!
//! [`ServerUrls`] derives the endpoints from a server specifier and
//! [`PasteClient`] performs uploads and reads, normalizing both server
//! dialects into [`Document`] values.

pub mod error;
pub mod paste_client;
pub mod server_urls;

#[cfg(test)]
mod tests;

pub use error::paste_client::PasteClientError;
pub use paste_client::PasteClient;
pub use server_urls::ServerUrls;

pub use models::{Document, ServerConfig, UploadResult};

/// Scheme assumed when a server specifier has none.
pub const DEFAULT_SCHEME: &str = "https";
