//! Data structures for the inu paste client.
//!
//! Server configuration plus the JSON shapes exchanged with dogbin and
//! hastebin servers. The only logic here is validation of configuration and
//! the merge of a Get response into a [`Document`].

pub mod error;
pub mod paste;
pub mod server_config;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use paste::{
    Document, ErrorMessage, ExtendedDocument, ResponseWrapper, UploadRequest, UploadResult,
};
pub use server_config::{
    DOGBIN_SERVER, HASTEBIN_SERVER, ServerConfig, builder::ServerConfigBuilder,
};
