//! JSON shapes spoken by dogbin and hastebin servers.
//!
//! Hastebin (the legacy dialect) answers uploads with `{"key"}` and reads
//! with `{"data","key"}`. Dogbin (the extended dialect) adds `isUrl` to
//! uploads and nests a full `document` object in reads.

pub mod document;
pub mod wire;

pub use document::Document;
pub use wire::{ErrorMessage, ExtendedDocument, ResponseWrapper, UploadRequest, UploadResult};
