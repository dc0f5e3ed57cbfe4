pub mod paste_client;

pub use paste_client::PasteClientError;
