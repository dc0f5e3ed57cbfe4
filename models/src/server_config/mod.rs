pub mod builder;

use builder::ServerConfigBuilder;

use common::RedactedApiKey;

/// Public dogbin instance.
pub const DOGBIN_SERVER: &str = "del.dog";

/// Public hastebin instance.
pub const HASTEBIN_SERVER: &str = "hastebin.com";

/// The paste server every operation talks to.
///
/// `server` is kept as the user typed it (`"del.dog"`, `"http://host:90"`);
/// scheme defaulting happens when the client derives its endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    server: String,
    api_key: Option<RedactedApiKey>,
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Config for the public dogbin instance, without a key.
    pub fn dogbin() -> Self {
        Self {
            server: DOGBIN_SERVER.to_string(),
            api_key: None,
        }
    }

    /// Config for the public hastebin instance.
    pub fn hastebin() -> Self {
        Self {
            server: HASTEBIN_SERVER.to_string(),
            api_key: None,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn api_key(&self) -> Option<&RedactedApiKey> {
        self.api_key.as_ref()
    }
}
