//! HTTP status code carried by paste server errors.

/// HTTP status code returned by a paste server.
///
/// Stored as the raw number so error values stay independent of the HTTP
/// client crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const OK: HttpStatusCode = HttpStatusCode(200);

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Paste servers only treat `200` as success.
    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
