//! Dogbin API key handling with redacted Debug output.

use std::fmt;

use zeroize::Zeroize;

/// A dogbin API key that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    pub fn new(key: String) -> Self {
        Self { inner: key }
    }

    /// Wraps user input, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input: key files commonly end with a newline
    /// and an empty `DOGBIN_KEY` means "no key".
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::new(trimmed.to_string()))
        }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when building the request header.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
