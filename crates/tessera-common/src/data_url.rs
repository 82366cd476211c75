//! `data:` URL decoding for inline images.
//!
//! [RFC 2397](https://www.rfc-editor.org/rfc/rfc2397)
//!
//! Only the base64 form used by embedded images is supported:
//! `data:<mime>;base64,<payload>`.

use std::sync::LazyLock;

use base64::Engine;
use regex::Regex;
use thiserror::Error;

/// Matches the leading `data:<mime>;base64,` header of an image data URL.
static BASE64_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:[^;,]*;base64,").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// Error produced when a `data:` URL cannot be turned into bytes.
#[derive(Debug, Error)]
pub enum DataUrlError {
    /// The URL does not start with a `data:<mime>;base64,` header.
    #[error("data URL has no `data:<mime>;base64,` header")]
    MissingPrefix,
    /// The payload after the header is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A parsed `data:` URL that can be decoded into raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// The full raw `data:` URL string (e.g. `data:image/png;base64,...`).
    raw: &'a str,
}

impl<'a> DataUrl<'a> {
    /// Wrap a raw `data:` URL string.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The media type between `data:` and `;base64`, if the header is present.
    #[must_use]
    pub fn media_type(&self) -> Option<&'a str> {
        let header = BASE64_HEADER.find(self.raw)?;
        let header = &self.raw[..header.end()];
        header
            .strip_prefix("data:")
            .and_then(|rest| rest.strip_suffix(";base64,"))
    }

    /// The encoded payload following the header.
    ///
    /// # Errors
    ///
    /// Returns [`DataUrlError::MissingPrefix`] if the header is absent.
    pub fn payload(&self) -> Result<&'a str, DataUrlError> {
        BASE64_HEADER
            .find(self.raw)
            .map(|header| &self.raw[header.end()..])
            .ok_or(DataUrlError::MissingPrefix)
    }

    /// Decode the data URL payload into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing or base64 decoding fails.
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        let payload = self.payload()?;
        Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
    }
}
