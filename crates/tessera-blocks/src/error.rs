//! Conversion errors.

use tessera_common::DataUrlError;
use thiserror::Error;

/// Longest prefix of an image source quoted in error messages.
const SRC_PREVIEW_CHARS: usize = 48;

/// Error type for converting a document into blocks.
///
/// Missing attributes and unrecognized styles are not errors; they simply
/// produce no block or no change.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A `data:image` source could not be decoded and the configured policy
    /// is to abort.
    #[error("failed to decode image '{}'", preview(.src))]
    ImageDecode {
        /// The full `src` attribute.
        src: String,
        /// Why decoding failed.
        #[source]
        source: DataUrlError,
    },
}

fn preview(src: &str) -> String {
    if src.chars().count() <= SRC_PREVIEW_CHARS {
        src.to_string()
    } else {
        let head: String = src.chars().take(SRC_PREVIEW_CHARS).collect();
        format!("{head}…")
    }
}
