//! Image resolution for `img` elements.
//!
//! [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)

use tessera_common::DataUrl;
use tessera_common::url::{SourceKind, classify_source, join_base};
use tessera_common::warning::warn_once;
use tessera_dom::ElementData;

use crate::{ImageBlock, ImageSource, RenderError};

/// Resolve an `img` element into an image block.
///
/// The `src` attribute is classified in order:
///
/// 1. Starts with `http` -> network image at that URL.
/// 2. Starts with `data:image` -> base64 payload decoded in-process.
/// 3. Anything else -> network image at `base_url + src` if a non-empty base
///    URL is configured.
///
/// Returns `Ok(None)` when there is no `src` or a relative `src` has no base.
///
/// # Errors
///
/// Returns [`RenderError::ImageDecode`] when a `data:image` source has no
/// `;base64,` header or an invalid payload.
pub fn resolve_image(
    element: &ElementData,
    base_url: Option<&str>,
) -> Result<Option<ImageBlock>, RenderError> {
    let Some(src) = element.attr("src") else {
        warn_once("image", "skipping <img> without a src attribute");
        return Ok(None);
    };

    let source = match classify_source(src) {
        SourceKind::Remote => ImageSource::Network {
            url: src.to_string(),
        },
        SourceKind::DataImage => {
            let bytes = DataUrl::new(src)
                .decode()
                .map_err(|source| RenderError::ImageDecode {
                    src: src.to_string(),
                    source,
                })?;
            ImageSource::Memory { bytes }
        }
        SourceKind::Relative => {
            let Some(url) = join_base(base_url, src) else {
                warn_once(
                    "image",
                    &format!("skipping relative image '{src}' (no base URL configured)"),
                );
                return Ok(None);
            };
            ImageSource::Network { url }
        }
    };

    Ok(Some(ImageBlock {
        src: src.to_string(),
        source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(src: &str) -> ElementData {
        ElementData::new("img").with_attr("src", src)
    }

    #[test]
    fn test_remote_source_is_verbatim() {
        let block = resolve_image(&img("http://x/y.png"), Some("https://base/"))
            .unwrap()
            .unwrap();
        assert_eq!(
            block.source,
            ImageSource::Network {
                url: "http://x/y.png".to_string()
            }
        );
    }

    #[test]
    fn test_data_source_is_decoded() {
        let block = resolve_image(&img("data:image/png;base64,AAAA"), None)
            .unwrap()
            .unwrap();
        assert_eq!(block.source, ImageSource::Memory { bytes: vec![0, 0, 0] });
    }

    #[test]
    fn test_data_source_without_header_fails() {
        let err = resolve_image(&img("data:image/svg+xml,<svg/>"), None).unwrap_err();
        assert!(matches!(err, RenderError::ImageDecode { .. }));
    }

    #[test]
    fn test_relative_source_needs_base() {
        assert_eq!(resolve_image(&img("i.png"), None).unwrap(), None);
        assert_eq!(resolve_image(&img("i.png"), Some("")).unwrap(), None);

        let block = resolve_image(&img("i.png"), Some("https://cdn.example/"))
            .unwrap()
            .unwrap();
        assert_eq!(
            block.source,
            ImageSource::Network {
                url: "https://cdn.example/i.png".to_string()
            }
        );
        assert_eq!(block.src, "i.png");
    }

    #[test]
    fn test_missing_src() {
        assert_eq!(resolve_image(&ElementData::new("img"), Some("https://b/")).unwrap(), None);
    }
}
