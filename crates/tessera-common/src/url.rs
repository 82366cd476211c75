//! Image source URL helpers.
//!
//! [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
//!
//! NOTE: Image sources are classified by prefix only. Relative sources are
//! joined to the configured base URL by plain concatenation, not by the URL
//! Standard's resolution algorithm.

/// How an `img` element's `src` attribute should be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Starts with `http` (covers `https`): fetched by the host as-is.
    Remote,
    /// Starts with `data:image`: decoded in-process.
    DataImage,
    /// Anything else: only usable when a base URL is configured.
    Relative,
}

/// Classify an image source, testing the remote prefix first.
#[must_use]
pub fn classify_source(src: &str) -> SourceKind {
    if src.starts_with("http") {
        SourceKind::Remote
    } else if src.starts_with("data:image") {
        SourceKind::DataImage
    } else {
        SourceKind::Relative
    }
}

/// Join a relative source to the base URL.
///
/// Returns `None` when there is no base URL or it is empty.
#[must_use]
pub fn join_base(base_url: Option<&str>, src: &str) -> Option<String> {
    base_url
        .filter(|base| !base.is_empty())
        .map(|base| format!("{base}{src}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_source() {
        assert_eq!(classify_source("http://x/y.png"), SourceKind::Remote);
        assert_eq!(classify_source("https://x/y.png"), SourceKind::Remote);
        assert_eq!(classify_source("data:image/png;base64,AAAA"), SourceKind::DataImage);
        assert_eq!(classify_source("data:text/plain,hi"), SourceKind::Relative);
        assert_eq!(classify_source("img/a.png"), SourceKind::Relative);
    }

    #[test]
    fn test_join_base_concatenates() {
        assert_eq!(
            join_base(Some("https://cdn.example/"), "a.png").as_deref(),
            Some("https://cdn.example/a.png")
        );
        assert_eq!(join_base(Some(""), "a.png"), None);
        assert_eq!(join_base(None, "a.png"), None);
    }
}
