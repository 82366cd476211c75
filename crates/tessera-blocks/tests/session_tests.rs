//! Session caching and host capability tests.

use quickcheck_macros::quickcheck;
use tessera_blocks::style::Style;
use tessera_blocks::{
    ImageErrorPolicy, ImageHost, LinkHandler, ParserSession, RenderBlock, RenderConfig,
    SpanRenderer, TextSpan,
};

#[test]
fn test_second_parse_returns_cached_blocks() {
    let mut session = ParserSession::new(RenderConfig::default());
    assert!(!session.is_completed());
    assert!(session.blocks().is_empty());

    let first = session.parse("<p>first</p>").unwrap().to_vec();
    assert!(session.is_completed());

    let second = session.parse(r#"<p>second</p><img src="http://x/y.png">"#).unwrap();
    assert_eq!(first, second);
    assert_eq!(second[0].as_text().unwrap().plain_text(), "first");
}

#[test]
fn test_failed_parse_does_not_complete() {
    let config = RenderConfig::default().with_image_error_policy(ImageErrorPolicy::Abort);
    let mut session = ParserSession::new(config);

    assert!(session.parse(r#"<img src="data:image/png;base64,%%">"#).is_err());
    assert!(!session.is_completed());

    let blocks = session.parse("<p>ok</p>").unwrap();
    assert_eq!(blocks.len(), 1);
    assert!(session.is_completed());
}

#[test]
fn test_parse_keeps_other_warnings() {
    use tessera_common::warning::{has_warned, set_warnings_enabled, warn_once};

    set_warnings_enabled(false);
    warn_once("host", "recorded before an unrelated session");

    let mut session = ParserSession::new(RenderConfig::default());
    let _ = session.parse("<p>x</p>").unwrap();

    assert!(has_warned("host", "recorded before an unrelated session"));
}

#[test]
fn test_default_style_is_root_of_cascade() {
    let root = Style::default().with_font_size(20.0);
    let config = RenderConfig::new(
        tessera_blocks::style::Color::LINK_BLUE,
        tessera_blocks::style::DEFAULT_HEADING_SIZES,
        root,
    );
    let mut session = ParserSession::new(config);
    let blocks = session.parse("<p>x</p>").unwrap();

    let span = blocks[0].as_text().unwrap();
    assert_eq!(span.style.font_size, 20.0);
    assert_eq!(span.children[0].style.font_size, 20.0);
}

#[quickcheck]
fn prop_session_is_idempotent(first: String, second: String) -> bool {
    tessera_common::warning::set_warnings_enabled(false);
    let mut session = ParserSession::new(RenderConfig::default());
    let Ok(a) = session.parse(&first).map(<[RenderBlock]>::to_vec) else {
        return false;
    };
    session.parse(&second).is_ok_and(|b| a == b)
}

#[quickcheck]
fn prop_spans_are_never_empty(html: String) -> bool {
    fn non_empty(span: &TextSpan) -> bool {
        (!span.text.is_empty() || !span.children.is_empty())
            && span.children.iter().all(non_empty)
    }
    tessera_common::warning::set_warnings_enabled(false);
    tessera_blocks::render_html(&html, RenderConfig::default()).is_ok_and(|blocks| {
        blocks
            .iter()
            .filter_map(RenderBlock::as_text)
            .all(non_empty)
    })
}

struct Loader;

impl ImageHost for Loader {
    type Image = String;

    fn network(&self, url: &str) -> String {
        format!("net:{url}")
    }

    fn memory(&self, bytes: &[u8]) -> String {
        format!("mem:{}", bytes.len())
    }
}

#[test]
fn test_image_load_dispatches_on_source() {
    let html = r#"<img src="http://x/y.png"><img src="data:image/png;base64,AAAA">"#;
    let blocks = tessera_blocks::render_html(html, RenderConfig::default()).unwrap();

    let loaded: Vec<String> = blocks
        .iter()
        .filter_map(RenderBlock::as_image)
        .map(|image| image.load(&Loader))
        .collect();
    assert_eq!(loaded, vec!["net:http://x/y.png", "mem:3"]);
}

#[derive(Default)]
struct Browser {
    opened: Vec<String>,
}

impl LinkHandler for Browser {
    fn can_open(&self, url: &str) -> bool {
        url.starts_with("http")
    }

    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

#[test]
fn test_activate_opens_only_openable_links() {
    let html = r#"<a href="http://x">web</a><a href="mailto:me@x">mail</a><b>plain</b>"#;
    let blocks = tessera_blocks::render_html(html, RenderConfig::default()).unwrap();
    let body = blocks[0].as_text().unwrap();

    let mut browser = Browser::default();
    let results: Vec<bool> = body
        .children
        .iter()
        .map(|span| span.activate(&mut browser))
        .collect();

    assert_eq!(results, vec![true, false, false]);
    assert_eq!(browser.opened, vec!["http://x"]);
}

#[derive(Default)]
struct Recorder {
    runs: Vec<(String, Option<String>)>,
    depth: usize,
    max_depth: usize,
}

impl SpanRenderer for Recorder {
    fn enter(&mut self, _span: &TextSpan) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn text(&mut self, text: &str, _style: &Style, activation: Option<&str>) {
        self.runs
            .push((text.to_string(), activation.map(str::to_string)));
    }

    fn leave(&mut self, _span: &TextSpan) {
        self.depth -= 1;
    }
}

#[test]
fn test_walk_inherits_activation() {
    let blocks = tessera_blocks::render_html(
        r#"<a href="http://x">link <b>bold</b></a> after"#,
        RenderConfig::default(),
    )
    .unwrap();

    let mut recorder = Recorder::default();
    blocks[0].as_text().unwrap().walk(&mut recorder);

    let link = Some("http://x".to_string());
    assert_eq!(
        recorder.runs,
        vec![
            ("link".to_string(), link.clone()),
            ("bold".to_string(), link),
            (" after".to_string(), None),
        ]
    );
    assert_eq!(recorder.depth, 0);
    assert_eq!(recorder.max_depth, 3);
}
