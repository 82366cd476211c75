//! Terminal host: prints blocks with ANSI styling.

use std::fmt::Write as _;

use owo_colors::{OwoColorize, Style as Ansi};
use tessera_blocks::style::{Color, DEFAULT_FONT_SIZE, FontStyle, Style, TextDecoration};
use tessera_blocks::{ImageHost, RenderBlock, SpanRenderer, TextSpan};

/// Describes images instead of displaying them.
pub struct TerminalImages;

impl ImageHost for TerminalImages {
    type Image = String;

    fn network(&self, url: &str) -> String {
        format!("[image: {url}]")
    }

    fn memory(&self, bytes: &[u8]) -> String {
        format!("[image: {} bytes]", bytes.len())
    }
}

/// Writes a span tree into a string, one ANSI-styled run per text node.
///
/// Links print their target after the linked text.
pub struct TerminalRenderer {
    out: String,
    color: bool,
}

impl TerminalRenderer {
    pub const fn new(color: bool) -> Self {
        Self {
            out: String::new(),
            color,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn ansi(style: &Style) -> Ansi {
        let mut ansi = Ansi::new();
        if style.color != Color::BLACK {
            let Color { r, g, b, .. } = style.color;
            ansi = ansi.truecolor(r, g, b);
        }
        // One cell height: larger text shows as bold.
        if style.font_weight.is_bold() || style.font_size > DEFAULT_FONT_SIZE {
            ansi = ansi.bold();
        }
        if style.font_style == FontStyle::Italic {
            ansi = ansi.italic();
        }
        if style.decoration.contains(TextDecoration::UNDERLINE) {
            ansi = ansi.underline();
        }
        if style.decoration.contains(TextDecoration::LINE_THROUGH) {
            ansi = ansi.strikethrough();
        }
        ansi
    }
}

impl SpanRenderer for TerminalRenderer {
    fn text(&mut self, text: &str, style: &Style, _activation: Option<&str>) {
        if self.color {
            let _ = write!(self.out, "{}", text.style(Self::ansi(style)));
        } else {
            self.out.push_str(text);
        }
    }

    fn leave(&mut self, span: &TextSpan) {
        if let Some(ref url) = span.activation {
            let _ = write!(self.out, " <{url}>");
        }
    }
}

/// Render every block, separated by blank lines.
pub fn render_blocks(blocks: &[RenderBlock], color: bool) -> String {
    let mut sections = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            RenderBlock::Image(image) => {
                let line = image.load(&TerminalImages);
                sections.push(if color {
                    line.dimmed().to_string()
                } else {
                    line
                });
            }
            RenderBlock::StyledText(span) => {
                let mut renderer = TerminalRenderer::new(color);
                span.walk(&mut renderer);
                sections.push(renderer.finish());
            }
        }
    }

    let mut out = sections.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_blocks::{RenderConfig, render_html};

    fn plain(html: &str) -> String {
        let blocks = render_html(html, RenderConfig::default()).unwrap();
        render_blocks(&blocks, false)
    }

    #[test]
    fn test_images_are_described() {
        assert_eq!(
            plain(r#"<img src="http://x/y.png"><img src="data:image/png;base64,AAAA">"#),
            "[image: http://x/y.png]\n\n[image: 3 bytes]\n"
        );
    }

    #[test]
    fn test_links_print_target() {
        assert_eq!(
            plain(r#"<p>see <a href="http://x">here</a></p>"#),
            "seehere <http://x>\n"
        );
    }

    #[test]
    fn test_empty_document_prints_nothing() {
        assert_eq!(plain(""), "");
    }

    #[test]
    fn test_styled_text_has_ansi_codes() {
        let blocks = render_html("<b>bold</b>", RenderConfig::default()).unwrap();
        let out = render_blocks(&blocks, true);
        assert!(out.contains("bold"));
        assert!(out.contains("\u{1b}["));
    }
}
