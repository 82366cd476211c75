//! HTML to render blocks for tessera.
//!
//! # Scope
//!
//! This crate implements:
//! - **Block Segmenter** - walks the body and splits it into text runs and
//!   images, in document order
//! - **Inline Tree Builder** - builds a [`TextSpan`] tree with cascaded styles
//!   and link targets for each run
//! - **Image Resolution** - remote, base-relative, and base64 `data:` sources
//! - **Sessions** - [`ParserSession`], which converts once and caches
//! - **Host Capabilities** - traits for image loading, link opening, and
//!   rich-text rendering
//!
//! # Example
//!
//! ```ignore
//! let mut session = ParserSession::new(RenderConfig::default());
//! for block in session.parse("<p>Hi<img src=\"http://x/y.png\"></p>")? {
//!     match block {
//!         RenderBlock::Image(image) => { /* image.load(&host) */ }
//!         RenderBlock::StyledText(span) => { /* span.walk(&mut renderer) */ }
//!     }
//! }
//! ```

mod block;
mod config;
mod error;
mod host;
mod image;
/// Styled text tree construction.
pub mod inline;
mod segment;
mod session;

pub use block::{ImageBlock, ImageSource, RenderBlock, TextSpan};
pub use config::{ImageErrorPolicy, ImageProbe, RenderConfig};
pub use error::RenderError;
pub use host::{ImageHost, LinkHandler, SpanRenderer};
pub use image::resolve_image;
pub use inline::{InlineBuilder, InlineSource};
pub use segment::Segmenter;
pub use session::{ParserSession, render_html, segment_document};

pub use tessera_style as style;
