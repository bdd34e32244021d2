//! Rendering module for converting exam papers to printable markup.
//!
//! [`to_html`] is the core transformation: a pure, single-pass function from
//! a [`Document`](crate::model::Document) and [`RenderOptions`] to one
//! self-contained HTML string. It holds no shared state and can be called
//! concurrently on the same document.

mod escape;
mod html;
mod label;
mod options;
mod result;
pub mod style;
mod text;

pub use escape::escape_html;
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use label::option_label;
pub use options::{RenderOptions, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
pub use result::{PaperStats, RenderResult};
pub use text::to_text;
