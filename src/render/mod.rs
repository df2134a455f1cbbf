//! Rendering module: document tree to Markdown.

mod latex;
mod markdown;
mod postprocess;
mod result;
mod segment;
mod style;

pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use result::{RenderResult, RenderStats};
pub use segment::{render_segment, render_segments, segment_at_page_breaks};
pub use style::{emphasis_wrapper, is_monospace};
