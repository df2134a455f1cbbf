//! # docdown
//!
//! Rendering of structured rich-text documents to Markdown.
//!
//! This library takes an already-parsed document tree (paragraphs, text
//! runs, lists, footnotes, tables, embedded objects) and renders it to a
//! Markdown document suitable for publishing on a blogging platform, with
//! inline LaTeX math and an extracted `$$` macro header.
//!
//! ## Quick Start
//!
//! ```
//! use docdown::{to_markdown, Document, ImageUrlTable, Paragraph};
//!
//! fn main() -> docdown::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_paragraph(Paragraph::heading("Introduction", 2));
//!     doc.add_paragraph(Paragraph::with_text("Hello from docdown."));
//!
//!     let markdown = to_markdown(&doc, &ImageUrlTable::new())?;
//!     assert_eq!(markdown, "## Introduction\n\nHello from docdown.\n\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single-wrapper styling**: italic, bold, strikethrough, and monospace
//!   resolve to exactly one Markdown wrapper per run
//! - **Code-block detection**: consecutive monospace paragraphs fuse into one
//!   fenced block
//! - **Footnotes**: endnotes in first-reference order, deduplicated, rendered
//!   recursively
//! - **Inline LaTeX**: backslash-introduced identifiers become `$...$` spans;
//!   `\newcommand` lines are lifted into a header block with digit-free names
//! - **Segments**: split a document at page breaks and render the pieces in
//!   parallel
//!
//! The document tree and the image URL table are produced by external
//! collaborators (document fetch, image upload) before rendering starts; the
//! renderer itself is pure and performs no I/O. Everything Markdown cannot
//! represent is reported through the [`log`] facade as a warning and dropped,
//! never a hard failure; only structural inconsistencies in the source tree
//! abort a render.

pub mod error;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{
    BaselineOffset, Bullet, Document, Footnote, ImageUrlTable, InlineObject, List, ListLevel,
    NamedStyle, Paragraph, ParagraphElement, ParagraphStyle, StructuralElement, Table, TableCell,
    TableRow, TextRun, TextStyle,
};
pub use render::{
    render_segment, render_segments, segment_at_page_breaks, to_markdown, to_markdown_with_stats,
    MarkdownRenderer, RenderResult, RenderStats,
};
