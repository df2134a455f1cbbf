//! Document model types.
//!
//! This module defines the typed tree the renderer consumes. The tree is
//! produced by an external fetch/parse step (see [`Document::from_json`])
//! and is immutable during rendering.

mod document;
mod object;
mod paragraph;
mod table;

pub use document::{Document, Footnote, List, ListLevel, StructuralElement};
pub use object::{ImageUrlTable, InlineObject};
pub use paragraph::{
    BaselineOffset, Bullet, NamedStyle, Paragraph, ParagraphElement, ParagraphStyle, TextRun,
    TextStyle,
};
pub use table::{Table, TableCell, TableRow};
