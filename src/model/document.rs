//! Document-level types.

use super::{InlineObject, Paragraph, Table};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A structured rich-text document.
///
/// The tree is produced once by an external fetch/parse step and stays
/// immutable during rendering. Besides the ordered body it carries the three
/// lookup tables the renderer consults: lists (for bullets), footnotes, and
/// embedded inline objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Ordered top-level content
    #[serde(default)]
    pub body: Vec<StructuralElement>,

    /// Lists referenced by paragraph bullets, keyed by list id
    #[serde(default)]
    pub lists: HashMap<String, List>,

    /// Footnote content keyed by footnote id
    #[serde(default)]
    pub footnotes: HashMap<String, Footnote>,

    /// Embedded objects keyed by inline object id
    #[serde(default)]
    pub inline_objects: HashMap<String, InlineObject>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a document from the JSON handed over by the fetch step.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Add a structural element to the body.
    pub fn add_element(&mut self, element: StructuralElement) {
        self.body.push(element);
    }

    /// Add a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(StructuralElement::Paragraph(paragraph));
    }

    /// Register a list under the given id.
    pub fn add_list(&mut self, id: impl Into<String>, list: List) {
        self.lists.insert(id.into(), list);
    }

    /// Register a footnote under the given id.
    pub fn add_footnote(&mut self, id: impl Into<String>, footnote: Footnote) {
        self.footnotes.insert(id.into(), footnote);
    }

    /// Register an inline object under the given id.
    pub fn add_inline_object(&mut self, id: impl Into<String>, object: InlineObject) {
        self.inline_objects.insert(id.into(), object);
    }

    /// Check if the document has any body content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get the number of top-level structural elements.
    pub fn element_count(&self) -> usize {
        self.body.len()
    }
}

/// A top-level block unit of the document.
///
/// Unknown variants are tolerated: the renderer warns and skips them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuralElement {
    /// A paragraph of inline content
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A table-of-contents placeholder (unsupported, skipped with a warning)
    TableOfContents,

    /// A section break (unsupported, skipped with a warning)
    SectionBreak,

    /// Any structural element this model does not know about
    #[serde(other)]
    Unknown,
}

/// A list definition referenced by paragraph bullets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct List {
    /// Properties per nesting level, indexed by level
    #[serde(default)]
    pub nesting_levels: Vec<ListLevel>,
}

impl List {
    /// Create a list from its per-level properties.
    pub fn new(nesting_levels: Vec<ListLevel>) -> Self {
        Self { nesting_levels }
    }

    /// Look up the properties for one nesting level.
    pub fn level(&self, nesting_level: u32) -> Option<&ListLevel> {
        self.nesting_levels.get(nesting_level as usize)
    }
}

/// Properties of one nesting level of a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLevel {
    /// Fixed glyph for this level, if any. Levels without a fixed glyph
    /// number their items.
    #[serde(default)]
    pub glyph_symbol: Option<String>,
}

impl ListLevel {
    /// An unordered level with a fixed bullet glyph.
    pub fn glyph(symbol: impl Into<String>) -> Self {
        Self {
            glyph_symbol: Some(symbol.into()),
        }
    }

    /// An ordered (numbered) level.
    pub fn numbered() -> Self {
        Self { glyph_symbol: None }
    }

    /// Whether this level renders with a fixed glyph (unordered).
    pub fn has_fixed_glyph(&self) -> bool {
        self.glyph_symbol.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// A named side-note referenced inline and rendered as an endnote.
///
/// Footnote content is a full structural-element sequence, rendered with the
/// same renderer recursively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Footnote {
    /// The footnote body
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl Footnote {
    /// Create a footnote from its content.
    pub fn new(content: Vec<StructuralElement>) -> Self {
        Self { content }
    }

    /// Create a footnote holding a single plain-text paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![StructuralElement::Paragraph(Paragraph::with_text(text))],
        }
    }
}
