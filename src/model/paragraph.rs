//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style (named style, indentation)
    #[serde(default)]
    pub style: ParagraphStyle,

    /// Bullet marker if this paragraph is a list item
    #[serde(default)]
    pub bullet: Option<Bullet>,

    /// Inline elements in the paragraph
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain-text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.named_style = match level.clamp(1, 6) {
            1 => NamedStyle::Heading1,
            2 => NamedStyle::Heading2,
            3 => NamedStyle::Heading3,
            4 => NamedStyle::Heading4,
            5 => NamedStyle::Heading5,
            _ => NamedStyle::Heading6,
        };
        p
    }

    /// Add a plain-text run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.add_run(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements.push(ParagraphElement::TextRun(run));
    }

    /// Add an arbitrary inline element.
    pub fn add_element(&mut self, element: ParagraphElement) {
        self.elements.push(element);
    }

    /// Attach a bullet marker.
    pub fn with_bullet(mut self, list_id: impl Into<String>, nesting_level: u32) -> Self {
        self.bullet = Some(Bullet {
            list_id: list_id.into(),
            nesting_level,
        });
        self
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Named paragraph style
    #[serde(default)]
    pub named_style: NamedStyle,

    /// Start indent in points. A positive indent on a non-bulleted
    /// paragraph renders as a block quote.
    #[serde(default)]
    pub indent_start: Option<f64>,
}

impl ParagraphStyle {
    /// Whether the indent marks this paragraph as a block quote.
    pub fn is_indented(&self) -> bool {
        self.indent_start.is_some_and(|magnitude| magnitude > 0.0)
    }
}

/// The named style of a paragraph.
///
/// Styles this model does not know about deserialize as [`NamedStyle::Unknown`]
/// and render as normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NamedStyle {
    /// Document title (renders as an H1)
    Title,
    /// Level-1 heading
    Heading1,
    /// Level-2 heading
    Heading2,
    /// Level-3 heading
    Heading3,
    /// Level-4 heading
    Heading4,
    /// Level-5 heading
    Heading5,
    /// Level-6 heading
    Heading6,
    /// Body text
    #[default]
    NormalText,
    /// Any other named style
    Unknown,
}

impl NamedStyle {
    /// The Markdown heading level for this style, or `None` for body text.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            NamedStyle::Title | NamedStyle::Heading1 => Some(1),
            NamedStyle::Heading2 => Some(2),
            NamedStyle::Heading3 => Some(3),
            NamedStyle::Heading4 => Some(4),
            NamedStyle::Heading5 => Some(5),
            NamedStyle::Heading6 => Some(6),
            NamedStyle::NormalText | NamedStyle::Unknown => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            NamedStyle::Title => "title",
            NamedStyle::Heading1 => "heading_1",
            NamedStyle::Heading2 => "heading_2",
            NamedStyle::Heading3 => "heading_3",
            NamedStyle::Heading4 => "heading_4",
            NamedStyle::Heading5 => "heading_5",
            NamedStyle::Heading6 => "heading_6",
            NamedStyle::NormalText => "normal_text",
            NamedStyle::Unknown => "unknown",
        }
    }
}

impl From<String> for NamedStyle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "title" => NamedStyle::Title,
            "heading_1" => NamedStyle::Heading1,
            "heading_2" => NamedStyle::Heading2,
            "heading_3" => NamedStyle::Heading3,
            "heading_4" => NamedStyle::Heading4,
            "heading_5" => NamedStyle::Heading5,
            "heading_6" => NamedStyle::Heading6,
            "normal_text" => NamedStyle::NormalText,
            _ => NamedStyle::Unknown,
        }
    }
}

impl From<NamedStyle> for String {
    fn from(style: NamedStyle) -> Self {
        style.as_str().to_string()
    }
}

/// A bullet marker tying a paragraph to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Id of the list this paragraph belongs to
    pub list_id: String,

    /// Nesting depth within the list (0 = top level)
    #[serde(default)]
    pub nesting_level: u32,
}

/// Inline content within a paragraph.
///
/// Unknown variants are tolerated: the renderer warns and skips them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParagraphElement {
    /// A run of text with consistent styling
    TextRun(TextRun),

    /// Reference to an embedded object (image, drawing, linked content)
    InlineObjectRef {
        /// Id into the document's inline-object table
        id: String,
    },

    /// Reference to a footnote
    FootnoteRef {
        /// Id into the document's footnote table
        id: String,
    },

    /// A page break (dropped from output; segment boundary for callers)
    PageBreak,

    /// A horizontal rule
    HorizontalRule,

    /// A column break (unsupported, skipped with a warning)
    ColumnBreak,

    /// An equation object (unsupported, skipped with a warning)
    Equation,

    /// Auto-generated text such as page numbers (unsupported)
    AutoText,

    /// Any inline element this model does not know about
    #[serde(other)]
    Unknown,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub content: String,

    /// Text styling
    #[serde(default)]
    pub style: TextStyle,

    /// Hyperlink target, if the run is a link
    #[serde(default)]
    pub link: Option<String>,
}

impl TextRun {
    /// Create a text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
            link: None,
        }
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
            link: None,
        }
    }

    /// Create a run in a monospace font.
    pub fn monospace(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle {
                font_family: Some("Courier New".to_string()),
                ..Default::default()
            },
            link: None,
        }
    }

    /// Create a hyperlinked text run.
    pub fn linked(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
            link: Some(url.into()),
        }
    }
}

/// Text styling properties.
///
/// For the color fields only presence matters to the renderer, never the
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Underlined text (unsupported unless the run is a link)
    pub underline: bool,

    /// Small caps (unsupported)
    pub small_caps: bool,

    /// Background/highlight color (unsupported)
    pub background_color: Option<String>,

    /// Foreground color (unsupported unless the run is a link)
    pub foreground_color: Option<String>,

    /// Vertical offset of the text baseline
    pub baseline_offset: BaselineOffset,

    /// Font family, tested only for monospace-ness
    pub font_family: Option<String>,
}

/// Vertical offset of a run's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineOffset {
    /// No offset
    #[default]
    None,
    /// Subscript (unsupported, renders unshifted)
    Subscript,
    /// Superscript (unsupported, renders unshifted)
    Superscript,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_builder() {
        let h2 = Paragraph::heading("Intro", 2);
        assert_eq!(h2.style.named_style, NamedStyle::Heading2);
        assert_eq!(h2.style.named_style.heading_level(), Some(2));

        // out-of-range levels clamp
        let h9 = Paragraph::heading("Deep", 9);
        assert_eq!(h9.style.named_style, NamedStyle::Heading6);
    }

    #[test]
    fn test_title_is_h1() {
        assert_eq!(NamedStyle::Title.heading_level(), Some(1));
        assert_eq!(NamedStyle::Heading1.heading_level(), Some(1));
    }

    #[test]
    fn test_named_style_tolerates_unknown() {
        let style = NamedStyle::from("subtitle".to_string());
        assert_eq!(style, NamedStyle::Unknown);
        assert_eq!(style.heading_level(), None);
    }

    #[test]
    fn test_indent_flag() {
        let mut style = ParagraphStyle::default();
        assert!(!style.is_indented());
        style.indent_start = Some(0.0);
        assert!(!style.is_indented());
        style.indent_start = Some(18.0);
        assert!(style.is_indented());
    }

    #[test]
    fn test_paragraph_element_json() {
        let el: ParagraphElement =
            serde_json::from_str(r#"{"type": "footnote_ref", "id": "fn1"}"#).unwrap();
        assert!(matches!(el, ParagraphElement::FootnoteRef { ref id } if id == "fn1"));

        let el: ParagraphElement = serde_json::from_str(r#"{"type": "bookmark"}"#).unwrap();
        assert!(matches!(el, ParagraphElement::Unknown));
    }
}
