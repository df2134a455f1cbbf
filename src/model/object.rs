//! Embedded objects and the image URL table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An embedded non-text artifact referenced from within a paragraph.
///
/// Unknown kinds are tolerated: the renderer warns and emits nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineObject {
    /// An embedded image
    Image {
        /// Display title, used as Markdown alt text
        #[serde(default)]
        title: String,
    },

    /// An embedded drawing
    Drawing {
        /// Display title, used as Markdown alt text
        #[serde(default)]
        title: String,
    },

    /// A linked spreadsheet or chart (unsupported, skipped with a warning)
    LinkedContent {
        /// Display title
        #[serde(default)]
        title: String,
    },

    /// Any embedded object this model does not know about
    #[serde(other)]
    Unknown,
}

impl InlineObject {
    /// Create an image object.
    pub fn image(title: impl Into<String>) -> Self {
        InlineObject::Image {
            title: title.into(),
        }
    }

    /// Create a drawing object.
    pub fn drawing(title: impl Into<String>) -> Self {
        InlineObject::Drawing {
            title: title.into(),
        }
    }

    /// Create a linked spreadsheet/chart object.
    pub fn linked_content(title: impl Into<String>) -> Self {
        InlineObject::LinkedContent {
            title: title.into(),
        }
    }

    /// The object's display title.
    pub fn title(&self) -> &str {
        match self {
            InlineObject::Image { title }
            | InlineObject::Drawing { title }
            | InlineObject::LinkedContent { title } => title,
            InlineObject::Unknown => "",
        }
    }
}

/// Public URLs for uploaded images, keyed by inline object id.
///
/// The table is populated by the image-upload collaborator before rendering
/// starts; the renderer never performs I/O. A missing entry is not fatal:
/// the image renders with an empty URL and a warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUrlTable {
    urls: HashMap<String, String>,
}

impl ImageUrlTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the public URL for an inline object.
    pub fn insert(&mut self, object_id: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(object_id.into(), url.into());
    }

    /// Look up the public URL for an inline object.
    pub fn resolve(&self, object_id: &str) -> Option<&str> {
        self.urls.get(object_id).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<(String, String)> for ImageUrlTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, String>> for ImageUrlTable {
    fn from(urls: HashMap<String, String>) -> Self {
        Self { urls }
    }
}
