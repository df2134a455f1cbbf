//! Rendering results and statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document: the Markdown plus what was counted along
/// the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of body paragraphs rendered
    pub paragraph_count: u32,

    /// Number of headings rendered
    pub heading_count: u32,

    /// Number of list items rendered
    pub list_item_count: u32,

    /// Number of fenced code blocks emitted
    pub code_block_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of footnotes rendered as endnotes
    pub footnote_count: u32,

    /// Number of images emitted
    pub image_count: u32,

    /// Number of LaTeX macro definitions lifted into the header
    pub latex_macro_count: u32,

    /// Number of warnings reported (unsupported features, missing references)
    pub warning_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment the heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment the list-item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment the code-block count.
    pub fn add_code_block(&mut self) {
        self.code_block_count += 1;
    }

    /// Increment the table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment the footnote count.
    pub fn add_footnote(&mut self) {
        self.footnote_count += 1;
    }

    /// Increment the image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment the macro-definition count.
    pub fn add_latex_macro(&mut self) {
        self.latex_macro_count += 1;
    }

    /// Increment the warning count.
    pub fn add_warning(&mut self) {
        self.warning_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = RenderStats::new();
        stats.add_paragraph();
        stats.add_paragraph();
        stats.add_warning();

        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.warning_count, 1);
        assert_eq!(stats.table_count, 0);
    }
}
