//! Markdown rendering for structured documents.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{
    Document, ImageUrlTable, InlineObject, NamedStyle, Paragraph, ParagraphElement,
    StructuralElement, Table, TextRun,
};

use super::latex::{self, MacroPattern};
use super::postprocess::postprocess;
use super::result::{RenderResult, RenderStats};
use super::style;

/// Convert a document body to Markdown.
pub fn to_markdown(doc: &Document, images: &ImageUrlTable) -> Result<String> {
    MarkdownRenderer::new(doc, images).render(&doc.body)
}

/// Convert a document body to Markdown, returning statistics alongside.
pub fn to_markdown_with_stats(doc: &Document, images: &ImageUrlTable) -> Result<RenderResult> {
    MarkdownRenderer::new(doc, images).render_with_stats(&doc.body)
}

/// Markdown renderer for one document or document segment.
///
/// The footnote queue, extracted macro definitions, and the substitution map
/// are renderer-scoped; the code-block accumulator is scoped to each body or
/// footnote pass, so a footnote sub-render can never bleed into the parent's
/// pending code block.
pub struct MarkdownRenderer<'a> {
    doc: &'a Document,
    images: &'a ImageUrlTable,
    macro_pattern: MacroPattern,
    /// Footnote ids in first-reference order
    footnotes: Vec<String>,
    /// Extracted `\newcommand` lines, one per line
    latex_defs: String,
    /// Macro renames to apply across the whole output
    replace: HashMap<String, String>,
    stats: RenderStats,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a renderer over a document and its uploaded-image URLs.
    pub fn new(doc: &'a Document, images: &'a ImageUrlTable) -> Self {
        Self {
            doc,
            images,
            macro_pattern: MacroPattern::new(),
            footnotes: Vec::new(),
            latex_defs: String::new(),
            replace: HashMap::new(),
            stats: RenderStats::new(),
        }
    }

    /// Render a structural-element sequence to a final Markdown string.
    pub fn render(mut self, elements: &[StructuralElement]) -> Result<String> {
        self.render_internal(elements)
    }

    /// Render a structural-element sequence, returning statistics alongside.
    pub fn render_with_stats(mut self, elements: &[StructuralElement]) -> Result<RenderResult> {
        let content = self.render_internal(elements)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, elements: &[StructuralElement]) -> Result<String> {
        let mut body = String::new();
        self.render_pass(&mut body, elements)?;
        self.render_footnotes(&mut body)?;
        Ok(postprocess(&body, &self.latex_defs, &self.replace))
    }

    /// One walk over a structural-element sequence, with its own code-block
    /// accumulator.
    fn render_pass(&mut self, out: &mut String, elements: &[StructuralElement]) -> Result<()> {
        let mut code_block = String::new();

        for elem in elements {
            // anything other than a paragraph closes an open code block
            if !matches!(elem, StructuralElement::Paragraph(_)) {
                self.flush_code_block(out, &mut code_block);
            }

            match elem {
                StructuralElement::Paragraph(p) => {
                    self.render_paragraph(out, &mut code_block, p)?;
                }
                StructuralElement::Table(t) => self.render_table(out, t),
                StructuralElement::TableOfContents => {
                    self.stats.add_warning();
                    log::warn!("ignoring table of contents");
                }
                StructuralElement::SectionBreak => {
                    self.stats.add_warning();
                    log::warn!("ignoring section break");
                }
                StructuralElement::Unknown => {
                    self.stats.add_warning();
                    log::warn!("ignoring structural element of unknown type");
                }
            }
        }

        self.flush_code_block(out, &mut code_block);
        Ok(())
    }

    /// Render queued footnotes as endnotes, in first-reference order.
    ///
    /// References discovered while rendering a footnote extend the queue and
    /// are picked up by the index walk.
    fn render_footnotes(&mut self, out: &mut String) -> Result<()> {
        let doc = self.doc;
        let mut next = 0;
        while next < self.footnotes.len() {
            let id = self.footnotes[next].clone();
            next += 1;

            let Some(footnote) = doc.footnotes.get(&id) else {
                self.stats.add_warning();
                log::warn!("no content found for footnote {id:?} referenced in document");
                continue;
            };

            let mut note = String::new();
            self.render_pass(&mut note, &footnote.content)?;
            self.stats.add_footnote();

            out.push_str(&format!("[^{id}]: "));
            for (i, line) in note.split('\n').enumerate() {
                if i > 0 {
                    // continuation lines of a footnote must be indented
                    out.push_str("    ");
                }
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        Ok(())
    }

    /// Write any pending code lines as a fenced block, or nothing.
    fn flush_code_block(&mut self, out: &mut String, code_block: &mut String) {
        if code_block.is_empty() {
            return;
        }
        out.push_str("```\n");
        out.push_str(code_block);
        out.push_str("```\n\n");
        self.stats.add_code_block();
        code_block.clear();
    }

    fn render_paragraph(
        &mut self,
        out: &mut String,
        code_block: &mut String,
        p: &Paragraph,
    ) -> Result<()> {
        // a normal-style, non-bulleted paragraph set entirely in a monospace
        // font is a line of code: accumulate it and emit nothing yet
        let is_code = p.style.named_style == NamedStyle::NormalText
            && p.bullet.is_none()
            && p.elements.iter().all(|el| match el {
                ParagraphElement::TextRun(run) => {
                    style::is_monospace(run.style.font_family.as_deref())
                }
                _ => false,
            });
        if is_code {
            for el in &p.elements {
                if let ParagraphElement::TextRun(run) = el {
                    code_block.push_str(&run.content);
                }
            }
            return Ok(());
        }

        self.flush_code_block(out, code_block);

        // block-quote prefix
        if p.style.is_indented() && p.bullet.is_none() {
            out.push_str("> ");
        }

        // heading prefix
        let heading_level = p.style.named_style.heading_level();
        if let Some(level) = heading_level {
            self.stats.add_heading();
            out.push_str(&"#".repeat(level as usize));
            out.push(' ');
        }

        // bullet prefix
        if let Some(bullet) = &p.bullet {
            if heading_level.is_some() {
                self.stats.add_warning();
                log::warn!("ignoring bullet on heading paragraph");
            } else {
                let list = self
                    .doc
                    .lists
                    .get(&bullet.list_id)
                    .ok_or_else(|| Error::UnknownList(bullet.list_id.clone()))?;
                let level =
                    list.level(bullet.nesting_level)
                        .ok_or_else(|| Error::UnknownListLevel {
                            list_id: bullet.list_id.clone(),
                            nesting_level: bullet.nesting_level,
                        })?;

                self.stats.add_list_item();
                for _ in 0..bullet.nesting_level {
                    out.push_str("  ");
                }
                if level.has_fixed_glyph() {
                    out.push_str("* ");
                } else {
                    out.push_str("1. ");
                }
            }
        } else if heading_level.is_none() {
            self.stats.add_paragraph();
        }

        for el in &p.elements {
            match el {
                ParagraphElement::TextRun(run) => self.render_text_run(out, run),
                ParagraphElement::InlineObjectRef { id } => self.render_inline_object(out, id),
                ParagraphElement::FootnoteRef { id } => {
                    out.push_str(&format!("[^{id}]"));
                    self.enqueue_footnote(id);
                }
                ParagraphElement::PageBreak => {}
                ParagraphElement::HorizontalRule => out.push_str("\n---\n"),
                ParagraphElement::ColumnBreak => {
                    self.stats.add_warning();
                    log::warn!("ignoring column break");
                }
                ParagraphElement::Equation => {
                    self.stats.add_warning();
                    log::warn!("ignoring equation");
                }
                ParagraphElement::AutoText => {
                    self.stats.add_warning();
                    log::warn!("ignoring auto text");
                }
                ParagraphElement::Unknown => {
                    self.stats.add_warning();
                    log::warn!("ignoring paragraph element of unknown type");
                }
            }
        }

        out.push_str("\n\n");
        Ok(())
    }

    /// Record a footnote id the first time it is referenced, so endnotes come
    /// out in reference order.
    fn enqueue_footnote(&mut self, id: &str) {
        if !self.footnotes.iter().any(|f| f == id) {
            self.footnotes.push(id.to_string());
        }
    }

    fn render_inline_object(&mut self, out: &mut String, id: &str) {
        let Some(obj) = self.doc.inline_objects.get(id) else {
            self.stats.add_warning();
            log::warn!("could not find inline object for id {id:?}");
            return;
        };

        match obj {
            InlineObject::Image { .. } | InlineObject::Drawing { .. } => {
                // objects outside the exported image set degrade to an empty
                // link target
                let url = self.images.resolve(id).unwrap_or_default();
                if url.is_empty() {
                    self.stats.add_warning();
                    log::warn!("no uploaded image url for inline object {id:?}");
                }
                out.push_str(&format!("![{}]({})", obj.title(), url));
                self.stats.add_image();
            }
            InlineObject::LinkedContent { .. } => {
                self.stats.add_warning();
                log::warn!("ignoring linked spreadsheet / chart");
            }
            InlineObject::Unknown => {
                self.stats.add_warning();
                log::warn!("ignoring embedded object of unknown type");
            }
        }
    }

    fn render_text_run(&mut self, out: &mut String, run: &TextRun) {
        let wrapper = style::emphasis_wrapper(&run.style);
        style::warn_unsupported(run, &mut self.stats);

        // typographic quotes do not survive the trip through the publishing
        // pipeline
        let content = run.content.replace('“', "\"").replace('”', "\"");

        // styling applies per physical line
        let lines: Vec<&str> = content.split('\n').collect();
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            // whole-line macro definitions are lifted into the latex header
            if let Some((name, value)) = self.macro_pattern.parse(line) {
                let fixed = latex::fix_latex_symbol(name);
                self.latex_defs
                    .push_str(&format!("\\newcommand{{{fixed}}}{{{value}}}\n"));
                self.stats.add_latex_macro();
                if fixed != name {
                    self.replace.insert(name.to_string(), fixed);
                }
                continue;
            }

            if run.link.is_some() {
                out.push('[');
            }

            // emphasis markers cannot touch whitespace
            let (lead, core, trail) = latex::split_space(line);
            out.push_str(lead);
            if !core.is_empty() {
                out.push_str(wrapper);
                latex::mark_inline_math(out, core);
                out.push_str(wrapper);
            }
            out.push_str(trail);

            if let Some(link) = &run.link {
                out.push_str(&format!("]({link})"));
            }

            if i < last {
                out.push('\n');
            }
        }
    }

    /// Render a table as pipe-delimited rows, with a separator row under the
    /// header when the table has more than one row.
    fn render_table(&mut self, out: &mut String, table: &Table) {
        self.stats.add_table();

        for (i, row) in table.rows.iter().enumerate() {
            out.push_str("| ");
            for cell in &row.cells {
                for elem in &cell.content {
                    match elem {
                        StructuralElement::Paragraph(p) => self.render_cell_paragraph(out, p),
                        _ => {
                            self.stats.add_warning();
                            log::warn!(
                                "ignoring non-paragraph structural element in table cell"
                            );
                        }
                    }
                }
                out.push_str(" | ");
            }
            out.push('\n');

            if i == 0 && table.rows.len() > 1 {
                for _ in &row.cells {
                    out.push_str("| --- ");
                }
                out.push_str("|\n");
            }
        }
    }

    /// Table cells support a much smaller set of formatting than body text.
    fn render_cell_paragraph(&mut self, out: &mut String, p: &Paragraph) {
        if p.style.named_style != NamedStyle::NormalText {
            self.stats.add_warning();
            log::warn!(
                "ignoring {:?} style inside table cell",
                p.style.named_style
            );
        }
        if p.bullet.is_some() {
            self.stats.add_warning();
            log::warn!("ignoring bullet inside table cell");
        }

        for el in &p.elements {
            match el {
                ParagraphElement::TextRun(run) => self.render_cell_text_run(out, run),
                ParagraphElement::FootnoteRef { id } => {
                    out.push_str(&format!("[^{id}]"));
                    self.enqueue_footnote(id);
                }
                ParagraphElement::PageBreak => {}
                ParagraphElement::InlineObjectRef { .. } => {
                    self.stats.add_warning();
                    log::warn!("ignoring inline object in table cell");
                }
                ParagraphElement::HorizontalRule => {
                    self.stats.add_warning();
                    log::warn!("ignoring horizontal rule in table cell");
                }
                ParagraphElement::ColumnBreak => {
                    self.stats.add_warning();
                    log::warn!("ignoring column break");
                }
                ParagraphElement::Equation => {
                    self.stats.add_warning();
                    log::warn!("ignoring equation");
                }
                ParagraphElement::AutoText => {
                    self.stats.add_warning();
                    log::warn!("ignoring auto text");
                }
                ParagraphElement::Unknown => {
                    self.stats.add_warning();
                    log::warn!("ignoring paragraph element of unknown type");
                }
            }
        }
    }

    fn render_cell_text_run(&mut self, out: &mut String, run: &TextRun) {
        if run.style.italic {
            self.stats.add_warning();
            log::warn!("ignoring italics in table cell");
        }
        if run.style.bold {
            self.stats.add_warning();
            log::warn!("ignoring bold text in table cell");
        }
        if run.style.strikethrough {
            self.stats.add_warning();
            log::warn!("ignoring strikethrough in table cell");
        }
        if style::is_monospace(run.style.font_family.as_deref()) {
            self.stats.add_warning();
            log::warn!("ignoring monospace in table cell");
        }
        style::warn_unsupported(run, &mut self.stats);

        let mut content = run.content.replace('“', "\"").replace('”', "\"");

        // table cells hold a single line of text
        if content.contains('\n') {
            self.stats.add_warning();
            log::warn!("collapsing newlines in table cell content");
            content = content.replace('\n', " ");
        }

        match &run.link {
            Some(link) => out.push_str(&format!("[{content}]({link})")),
            None => out.push_str(&content),
        }
    }
}
