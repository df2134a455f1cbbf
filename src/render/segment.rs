//! Segment-wise rendering.
//!
//! A caller can turn one document into several Markdown outputs by handing
//! over sub-ranges of the body. Segments are independent: each renders with
//! a fresh renderer, so nothing (footnote order, macro headers, pending code
//! blocks) carries across a boundary, and the renders run in parallel.

use std::ops::Range;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, ImageUrlTable, ParagraphElement, StructuralElement};

use super::markdown::MarkdownRenderer;

/// Render one slice of a document's body with a fresh renderer.
pub fn render_segment(
    doc: &Document,
    elements: &[StructuralElement],
    images: &ImageUrlTable,
) -> Result<String> {
    MarkdownRenderer::new(doc, images).render(elements)
}

/// Render several body sub-ranges, one Markdown string per range.
///
/// Every range is validated against the body before any rendering starts;
/// an out-of-bounds range fails the whole call.
pub fn render_segments(
    doc: &Document,
    images: &ImageUrlTable,
    segments: &[Range<usize>],
) -> Result<Vec<String>> {
    let len = doc.body.len();
    for segment in segments {
        if segment.start > segment.end || segment.end > len {
            return Err(Error::SegmentOutOfRange {
                start: segment.start,
                end: segment.end,
                len,
            });
        }
    }

    segments
        .par_iter()
        .map(|segment| render_segment(doc, &doc.body[segment.clone()], images))
        .collect()
}

/// Compute segment boundaries at page breaks.
///
/// A paragraph containing a page break terminates the current segment and
/// belongs to no segment; elements after the last page break form the final
/// segment. A document without page breaks yields a single segment covering
/// the whole body.
pub fn segment_at_page_breaks(doc: &Document) -> Vec<Range<usize>> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, elem) in doc.body.iter().enumerate() {
        let has_break = matches!(
            elem,
            StructuralElement::Paragraph(p)
                if p.elements.iter().any(|el| matches!(el, ParagraphElement::PageBreak))
        );
        if has_break {
            segments.push(start..i);
            start = i + 1;
        }
    }

    if start < doc.body.len() || segments.is_empty() {
        segments.push(start..doc.body.len());
    }
    segments
}
