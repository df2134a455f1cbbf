//! Integration tests for the Markdown rendering pipeline.

use docdown::{
    render_segments, segment_at_page_breaks, to_markdown, to_markdown_with_stats, Document, Error,
    Footnote, ImageUrlTable, InlineObject, List, ListLevel, Paragraph, ParagraphElement, TextRun,
    TextStyle,
};

fn render(doc: &Document) -> String {
    to_markdown(doc, &ImageUrlTable::new()).unwrap()
}

#[test]
fn test_style_exclusivity() {
    // two or more styles on one run yield exactly one wrapper, by precedence
    let mut doc = Document::new();
    let mut p = Paragraph::new();
    p.add_run(TextRun {
        content: "both".to_string(),
        style: TextStyle {
            bold: true,
            italic: true,
            ..Default::default()
        },
        link: None,
    });
    doc.add_paragraph(p);

    assert_eq!(render(&doc), "**both**\n\n");
}

#[test]
fn test_monospace_beats_every_other_style() {
    let mut doc = Document::new();
    let mut p = Paragraph::new();
    let mut run = TextRun::new("code");
    run.style.bold = true;
    run.style.strikethrough = true;
    run.style.font_family = Some("Roboto Mono".to_string());
    p.add_run(run);
    p.add_text(" after");
    doc.add_paragraph(p);

    assert_eq!(render(&doc), "`code` after\n\n");
}

#[test]
fn test_code_block_round_trip() {
    // consecutive monospace paragraphs fuse into one fenced block holding
    // their raw contents, unescaped
    let mut doc = Document::new();
    for line in ["fn main() {\n", "    *ptr += 1;\n", "}\n"] {
        let mut p = Paragraph::new();
        p.add_run(TextRun::monospace(line));
        doc.add_paragraph(p);
    }
    doc.add_paragraph(Paragraph::with_text("after"));

    let md = render(&doc);
    assert_eq!(md, "```\nfn main() {\n    *ptr += 1;\n}\n```\n\nafter\n\n");
}

#[test]
fn test_footnote_ordering() {
    // references [b, a, b, c] produce endnotes b, a, c, each exactly once
    let mut doc = Document::new();
    doc.add_footnote("a", Footnote::with_text("note a"));
    doc.add_footnote("b", Footnote::with_text("note b"));
    doc.add_footnote("c", Footnote::with_text("note c"));

    let mut p = Paragraph::with_text("text");
    for id in ["b", "a", "b", "c"] {
        p.add_element(ParagraphElement::FootnoteRef { id: id.to_string() });
    }
    doc.add_paragraph(p);

    let md = render(&doc);
    let b = md.find("[^b]: note b").expect("b endnote");
    let a = md.find("[^a]: note a").expect("a endnote");
    let c = md.find("[^c]: note c").expect("c endnote");
    assert!(b < a && a < c);
    for id in ["a", "b", "c"] {
        assert_eq!(md.matches(&format!("[^{id}]:")).count(), 1);
    }
}

#[test]
fn test_blank_line_idempotence() {
    // rendered output is already normalized: no run of two or more blank
    // lines anywhere, no trailing whitespace on any line
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::heading("Head", 1));
    doc.add_paragraph(Paragraph::new()); // empty paragraph
    doc.add_paragraph(Paragraph::new());
    doc.add_paragraph(Paragraph::with_text("tail  "));

    let md = render(&doc);
    assert!(!md.contains("\n\n\n"));
    for line in md.lines() {
        assert_eq!(line, line.trim_end());
    }
}

#[test]
fn test_macro_extraction() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("\\newcommand{\\T1}{Foo}"));
    doc.add_paragraph(Paragraph::with_text("recall that \\T1 holds"));

    let md = render(&doc);

    // the definition moved to the header, digits spelled out
    assert!(md.starts_with("$$\n\\newcommand{\\Tone}{Foo}\n$$\n\n"));
    assert_eq!(md.matches("\\newcommand").count(), 1);

    // every other occurrence of the old name was rewritten
    assert!(md.contains("recall that $\\Tone$ holds"));
    assert!(!md.contains("\\T1"));
}

#[test]
fn test_inline_math() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("energy = \\alpha + 3"));

    assert_eq!(render(&doc), "energy = $\\alpha$ + 3\n\n");
}

#[test]
fn test_missing_image_is_not_fatal() {
    let mut doc = Document::new();
    doc.add_inline_object("fig", InlineObject::image("title"));
    let mut p = Paragraph::new();
    p.add_element(ParagraphElement::InlineObjectRef {
        id: "fig".to_string(),
    });
    doc.add_paragraph(p);
    doc.add_paragraph(Paragraph::with_text("still rendered"));

    let md = render(&doc);
    assert!(md.contains("![title]()"));
    assert!(md.contains("still rendered"));
}

#[test]
fn test_document_scenario() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::heading("Intro", 2));

    let mut p = Paragraph::new();
    p.add_run(TextRun::bold("hello"));
    p.add_run(TextRun::new(" world"));
    doc.add_paragraph(p);

    let mut code = Paragraph::new();
    code.add_run(TextRun::monospace("x=1"));
    doc.add_paragraph(code);

    doc.add_paragraph(Paragraph::with_text("done"));

    assert_eq!(
        render(&doc),
        "## Intro\n\n**hello** world\n\n```\nx=1```\n\ndone\n\n"
    );
}

#[test]
fn test_segmented_render_is_independent() {
    let mut doc = Document::new();
    doc.add_footnote("n", Footnote::with_text("the note"));

    let mut first = Paragraph::with_text("first page");
    first.add_element(ParagraphElement::FootnoteRef {
        id: "n".to_string(),
    });
    doc.add_paragraph(first);

    let mut pb = Paragraph::new();
    pb.add_element(ParagraphElement::PageBreak);
    doc.add_paragraph(pb);

    doc.add_paragraph(Paragraph::with_text("second page"));

    let segments = segment_at_page_breaks(&doc);
    assert_eq!(segments.len(), 2);

    let outputs = render_segments(&doc, &ImageUrlTable::new(), &segments).unwrap();
    assert!(outputs[0].contains("first page[^n]"));
    assert!(outputs[0].contains("[^n]: the note"));
    // the footnote belongs to the first segment only
    assert!(!outputs[1].contains("[^n]"));
    assert_eq!(outputs[1], "second page\n\n");
}

#[test]
fn test_invalid_segment_is_fatal() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("short"));

    let err = render_segments(&doc, &ImageUrlTable::new(), &[0..2]).unwrap_err();
    assert!(matches!(err, Error::SegmentOutOfRange { .. }));
}

#[test]
fn test_unknown_list_reference_aborts() {
    let mut doc = Document::new();
    doc.add_list("known", List::new(vec![ListLevel::numbered()]));
    doc.add_paragraph(Paragraph::with_text("item").with_bullet("unknown", 0));

    assert!(matches!(
        to_markdown(&doc, &ImageUrlTable::new()),
        Err(Error::UnknownList(_))
    ));
}

#[test]
fn test_json_document_end_to_end() {
    // the shape the fetch collaborator hands over
    let doc = Document::from_json(
        r#"{
            "body": [
                {
                    "type": "paragraph",
                    "style": {"named_style": "heading_1"},
                    "elements": [
                        {"type": "text_run", "content": "Report"}
                    ]
                },
                {
                    "type": "paragraph",
                    "elements": [
                        {"type": "text_run", "content": "See the chart"},
                        {"type": "inline_object_ref", "id": "chart.1"},
                        {"type": "footnote_ref", "id": "src"}
                    ]
                },
                {"type": "section_break"}
            ],
            "footnotes": {
                "src": {
                    "content": [
                        {
                            "type": "paragraph",
                            "elements": [{"type": "text_run", "content": "From the survey."}]
                        }
                    ]
                }
            },
            "inline_objects": {
                "chart.1": {"kind": "image", "title": "Totals"}
            }
        }"#,
    )
    .unwrap();

    let mut images = ImageUrlTable::new();
    images.insert("chart.1", "https://cdn.example/totals.png");

    let result = to_markdown_with_stats(&doc, &images).unwrap();
    assert!(result.content.starts_with("# Report\n"));
    assert!(result
        .content
        .contains("See the chart![Totals](https://cdn.example/totals.png)[^src]"));
    assert!(result.content.contains("[^src]: From the survey."));
    // the section break warned and disappeared
    assert_eq!(result.stats.warning_count, 1);
    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.image_count, 1);
    assert_eq!(result.stats.footnote_count, 1);
}

#[test]
fn test_unknown_variants_are_tolerated() {
    let doc = Document::from_json(
        r#"{
            "body": [
                {"type": "sidebar"},
                {
                    "type": "paragraph",
                    "elements": [
                        {"type": "smart_chip"},
                        {"type": "text_run", "content": "kept"}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let result = to_markdown_with_stats(&doc, &ImageUrlTable::new()).unwrap();
    assert_eq!(result.content, "kept\n\n");
    assert_eq!(result.stats.warning_count, 2);
}

#[test]
fn test_rendering_is_pure() {
    // the same inputs render twice to the same output
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::heading("Twice", 3));
    doc.add_paragraph(Paragraph::with_text("body \\beta text"));

    let first = render(&doc);
    let second = render(&doc);
    assert_eq!(first, second);
}
