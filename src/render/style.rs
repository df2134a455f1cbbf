//! Text-style resolution for Markdown output.

use crate::model::{BaselineOffset, TextRun, TextStyle};

use super::result::RenderStats;

/// Font families rendered as code, matched case-insensitively.
const MONOSPACE_FONTS: &[&str] = &["courier new", "consolas", "roboto mono"];

/// Whether a font family is monospace. Monospace runs render as inline code,
/// and paragraphs set entirely in a monospace font become fenced code blocks.
pub fn is_monospace(font_family: Option<&str>) -> bool {
    let Some(family) = font_family else {
        return false;
    };
    MONOSPACE_FONTS.contains(&family.to_lowercase().as_str())
}

/// Pick the single emphasis wrapper for a run.
///
/// Markdown supports at most one of italic, bold, strikethrough, or code
/// styling per span, so later checks overwrite earlier ones: the effective
/// precedence is italic < bold < strikethrough < monospace.
pub fn emphasis_wrapper(style: &TextStyle) -> &'static str {
    let mut wrapper = "";
    if style.italic {
        wrapper = "*";
    }
    if style.bold {
        wrapper = "**";
    }
    if style.strikethrough {
        wrapper = "-";
    }
    if is_monospace(style.font_family.as_deref()) {
        wrapper = "`";
    }
    wrapper
}

/// Warn about styling on a run that Markdown cannot represent.
///
/// Foreground color and underline are conventional on links, so for linked
/// runs they pass without a warning.
pub(crate) fn warn_unsupported(run: &TextRun, stats: &mut RenderStats) {
    let style = &run.style;
    if style.small_caps {
        stats.add_warning();
        log::warn!("ignoring small caps on {:?}", run.content);
    }
    if style.background_color.is_some() {
        stats.add_warning();
        log::warn!("ignoring background color on {:?}", run.content);
    }
    if style.foreground_color.is_some() && run.link.is_none() {
        stats.add_warning();
        log::warn!("ignoring foreground color on {:?}", run.content);
    }
    if style.underline && run.link.is_none() {
        stats.add_warning();
        log::warn!("ignoring underline on {:?}", run.content);
    }
    match style.baseline_offset {
        BaselineOffset::Subscript => {
            stats.add_warning();
            log::warn!("ignoring subscript on {:?}", run.content);
        }
        BaselineOffset::Superscript => {
            stats.add_warning();
            log::warn!("ignoring superscript on {:?}", run.content);
        }
        BaselineOffset::None => {}
    }
}
