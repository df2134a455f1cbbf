//! Inline LaTeX utilities for Markdown output.
//!
//! The destination platform renders `$...$` spans with MathJax, so runs of
//! LaTeX inside ordinary prose are wrapped in dollar signs, and
//! `\newcommand` definition lines are lifted out of the body into a `$$`
//! header block.

use regex::Regex;

/// Matcher for whole lines of the form `\newcommand{name}{value}`.
pub(crate) struct MacroPattern {
    regex: Regex,
}

impl MacroPattern {
    pub(crate) fn new() -> Self {
        Self {
            regex: Regex::new(r"^\\newcommand\{(.+)\}\{(.*)\}$").unwrap(),
        }
    }

    /// Parse a macro-definition line into its name and value.
    pub(crate) fn parse<'t>(&self, line: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.regex.captures(line)?;
        match (caps.get(1), caps.get(2)) {
            (Some(name), Some(value)) => Some((name.as_str(), value.as_str())),
            _ => None,
        }
    }
}

/// Spell out decimal digits in a macro name, `\T1` becoming `\Tone`.
/// LaTeX command names may not contain digits.
pub(crate) fn fix_latex_symbol(name: &str) -> String {
    let mut fixed = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '0' => fixed.push_str("zero"),
            '1' => fixed.push_str("one"),
            '2' => fixed.push_str("two"),
            '3' => fixed.push_str("three"),
            '4' => fixed.push_str("four"),
            '5' => fixed.push_str("five"),
            '6' => fixed.push_str("six"),
            '7' => fixed.push_str("seven"),
            '8' => fixed.push_str("eight"),
            '9' => fixed.push_str("nine"),
            _ => fixed.push(c),
        }
    }
    fixed
}

/// Split a line into leading whitespace, core text, and trailing whitespace.
/// Markdown emphasis markers must sit adjacent to non-space content, so the
/// wrapper goes around the core only.
pub(crate) fn split_space(line: &str) -> (&str, &str, &str) {
    let after_lead = line.trim_start();
    let lead = &line[..line.len() - after_lead.len()];
    let core = after_lead.trim_end();
    let trail = &after_lead[core.len()..];
    (lead, core, trail)
}

/// Copy `line` to `out`, wrapping backslash-introduced LaTeX identifiers in
/// `$` signs.
///
/// A literal backslash opens a math span; the first non-alphanumeric
/// character closes it (and is itself emitted); an open span closes at line
/// end. `\alpha` becomes `$\alpha$` without requiring an equation object in
/// the source.
pub(crate) fn mark_inline_math(out: &mut String, line: &str) {
    let mut in_latex = false;
    for c in line.chars() {
        if !in_latex && c == '\\' {
            out.push('$');
            in_latex = true;
        } else if in_latex && !c.is_alphanumeric() {
            out.push('$');
            in_latex = false;
        }
        out.push(c);
    }
    if in_latex {
        out.push('$');
    }
}
