//! Final pass over rendered Markdown.
//!
//! Macro names may be used before their definition appears in document
//! order, so name substitutions can only run once the whole body and all
//! footnotes have been rendered. The same pass normalizes whitespace.

use std::borrow::Cow;
use std::collections::HashMap;

/// Assemble the final output from the rendered body.
///
/// Prepends the `$$` macro header when any definitions were extracted, then
/// walks the body line by line: right-trims each line, collapses runs of two
/// or more blank lines to exactly one, and applies every registered name
/// substitution to each non-blank line as a whole. The walk is idempotent on
/// already-normalized text.
pub(crate) fn postprocess(
    body: &str,
    latex_defs: &str,
    replace: &HashMap<String, String>,
) -> String {
    let mut out = String::with_capacity(body.len() + latex_defs.len());

    if !latex_defs.is_empty() {
        out.push_str("$$\n");
        out.push_str(latex_defs);
        out.push_str("$$\n\n");
    }

    let mut empty_lines = 0u32;
    for line in body.split('\n') {
        let line = line.trim_end();

        if line.is_empty() {
            empty_lines += 1;
            if empty_lines < 2 {
                out.push('\n');
            }
            continue;
        }
        empty_lines = 0;

        let mut line = Cow::Borrowed(line);
        for (from, to) in replace {
            if line.contains(from.as_str()) {
                line = Cow::Owned(line.replace(from.as_str(), to));
            }
        }

        out.push_str(&line);
        out.push('\n');
    }

    out
}
