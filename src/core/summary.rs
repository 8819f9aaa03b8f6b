use std::fmt::{Display, Write as _};

/// Renders items as a numbered list, one per line: `1. A\n2. B`.
///
/// Numbering follows the iteration order of `items`. No trailing newline; an
/// empty input renders as an empty string.
#[must_use]
pub fn format_summary<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        let _ = writeln!(out, "{}. {item}", i + 1);
    }
    if out.ends_with('\n') {
        out.pop();
    }
    out
}
