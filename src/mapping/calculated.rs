//! Deprecated calculated-aesthetic syntax
//!
//! Two legacy textual syntaxes mark an expression as "evaluate after the
//! stat has run": a call-like `stat(...)` marker and a double-dot wrapped
//! identifier `..name..`. Both are superseded by
//! [`after_stat`](super::after_stat); they are accepted on input for
//! backward compatibility, normalized to the staged representation during
//! construction, and never re-emitted.

use regex::Regex;
use std::sync::OnceLock;

use super::types::AestheticValue;

/// Regex for the call-like `stat(` marker
fn stat_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bstat\(").expect("Invalid stat marker regex"))
}

/// Regex for the double-dot `..name..` marker
fn dots_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\.([a-zA-Z0-9_]+)\.\.").expect("Invalid dots marker regex"))
}

/// Check if expression text uses either deprecated calculated syntax
pub fn is_calculated_expr(text: &str) -> bool {
    stat_re().is_match(text) || dots_re().is_match(text)
}

/// Check if an aesthetic value uses the deprecated calculated syntax
///
/// Only expression values can carry the markers; every other variant is
/// structurally not an expression string and is never calculated.
pub fn is_calculated_aes(value: &AestheticValue) -> bool {
    match value {
        AestheticValue::Expr(expr) => is_calculated_expr(expr.source()),
        _ => false,
    }
}

/// Remove `stat(` markers from expression text
///
/// Every `stat(` opener is removed, then the now-unmatched closing parens
/// are dropped with a depth counter: a closer encountered at depth zero
/// belongs to a stripped marker and is discarded (the counter stays at
/// zero), so parens of unrelated calls survive intact.
pub fn strip_stat(text: &str) -> String {
    if !stat_re().is_match(text) {
        return text.to_string();
    }

    let stripped = stat_re().replace_all(text, "");
    let mut depth: u32 = 0;
    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    continue;
                }
                depth -= 1;
            }
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Replace every `..name..` marker with the bare identifier
pub fn strip_dots(text: &str) -> String {
    dots_re().replace_all(text, "$1").into_owned()
}

/// Remove both kinds of calculated-aesthetic markers
pub fn strip_calculated_markers(text: &str) -> String {
    strip_stat(&strip_dots(text))
}
