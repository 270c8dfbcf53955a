//! Heuristic validation of literal aesthetic values
//!
//! A light check that a literal looks like something the named channel can
//! render. There is no guarantee a value that passes is spot-on valid;
//! values that fail are certainly not. Channel kinds without a heuristic
//! return false so the special cases get discovered and coded for.

use super::types::{AestheticValue, ScalarValue};

/// Named linetype patterns, including the punctuation and blank aliases
const NAMED_LINETYPES: &[&str] = &[
    "solid", "dashed", "dashdot", "dotdash", "dotted", "longdash", "twodash", "_", "--", "-.",
    ":", "none", " ", "",
];

/// Named marker shapes
const NAMED_SHAPES: &[&str] = &[
    "circle",
    "square",
    "diamond",
    "triangle-up",
    "triangle-down",
    "star",
    "cross",
    "plus",
    "stroke",
    "vline",
    "asterisk",
    "bowtie",
    "square-cross",
    "circle-plus",
    "square-plus",
];

/// Check if a literal value looks valid for the named aesthetic
///
/// Covers `linetype`, `shape` and `color`/`fill`; any other channel kind
/// returns false.
pub fn is_valid_aesthetic(value: &AestheticValue, aesthetic: &str) -> bool {
    match aesthetic {
        "linetype" => is_valid_linetype(value),
        "shape" => is_valid_shape(value),
        "color" | "fill" => is_valid_color(value),
        _ => false,
    }
}

/// Collect a sequence of integral numbers; any other element kind fails
fn as_integers(elements: &[ScalarValue]) -> Option<Vec<i64>> {
    elements
        .iter()
        .map(|element| match element {
            ScalarValue::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        })
        .collect()
}

/// Named pattern or dash sequence
///
/// A dash sequence is `[on, off, ...]` pairs of positive segment lengths,
/// optionally preceded by a non-negative offset (the odd-length form).
fn is_valid_linetype(value: &AestheticValue) -> bool {
    match value {
        AestheticValue::Scalar(ScalarValue::String(s)) => {
            NAMED_LINETYPES.contains(&s.to_lowercase().as_str())
        }
        AestheticValue::Sequence(elements) => {
            let Some(numbers) = as_integers(elements) else {
                return false;
            };
            let segments = if numbers.len() % 2 == 1 {
                match numbers.split_first() {
                    Some((offset, rest)) if *offset >= 0 => rest,
                    _ => return false,
                }
            } else {
                &numbers[..]
            };
            !segments.is_empty() && segments.iter().all(|length| *length > 0)
        }
        _ => false,
    }
}

/// Named marker or the `(numsides, style, angle)` structural form
fn is_valid_shape(value: &AestheticValue) -> bool {
    match value {
        AestheticValue::Scalar(ScalarValue::String(s)) => {
            NAMED_SHAPES.contains(&s.to_lowercase().as_str())
        }
        AestheticValue::Sequence(elements) => match as_integers(elements) {
            Some(numbers) => numbers.len() == 3 && (0..3).contains(&numbers[1]),
            None => false,
        },
        _ => false,
    }
}

/// CSS color string or an RGB/RGBA sequence of unit-interval numbers
fn is_valid_color(value: &AestheticValue) -> bool {
    match value {
        AestheticValue::Scalar(ScalarValue::String(s)) => csscolorparser::parse(s).is_ok(),
        AestheticValue::Sequence(elements) => {
            (3..=4).contains(&elements.len())
                && elements.iter().all(|element| match element {
                    ScalarValue::Number(channel) => (0.0..=1.0).contains(channel),
                    _ => false,
                })
        }
        _ => false,
    }
}
