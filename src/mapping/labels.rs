//! Label derivation from aesthetic mappings
//!
//! Axis and legend titles default to text derived from the mapping itself:
//! a column name, an expression, or the display form of a literal. The
//! [`Labels`] record holds one optional string per recognized channel;
//! channels outside the recognized set stay in the mapping but produce no
//! label.

use serde::{Deserialize, Serialize};

use super::aes::Aes;
use super::types::AestheticValue;
use crate::{GgaesError, Result};

/// Default label text per recognized aesthetic channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub x: Option<String>,
    pub y: Option<String>,
    pub alpha: Option<String>,
    pub color: Option<String>,
    pub fill: Option<String>,
    pub linetype: Option<String>,
    pub shape: Option<String>,
    pub size: Option<String>,
    pub stroke: Option<String>,
}

impl Labels {
    /// The recognized label fields, matching
    /// [`SCALED_AESTHETICS`](super::aesthetic::SCALED_AESTHETICS)
    pub const FIELDS: &'static [&'static str] = &[
        "x", "y", "alpha", "color", "fill", "linetype", "shape", "size", "stroke",
    ];

    /// Create an empty label record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a label by field name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.slot(field).and_then(|label| label.as_deref())
    }

    /// Iterate over the populated fields
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Self::FIELDS
            .iter()
            .filter_map(|field| self.get(field).map(|label| (*field, label)))
    }

    /// Check if no field is populated
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Overwrite-merge: populated fields of `other` win
    pub fn update(&mut self, other: &Labels) {
        for (field, label) in other.iter() {
            if let Some(slot) = self.slot_mut(field) {
                *slot = Some(label.to_string());
            }
        }
    }

    fn slot(&self, field: &str) -> Option<&Option<String>> {
        match field {
            "x" => Some(&self.x),
            "y" => Some(&self.y),
            "alpha" => Some(&self.alpha),
            "color" => Some(&self.color),
            "fill" => Some(&self.fill),
            "linetype" => Some(&self.linetype),
            "shape" => Some(&self.shape),
            "size" => Some(&self.size),
            "stroke" => Some(&self.stroke),
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut Option<String>> {
        match field {
            "x" => Some(&mut self.x),
            "y" => Some(&mut self.y),
            "alpha" => Some(&mut self.alpha),
            "color" => Some(&mut self.color),
            "fill" => Some(&mut self.fill),
            "linetype" => Some(&mut self.linetype),
            "shape" => Some(&mut self.shape),
            "size" => Some(&mut self.size),
            "stroke" => Some(&mut self.stroke),
            _ => None,
        }
    }
}

/// Display label for a value evaluated against the layer data
///
/// A column reference labels as its name, an expression as its source
/// text, a literal scalar as its display form. A generic sequence has no
/// obvious name and produces no label.
fn nice_label(value: &AestheticValue) -> Option<String> {
    match value {
        AestheticValue::Column { name } => Some(name.clone()),
        AestheticValue::Expr(expr) => Some(expr.source().to_string()),
        AestheticValue::Scalar(scalar) => Some(scalar.to_string()),
        AestheticValue::Sequence(_) => None,
        AestheticValue::Staged(_) => None,
    }
}

/// Display label for a single channel binding
fn make_label(aesthetic: &str, value: &AestheticValue) -> Result<Option<String>> {
    let staged = match value {
        AestheticValue::Staged(staged) => staged,
        value => return Ok(nice_label(value)),
    };

    if let Some(expr) = &staged.after_stat {
        return Ok(Some(expr.source().to_string()));
    }
    match (&staged.start, &staged.after_scale) {
        (Some(start), _) => Ok(nice_label(start)),
        (None, Some(expr)) => Ok(Some(expr.source().to_string())),
        (None, None) => Err(GgaesError::UnknownMapping(aesthetic.to_string())),
    }
}

/// Convert an aesthetic mapping into default label text
///
/// Only channels in the recognized field set produce labels; everything
/// else is silently dropped from the label record while remaining in the
/// mapping. Fails with [`GgaesError::UnknownMapping`] when a degenerate
/// staged value (no slot populated) is encountered.
pub fn make_labels(mapping: &Aes) -> Result<Labels> {
    let mut labels = Labels::new();
    for (aesthetic, value) in mapping.iter() {
        if let Some(slot) = labels.slot_mut(aesthetic) {
            *slot = make_label(aesthetic, value)?;
        }
    }
    Ok(labels)
}
