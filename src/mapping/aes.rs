//! The aesthetic mapping container
//!
//! [`Aes`] is an ordered mapping from channel name to [`AestheticValue`].
//! Construction normalizes channel names, binds positional values to the
//! `x`/`y` channels and migrates the deprecated calculated-aesthetic
//! syntax to the staged representation. Later pipeline stages consume the
//! mapping read-only through the three staged projections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::aesthetic::rename_aesthetic;
use super::calculated::{is_calculated_expr, strip_calculated_markers};
use super::stage::StagedValue;
use super::types::{AestheticValue, Expression};

/// Aesthetic mapping: ordered channel → value bindings
///
/// Channel names are normalized on insertion (the legacy `colour` spelling
/// becomes `color`) and values using the deprecated calculated syntax are
/// rewrapped as staged `after_stat` values. Insertion order is preserved;
/// re-inserting an existing channel replaces its value in place.
///
/// Arbitrary channel names are allowed. Only the recognized sets in
/// [`aesthetic`](super::aesthetic) take part in label derivation, scale
/// lookup and position classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aes {
    entries: Vec<(String, AestheticValue)>,
}

impl Aes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping with a value bound to the `x` channel
    pub fn x(value: AestheticValue) -> Self {
        Self::new().with("x", value)
    }

    /// Create a mapping with values bound to the `x` and `y` channels
    ///
    /// The positional form of construction: the two values are bound to the
    /// fixed channel names in order. Like any other insertion, a value
    /// using the deprecated calculated syntax is downgraded to a staged
    /// value here.
    pub fn xy(x: AestheticValue, y: AestheticValue) -> Self {
        Self::new().with("x", x).with("y", y)
    }

    /// Bind a channel to a value, normalizing name and value
    pub fn insert(&mut self, aesthetic: impl Into<String>, value: AestheticValue) {
        let name = rename_aesthetic(&aesthetic.into());
        self.insert_raw(name, convert_deprecated(value));
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, aesthetic: impl Into<String>, value: AestheticValue) -> Self {
        self.insert(aesthetic, value);
        self
    }

    /// Insert without normalization; used where the inputs already went
    /// through construction.
    fn insert_raw(&mut self, name: String, value: AestheticValue) {
        match self.entries.iter().position(|(k, _)| *k == name) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get a channel's value by name
    pub fn get(&self, aesthetic: &str) -> Option<&AestheticValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == aesthetic)
            .map(|(_, value)| value)
    }

    /// Check if a channel is mapped
    pub fn contains_key(&self, aesthetic: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == aesthetic)
    }

    /// Remove a channel binding, returning its value
    pub fn remove(&mut self, aesthetic: &str) -> Option<AestheticValue> {
        let idx = self.entries.iter().position(|(name, _)| name == aesthetic)?;
        Some(self.entries.remove(idx).1)
    }

    /// Number of mapped channels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AestheticValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over channel names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Overwrite-merge another mapping into this one
    ///
    /// Every binding of `other` is copied in; on conflict `other` wins.
    /// Used by plot assembly when a mapping is added to a plot.
    pub fn update(&mut self, other: &Aes) {
        for (name, value) in other.iter() {
            self.insert_raw(name.to_string(), value.clone());
        }
    }

    /// Create a mapping that inherits missing channels from `other`
    ///
    /// Every binding of `self` is kept unchanged; bindings of `other` are
    /// added only for channels `self` does not map. Neither input is
    /// mutated.
    pub fn inherit(&self, other: &Aes) -> Aes {
        let mut new = self.clone();
        for (name, value) in other.iter() {
            if !new.contains_key(name) {
                new.insert_raw(name.to_string(), value.clone());
            }
        }
        new
    }

    /// The subset of channels evaluated against the layer data
    ///
    /// Includes every non-staged binding as-is, plus staged bindings with a
    /// populated `start` slot (peeled to the `start` content). Staged
    /// bindings without a starting value are absent; they first appear at
    /// a later stage.
    pub fn starting(&self) -> HashMap<String, AestheticValue> {
        let mut out = HashMap::new();
        for (name, value) in self.iter() {
            match value {
                AestheticValue::Staged(staged) => {
                    if let Some(start) = &staged.start {
                        out.insert(name.to_string(), (**start).clone());
                    }
                }
                value => {
                    out.insert(name.to_string(), value.clone());
                }
            }
        }
        out
    }

    /// The channels mapped to expressions over stat-computed columns
    pub fn calculated(&self) -> HashMap<String, Expression> {
        let mut out = HashMap::new();
        for (name, value) in self.iter() {
            if let AestheticValue::Staged(staged) = value {
                if let Some(expr) = &staged.after_stat {
                    out.insert(name.to_string(), expr.clone());
                }
            }
        }
        out
    }

    /// The channels mapped to expressions applied after scaling
    pub fn scaled(&self) -> HashMap<String, Expression> {
        let mut out = HashMap::new();
        for (name, value) in self.iter() {
            if let AestheticValue::Staged(staged) = value {
                if let Some(expr) = &staged.after_scale {
                    out.insert(name.to_string(), expr.clone());
                }
            }
        }
        out
    }
}

/// Migrate the deprecated calculated syntax to the staged representation
///
/// An expression containing a legacy marker becomes a staged value whose
/// `after_stat` slot holds the stripped expression; its namespace reference
/// is carried over. Every other value passes through unchanged.
fn convert_deprecated(value: AestheticValue) -> AestheticValue {
    match value {
        AestheticValue::Expr(expr) if is_calculated_expr(expr.source()) => {
            let stripped = strip_calculated_markers(expr.source());
            let after_stat = match expr.namespace() {
                Some(ns) => Expression::with_namespace(stripped, ns.clone()),
                None => Expression::new(stripped),
            };
            AestheticValue::Staged(StagedValue {
                start: None,
                after_stat: Some(after_stat),
                after_scale: None,
            })
        }
        value => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::types::{Namespace, ScalarValue};
    use crate::mapping::{after_scale, after_stat, stage};
    use std::sync::Arc;

    #[test]
    fn test_construction_normalizes_legacy_spelling() {
        let mapping = Aes::new().with("colour", AestheticValue::column("cylinders"));
        assert!(mapping.contains_key("color"));
        assert!(!mapping.contains_key("colour"));
        assert!(mapping.keys().all(|name| !name.contains("colour")));
    }

    #[test]
    fn test_construction_normalization_idempotent() {
        let once = Aes::new().with("colour", AestheticValue::column("cylinders"));
        let mut twice = Aes::new();
        for (name, value) in once.iter() {
            twice.insert(name, value.clone());
        }
        assert_eq!(twice, once);
    }

    #[test]
    fn test_positional_binding() {
        let mapping = Aes::xy(
            AestheticValue::column("displacement"),
            AestheticValue::column("mpg"),
        );
        assert_eq!(mapping.get("x"), Some(&AestheticValue::column("displacement")));
        assert_eq!(mapping.get("y"), Some(&AestheticValue::column("mpg")));
    }

    #[test]
    fn test_positional_value_migrates_to_staged() {
        let mapping = Aes::xy(
            AestheticValue::column("price"),
            AestheticValue::expr("stat(count)"),
        );
        let staged = mapping.get("y").unwrap().as_staged().unwrap();
        assert_eq!(staged.after_stat.as_ref().unwrap().source(), "count");
        assert!(staged.start.is_none());
    }

    #[test]
    fn test_dots_syntax_migrates_to_staged() {
        let mapping = Aes::new().with("y", AestheticValue::expr("..density.."));
        let staged = mapping.get("y").unwrap().as_staged().unwrap();
        assert_eq!(staged.after_stat.as_ref().unwrap().source(), "density");
    }

    #[test]
    fn test_migration_keeps_namespace_reference() {
        let ns = Arc::new(Namespace::new());
        let expr = Expression::with_namespace("stat(count / n)", Arc::clone(&ns));
        let mapping = Aes::new().with("y", AestheticValue::Expr(expr));

        let staged = mapping.get("y").unwrap().as_staged().unwrap();
        let after_stat = staged.after_stat.as_ref().unwrap();
        assert_eq!(after_stat.source(), "count / n");
        assert!(Arc::ptr_eq(after_stat.namespace().unwrap(), &ns));
    }

    #[test]
    fn test_plain_values_pass_through() {
        let mapping = Aes::new()
            .with("y", AestheticValue::expr("2 * beta"))
            .with("size", AestheticValue::from(4.0));
        assert!(!mapping.get("y").unwrap().is_staged());
        assert!(!mapping.get("size").unwrap().is_staged());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut mapping = Aes::xy(
            AestheticValue::column("a"),
            AestheticValue::column("b"),
        );
        mapping.insert("x", AestheticValue::column("c"));
        assert_eq!(mapping.len(), 2);
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(mapping.get("x"), Some(&AestheticValue::column("c")));
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mapping = Aes::new()
            .with("shape", AestheticValue::column("s"))
            .with("x", AestheticValue::column("a"))
            .with("fill", AestheticValue::column("f"));
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["shape", "x", "fill"]);
    }

    #[test]
    fn test_remove() {
        let mut mapping = Aes::x(AestheticValue::column("a"));
        assert_eq!(mapping.remove("x"), Some(AestheticValue::column("a")));
        assert!(mapping.is_empty());
        assert_eq!(mapping.remove("x"), None);
    }

    #[test]
    fn test_starting_projection() {
        let mapping = Aes::new()
            .with("x", AestheticValue::column("price"))
            .with("y", after_stat("count"))
            .with(
                "fill",
                stage(
                    Some(AestheticValue::column("grade")),
                    None,
                    Some(Expression::new("darken(fill)")),
                ),
            );

        let starting = mapping.starting();
        assert_eq!(starting.len(), 2);
        assert_eq!(starting["x"], AestheticValue::column("price"));
        // the stage wrapper is peeled off
        assert_eq!(starting["fill"], AestheticValue::column("grade"));
        assert!(!starting.contains_key("y"));
    }

    #[test]
    fn test_calculated_and_scaled_projections() {
        let mapping = Aes::new()
            .with("x", AestheticValue::column("price"))
            .with("y", after_stat("count"))
            .with("color", after_scale("lighten(color)"));

        let calculated = mapping.calculated();
        assert_eq!(calculated.len(), 1);
        assert_eq!(calculated["y"].source(), "count");

        let scaled = mapping.scaled();
        assert_eq!(scaled.len(), 1);
        assert_eq!(scaled["color"].source(), "lighten(color)");
    }

    #[test]
    fn test_inherit_never_overwrites() {
        let a = Aes::new()
            .with("x", AestheticValue::column("a"))
            .with("color", AestheticValue::column("c"));
        let b = Aes::new()
            .with("x", AestheticValue::column("other"))
            .with("size", AestheticValue::from(2.0));

        let merged = a.inherit(&b);
        // every key of a unchanged
        assert_eq!(merged.get("x"), Some(&AestheticValue::column("a")));
        assert_eq!(merged.get("color"), Some(&AestheticValue::column("c")));
        // keys of b not in a are added
        assert_eq!(merged.get("size"), Some(&AestheticValue::from(2.0)));
        // inputs untouched
        assert_eq!(a.len(), 2);
        assert_eq!(b.get("x"), Some(&AestheticValue::column("other")));
    }

    #[test]
    fn test_update_overwrites() {
        let mut base = Aes::new()
            .with("x", AestheticValue::column("a"))
            .with("color", AestheticValue::column("c"));
        let other = Aes::new()
            .with("x", AestheticValue::column("b"))
            .with("size", AestheticValue::from(3.0));

        base.update(&other);
        assert_eq!(base.get("x"), Some(&AestheticValue::column("b")));
        assert_eq!(base.get("color"), Some(&AestheticValue::column("c")));
        assert_eq!(base.get("size"), Some(&AestheticValue::from(3.0)));
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Aes::new().with(
            "y",
            AestheticValue::Sequence(vec![ScalarValue::Number(1.0), ScalarValue::Number(2.0)]),
        );
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.insert(
            "y",
            AestheticValue::Sequence(vec![ScalarValue::Number(9.0)]),
        );
        assert_ne!(copy, original);
        assert_eq!(
            original.get("y"),
            Some(&AestheticValue::Sequence(vec![
                ScalarValue::Number(1.0),
                ScalarValue::Number(2.0)
            ]))
        );
    }

    #[test]
    fn test_deep_copy_shares_namespace() {
        let ns = Arc::new(Namespace::new());
        let original = Aes::new().with(
            "y",
            AestheticValue::Expr(Expression::with_namespace("2 * beta", Arc::clone(&ns))),
        );
        let copy = original.clone();

        let expr = |mapping: &Aes| match mapping.get("y").unwrap() {
            AestheticValue::Expr(e) => e.clone(),
            _ => unreachable!(),
        };
        assert!(Arc::ptr_eq(
            expr(&original).namespace().unwrap(),
            expr(&copy).namespace().unwrap()
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mapping = Aes::xy(AestheticValue::column("price"), after_stat("count"))
            .with("color", AestheticValue::column("grade"));
        let json = serde_json::to_string(&mapping).unwrap();
        let back: Aes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
