//! Aesthetic mapping types for ggaes
//!
//! This module contains everything needed to declare and inspect aesthetic
//! mappings: the ordered [`Aes`] container, the value model, staged
//! evaluation, deprecated-syntax migration, channel classification, label
//! derivation and the literal-value validity heuristic.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `aes` - The [`Aes`] container and its staged projections
//! - `types` - Value types: [`AestheticValue`], [`ScalarValue`], [`Expression`]
//! - `stage` - [`StagedValue`] and the `after_stat`/`after_scale`/`stage` constructors
//! - `calculated` - Deprecated calculated-aesthetic syntax detection and stripping
//! - `aesthetic` - Channel-name vocabulary and position/scale classification
//! - `labels` - The [`Labels`] view and [`make_labels`]
//! - `validity` - Heuristic validation of literal aesthetic values

pub mod aes;
pub mod aesthetic;
pub mod calculated;
pub mod labels;
pub mod stage;
pub mod types;
pub mod validity;

// Re-export all types for convenience
pub use aes::Aes;
pub use aesthetic::{
    aes_to_scale, is_position_aes, rename_aesthetic, rename_aesthetics, ALL_AESTHETICS,
    POSITION_AESTHETICS, SCALED_AESTHETICS, X_AESTHETICS, Y_AESTHETICS,
};
pub use calculated::{
    is_calculated_aes, is_calculated_expr, strip_calculated_markers, strip_dots, strip_stat,
};
pub use labels::{make_labels, Labels};
pub use stage::{after_scale, after_stat, stage, StagedValue};
pub use types::{AestheticValue, Expression, Namespace, ScalarValue};
pub use validity::is_valid_aesthetic;
