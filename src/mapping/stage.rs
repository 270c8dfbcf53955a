//! Staged evaluation of aesthetic values
//!
//! Most aesthetic values are evaluated once, against the layer data, before
//! anything else happens. A [`StagedValue`] defers (part of) the evaluation
//! to a later pipeline stage: `after_stat` expressions are substituted once
//! statistics are computed, `after_scale` expressions once scale
//! transformation is applied. Which slots are populated determines which
//! stages consume the value; consumers branch on slot presence and never
//! assume all three are set.

use serde::{Deserialize, Serialize};

use super::types::{AestheticValue, Expression};

/// Aesthetic value with per-stage evaluation slots
///
/// A staged value with only `after_stat` populated is never visible as a
/// starting mapping; it first appears once the stat has run. In normal use
/// at least one slot is populated: an all-`None` staged value is
/// constructible but is rejected by label derivation as an upstream
/// invariant violation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StagedValue {
    /// Value to use before any transformation
    pub start: Option<Box<AestheticValue>>,
    /// Expression to substitute once statistics are computed
    pub after_stat: Option<Expression>,
    /// Expression to substitute once scale transformation is applied
    pub after_scale: Option<Expression>,
}

impl StagedValue {
    /// Check if no slot is populated
    pub fn is_degenerate(&self) -> bool {
        self.start.is_none() && self.after_stat.is_none() && self.after_scale.is_none()
    }
}

/// Map an aesthetic to an expression evaluated after statistics are computed
///
/// ```
/// use ggaes::{after_stat, Aes, AestheticValue};
///
/// let mapping = Aes::xy(AestheticValue::column("price"), after_stat("count"));
/// assert_eq!(mapping.calculated()["y"].source(), "count");
/// ```
pub fn after_stat(expression: impl Into<String>) -> AestheticValue {
    AestheticValue::Staged(StagedValue {
        start: None,
        after_stat: Some(Expression::new(expression)),
        after_scale: None,
    })
}

/// Map an aesthetic to an expression evaluated after scale transformation
pub fn after_scale(expression: impl Into<String>) -> AestheticValue {
    AestheticValue::Staged(StagedValue {
        start: None,
        after_stat: None,
        after_scale: Some(Expression::new(expression)),
    })
}

/// Map an aesthetic at more than one stage of the plot building pipeline
///
/// The general form of [`after_stat`] and [`after_scale`]: a starting value
/// plus any combination of deferred expressions.
pub fn stage(
    start: Option<AestheticValue>,
    after_stat: Option<Expression>,
    after_scale: Option<Expression>,
) -> AestheticValue {
    AestheticValue::Staged(StagedValue {
        start: start.map(Box::new),
        after_stat,
        after_scale,
    })
}
