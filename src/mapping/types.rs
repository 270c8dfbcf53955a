//! Value types for aesthetic mappings
//!
//! This module defines the value model used by [`Aes`](super::Aes): literal
//! scalars, sequences, column references, expressions and the staged marker.
//! These are the building blocks that capture what the user bound to each
//! visual channel.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::stage::StagedValue;

/// Literal scalar bound to an aesthetic channel
///
/// Scalars are carried opaquely until label derivation asks for their
/// display form; evaluating them against data is the pipeline's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            // integral numbers label without a trailing ".0"
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.0}", n),
            Self::Number(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Evaluation namespace for expressions
///
/// Holds name → value bindings from the caller's scope that expressions may
/// refer to in addition to data columns. A namespace is shared by reference
/// between expressions (see [`Expression`]); it is read-only context for
/// downstream expression evaluation and is never duplicated by a deep copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    bindings: HashMap<String, ScalarValue>,
}

impl Namespace {
    /// Create a new empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name to a value
    pub fn bind(&mut self, name: impl Into<String>, value: ScalarValue) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name
    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.bindings.get(name)
    }

    /// Check if a name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the namespace has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// An expression over data columns and namespace bindings
///
/// The source text is evaluated by later pipeline stages against the layer
/// data; this crate only carries it. The optional namespace is shared, not
/// owned: cloning an expression clones the `Arc`, never the bindings, and
/// serialization skips it entirely (a live namespace is runtime-only state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    source: String,
    #[serde(skip)]
    namespace: Option<Arc<Namespace>>,
}

impl Expression {
    /// Create an expression from source text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            namespace: None,
        }
    }

    /// Create an expression that can also see the given namespace
    pub fn with_namespace(source: impl Into<String>, namespace: Arc<Namespace>) -> Self {
        Self {
            source: source.into(),
            namespace: Some(namespace),
        }
    }

    /// The expression source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The shared evaluation namespace, if any
    pub fn namespace(&self) -> Option<&Arc<Namespace>> {
        self.namespace.as_ref()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Value bound to an aesthetic channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AestheticValue {
    /// Literal scalar, recycled over all rows
    Scalar(ScalarValue),
    /// Sequence of literal values, one per data row
    Sequence(Vec<ScalarValue>),
    /// Reference to a named data column
    Column { name: String },
    /// Expression over columns and namespace bindings
    Expr(Expression),
    /// Value evaluated at a specific pipeline stage
    Staged(StagedValue),
}

impl AestheticValue {
    /// Create a column reference
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column { name: name.into() }
    }

    /// Create an expression value from source text
    pub fn expr(source: impl Into<String>) -> Self {
        Self::Expr(Expression::new(source))
    }

    /// Get column name if this is a column reference
    pub fn column_name(&self) -> Option<&str> {
        match self {
            Self::Column { name } => Some(name),
            _ => None,
        }
    }

    /// Check if this value is staged
    pub fn is_staged(&self) -> bool {
        matches!(self, Self::Staged(_))
    }

    /// Get the staged value if this value is staged
    pub fn as_staged(&self) -> Option<&StagedValue> {
        match self {
            Self::Staged(staged) => Some(staged),
            _ => None,
        }
    }
}

impl From<ScalarValue> for AestheticValue {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

impl From<f64> for AestheticValue {
    fn from(value: f64) -> Self {
        Self::Scalar(ScalarValue::Number(value))
    }
}

impl From<Vec<ScalarValue>> for AestheticValue {
    fn from(values: Vec<ScalarValue>) -> Self {
        Self::Sequence(values)
    }
}
