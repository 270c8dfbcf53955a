/*!
# ggaes - Aesthetic Mappings for the Grammar of Graphics

`ggaes` is the aesthetic-mapping layer of a grammar-of-graphics plotting
pipeline. It declares how columns of a dataset (or expressions over them)
are bound to visual channels such as position, color and shape, and lets
some of those bindings be deferred until later stages of the rendering
pipeline (after statistical transformation, after scale transformation).

## Example

```
use ggaes::{after_stat, Aes, AestheticValue, Plot};

let mapping = Aes::xy(
    AestheticValue::column("displacement"),
    after_stat("count"),
)
.with("colour", AestheticValue::column("cylinders"));

// The legacy spelling is canonicalized on insertion.
assert!(mapping.contains_key("color"));

// Downstream stages project out what to evaluate when.
assert!(mapping.calculated().contains_key("y"));

let plot = Plot::new().add_mapping(&mapping).unwrap();
assert_eq!(plot.labels.y.as_deref(), Some("count"));
```

## Core Components

- [`mapping`] - The [`Aes`] container, staged values and label derivation
- [`plot`] - Minimal plot descriptor combining a mapping with its labels

Geometries, statistics, scales and rendering backends are external
collaborators; this crate only produces well-formed mapping objects and
the label text derived from them.
*/

pub mod mapping;
pub mod plot;

// Re-export key types for convenience
pub use mapping::{
    aes_to_scale, after_scale, after_stat, is_calculated_aes, is_position_aes,
    is_valid_aesthetic, make_labels, rename_aesthetics, stage, Aes, AestheticValue, Expression,
    Labels, Namespace, ScalarValue, StagedValue,
};
pub use plot::Plot;

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum GgaesError {
    /// A staged value with no populated slot reached label derivation.
    ///
    /// This is an internal invariant violation, not a user input error:
    /// upstream construction produced a degenerate staged value.
    #[error("unknown mapping for aesthetic `{0}`: staged value has no slot populated")]
    UnknownMapping(String),
}

pub type Result<T> = std::result::Result<T, GgaesError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
