//! Plot descriptor assembly
//!
//! A minimal plot descriptor: the accumulated aesthetic mapping plus the
//! labels derived from it. Combining a mapping with a plot is an explicit
//! merge that returns a new descriptor; neither input is mutated, so a
//! failed merge leaves the plot untouched and later caller-side mutation
//! of the mapping never retroactively affects the plot.

use serde::{Deserialize, Serialize};

use crate::mapping::{make_labels, Aes, Labels};
use crate::Result;

/// Plot descriptor: aesthetic mapping and derived labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    /// Accumulated aesthetic mapping
    pub mapping: Aes,
    /// Axis and legend label text
    pub labels: Labels,
}

impl Plot {
    /// Create an empty plot descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plot descriptor from an initial mapping
    pub fn with_mapping(mapping: &Aes) -> Result<Self> {
        Self::new().add_mapping(mapping)
    }

    /// Combine a mapping into this plot, returning the new descriptor
    ///
    /// The incoming mapping's channels overwrite the plot's on conflict,
    /// and the labels derived from it overwrite the plot's labels for the
    /// channels it maps. Labels are derived first: a degenerate staged
    /// value fails the whole merge before anything is combined.
    pub fn add_mapping(&self, mapping: &Aes) -> Result<Plot> {
        let derived = make_labels(mapping)?;
        let mut plot = self.clone();
        plot.mapping.update(mapping);
        plot.labels.update(&derived);
        Ok(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{after_stat, stage, AestheticValue};

    #[test]
    fn test_add_mapping_merges_and_labels() {
        let mapping = Aes::xy(
            AestheticValue::column("displacement"),
            after_stat("count"),
        );
        let plot = Plot::new().add_mapping(&mapping).unwrap();

        assert_eq!(
            plot.mapping.get("x"),
            Some(&AestheticValue::column("displacement"))
        );
        assert_eq!(plot.labels.x.as_deref(), Some("displacement"));
        assert_eq!(plot.labels.y.as_deref(), Some("count"));
    }

    #[test]
    fn test_add_mapping_incoming_channels_win() {
        let base = Plot::with_mapping(
            &Aes::x(AestheticValue::column("old")).with("color", AestheticValue::column("c")),
        )
        .unwrap();
        let plot = base
            .add_mapping(&Aes::x(AestheticValue::column("new")))
            .unwrap();

        assert_eq!(plot.mapping.get("x"), Some(&AestheticValue::column("new")));
        assert_eq!(plot.mapping.get("color"), Some(&AestheticValue::column("c")));
        assert_eq!(plot.labels.x.as_deref(), Some("new"));
        assert_eq!(plot.labels.color.as_deref(), Some("c"));
        // the original descriptor is unchanged
        assert_eq!(base.mapping.get("x"), Some(&AestheticValue::column("old")));
        assert_eq!(base.labels.x.as_deref(), Some("old"));
    }

    #[test]
    fn test_add_mapping_failure_leaves_plot_untouched() {
        let base = Plot::with_mapping(&Aes::x(AestheticValue::column("a"))).unwrap();
        let degenerate = Aes::new().with("y", stage(None, None, None));

        assert!(base.add_mapping(&degenerate).is_err());
        assert_eq!(base.mapping.len(), 1);
        assert!(base.labels.y.is_none());
    }

    #[test]
    fn test_later_mutation_of_mapping_does_not_affect_plot() {
        let mut mapping = Aes::x(AestheticValue::column("a"));
        let plot = Plot::new().add_mapping(&mapping).unwrap();

        mapping.insert("x", AestheticValue::column("changed"));
        assert_eq!(plot.mapping.get("x"), Some(&AestheticValue::column("a")));
    }
}
