//! Configuration types for sweep analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::model::GoodId;

/// Which baseline input a sweep varies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDimension {
    /// Price of a single good; every other price stays at baseline
    Price(GoodId),
    /// Total household budget
    Budget,
}

impl SweepDimension {
    /// Axis label for display
    pub fn label(&self) -> String {
        match self {
            SweepDimension::Price(good) => format!("Price of {good}"),
            SweepDimension::Budget => "Budget".to_string(),
        }
    }
}

impl fmt::Display for SweepDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Monotonic transform applied to every tabulated value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    #[default]
    Identity,
    /// Natural logarithm; only defined for strictly positive values
    Log,
}

impl Transform {
    /// Apply the transform, or `None` if the value is outside its domain
    #[must_use]
    pub fn apply(self, value: f64) -> Option<f64> {
        match self {
            Transform::Identity => Some(value),
            Transform::Log if value > 0.0 => Some(value.ln()),
            Transform::Log => None,
        }
    }
}

/// Complete specification of a one-dimensional sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec<K> {
    /// The baseline input to vary
    pub dimension: SweepDimension,
    /// Multipliers applied to the baseline value of `dimension`
    pub grid: Grid,
    /// Labels kept from each evaluation, in column order
    pub retain: Vec<K>,
    /// Transform applied to retained values
    #[serde(default)]
    pub transform: Transform,
}

impl<K> SweepSpec<K> {
    /// Get total number of sweep points
    pub fn total_points(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_transform_domain() {
        assert_eq!(Transform::Log.apply(1.0), Some(0.0));
        assert_eq!(Transform::Log.apply(0.0), None);
        assert_eq!(Transform::Log.apply(-2.0), None);
        assert_eq!(Transform::Log.apply(f64::NAN), None);
        assert_eq!(Transform::Identity.apply(-2.0), Some(-2.0));
    }

    #[test]
    fn test_dimension_labels() {
        assert_eq!(
            SweepDimension::Price(GoodId::from("rice")).label(),
            "Price of rice"
        );
        assert_eq!(SweepDimension::Budget.to_string(), "Budget");
    }
}
