//! Multiplier grids applied to a baseline value
//!
//! A grid is an ordered, non-empty sequence of positive multipliers. Sweeps
//! evaluate at `multiplier * baseline` for each multiplier, in grid order.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Validated sequence of positive multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Grid {
    multipliers: Vec<f64>,
}

impl Grid {
    /// Create a grid from explicit multipliers.
    ///
    /// Every multiplier must be finite and strictly positive.
    pub fn new(multipliers: Vec<f64>) -> Result<Self, GridError> {
        if multipliers.is_empty() {
            return Err(GridError::Empty);
        }
        for (index, &value) in multipliers.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NonFinite { index, value });
            }
            if value <= 0.0 {
                return Err(GridError::NonPositive { index, value });
            }
        }
        Ok(Self { multipliers })
    }

    /// Geometrically spaced multipliers from `start` to `stop` inclusive.
    ///
    /// Both endpoints are reproduced exactly. A single step yields `[start]`.
    pub fn geometric(start: f64, stop: f64, steps: usize) -> Result<Self, GridError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(start) || !valid(stop) {
            return Err(GridError::InvalidRange { start, stop });
        }
        match steps {
            0 => Err(GridError::Empty),
            1 => Self::new(vec![start]),
            _ => {
                let log_start = start.ln();
                let log_step = (stop.ln() - log_start) / (steps - 1) as f64;
                let mut multipliers: Vec<f64> = (0..steps)
                    .map(|i| (log_start + log_step * i as f64).exp())
                    .collect();
                multipliers[0] = start;
                multipliers[steps - 1] = stop;
                Self::new(multipliers)
            }
        }
    }

    #[must_use]
    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Always false; construction rejects empty grids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.multipliers.iter().copied()
    }

    /// Evaluation points for a baseline value, in grid order
    #[must_use]
    pub fn points(&self, baseline_value: f64) -> Vec<f64> {
        self.iter().map(|m| m * baseline_value).collect()
    }
}

impl TryFrom<Vec<f64>> for Grid {
    type Error = GridError;

    fn try_from(multipliers: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(multipliers)
    }
}

impl From<Grid> for Vec<f64> {
    fn from(grid: Grid) -> Self {
        grid.multipliers
    }
}
