//! Household demand and nutrient-adequacy sweep library
//!
//! This crate varies one input of a household demand problem (the price of a
//! single good, or the total budget) over a multiplicative grid, evaluates a
//! demand oracle at every grid point and tabulates the results in grid order.
//! It supports:
//! - A `DemandOracle` trait with uncompensated (Marshallian) and compensated
//!   (Hicksian) evaluation modes
//! - A closed-form Cobb-Douglas reference oracle
//! - Conversion of demand bundles to nutrients and household adequacy ratios
//! - Identity or natural-log transforms of the tabulated values
//! - Optional parallel evaluation of grid points (`parallel` feature)
//!
//! # Example
//!
//! ```ignore
//! use nutrisweep_core::analysis::{SweepDimension, SweepSpec, Transform, demand_curves};
//! use nutrisweep_core::grid::Grid;
//! use nutrisweep_core::model::{Baseline, DemandMode, GoodId, PriceVector};
//! use nutrisweep_core::oracle::CobbDouglas;
//!
//! let prices = PriceVector::from_iter([("rice", 10.0), ("beans", 4.0)]);
//! let baseline = Baseline::new(prices, 100.0)?;
//! let oracle = CobbDouglas::new([("rice", 0.6), ("beans", 0.4)])?;
//!
//! let spec = SweepSpec {
//!     dimension: SweepDimension::Price(GoodId::from("rice")),
//!     grid: Grid::geometric(0.25, 4.0, 25)?,
//!     retain: vec![GoodId::from("rice"), GoodId::from("beans")],
//!     transform: Transform::Identity,
//! };
//!
//! let table = demand_curves(&oracle, &baseline, &spec, &DemandMode::Uncompensated)?;
//! for series in table.transpose() {
//!     println!("{}: {:?}", series.label, series.values);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod grid;
pub mod nutrition;
pub mod oracle;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SweepDimension, SweepSpec, SweepTable, Transform, sweep};
pub use grid::Grid;
pub use model::{Baseline, DemandMode, GoodId, NutrientId, PriceVector, Quantities};
pub use oracle::{CobbDouglas, DemandOracle};

// Insertion-ordered maps: table rows and columns follow first appearance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
