//! Sweep-and-tabulate analysis module.
//!
//! A sweep varies one dimension of a `Baseline` (the price of a single good,
//! or the budget) over a multiplier `Grid`, evaluates every grid point and
//! tabulates the requested labels into a `SweepTable`, one row per grid point
//! in grid order.
//!
//! # Demand Curves
//!
//! ```ignore
//! use nutrisweep_core::analysis::{SweepDimension, SweepSpec, Transform, demand_curves};
//!
//! let spec = SweepSpec {
//!     dimension: SweepDimension::Price(GoodId::from("rice")),
//!     grid: Grid::geometric(0.25, 4.0, 25)?,
//!     retain: vec![GoodId::from("rice"), GoodId::from("beans")],
//!     transform: Transform::Identity,
//! };
//! let table = demand_curves(&oracle, &baseline, &spec, &DemandMode::Uncompensated)?;
//! ```
//!
//! # Nutrient Adequacy
//!
//! ```ignore
//! let requirement = household_requirement(&intake, &household, 7.0)?;
//! let spec = SweepSpec {
//!     dimension: SweepDimension::Budget,
//!     grid: Grid::geometric(0.25, 4.0, 25)?,
//!     retain: vec![NutrientId::from("energy"), NutrientId::from("protein")],
//!     transform: Transform::Log,
//! };
//! let table = nutrient_adequacy_curves(&oracle, &baseline, &spec, &mode, &fct, &requirement)?;
//! ```
//!
//! # Custom Evaluators
//!
//! `sweep` accepts any closure mapping a modified baseline to `Quantities`.
//! With the `parallel` feature, `par_sweep` evaluates grid points on the rayon
//! thread pool and returns the same table.

mod config;
mod evaluator;
mod table;

pub use config::*;
pub use evaluator::*;
pub use table::*;
