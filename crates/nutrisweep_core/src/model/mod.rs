//! Domain model types
//!
//! - `ids` - Typed labels for goods, nutrients and demographic categories
//! - `quantities` - Labelled quantity vectors (oracle and nutrient output)
//! - `prices` - Price vectors and the sweep baseline
//! - `mode` - Uncompensated / compensated demand selection
//! - `units` - Unit-of-measure convention for converted goods

mod ids;
mod mode;
mod prices;
mod quantities;
mod units;

pub use ids::{CategoryId, GoodId, Label, NutrientId};
pub use mode::DemandMode;
pub use prices::{Baseline, PriceVector};
pub use quantities::Quantities;
pub use units::{CANONICAL_UNIT, UnitMismatch, check_units};
