//! Unit-of-measure convention for demand quantities
//!
//! Nutrient conversion tables give content per kilogram, so every good whose
//! demand is converted must be quantified in kilograms.

use std::fmt;

use super::GoodId;

/// Unit every converted good must be measured in
pub const CANONICAL_UNIT: &str = "kg";

/// Goods whose declared unit differs from the expected one
#[derive(Debug, Clone, PartialEq)]
pub struct UnitMismatch {
    pub expected: String,
    pub mismatches: Vec<(GoodId, String)>,
}

impl fmt::Display for UnitMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected every good in {:?}, found", self.expected)?;
        for (i, (good, unit)) in self.mismatches.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{good} in {unit:?}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnitMismatch {}

/// Check that every good is declared in `expected` units.
///
/// All offending goods are reported together.
pub fn check_units<'a, I>(units: I, expected: &str) -> Result<(), UnitMismatch>
where
    I: IntoIterator<Item = (&'a GoodId, &'a str)>,
{
    let mismatches: Vec<(GoodId, String)> = units
        .into_iter()
        .filter(|(_, unit)| *unit != expected)
        .map(|(good, unit)| (good.clone(), unit.to_string()))
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(UnitMismatch {
            expected: expected.to_string(),
            mismatches,
        })
    }
}
