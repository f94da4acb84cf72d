//! Integration tests for the sweep engine
//!
//! Tests are organized by topic:
//! - `sweep` - Grid order, evaluation points, baseline immutability, errors
//! - `transform` - Log transform and non-finite handling
//! - `demand` - Demand curves from the Cobb-Douglas oracle
//! - `adequacy` - Nutrient adequacy sweeps over price and budget
//! - `properties` - Randomized grid properties

mod demand;
mod sweep;

use std::cell::RefCell;
use std::fmt;

use crate::model::{Baseline, GoodId, PriceVector, Quantities};

/// Baseline used across tests: rice at 10, beans at 4, budget 100
pub(crate) fn rice_and_beans() -> Baseline {
    let prices = PriceVector::from_iter([("rice", 10.0), ("beans", 4.0)]);
    Baseline::new(prices, 100.0).unwrap()
}

/// Failure raised by test evaluators
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Refused(pub f64);

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refused to evaluate at {}", self.0)
    }
}

impl std::error::Error for Refused {}

/// Evaluator that returns fixed quantities and records every baseline it sees
pub(crate) struct Recorder {
    pub output: Quantities<GoodId>,
    pub seen: RefCell<Vec<Baseline>>,
}

impl Recorder {
    pub fn new(output: Quantities<GoodId>) -> Self {
        Self {
            output,
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn evaluate(&self, baseline: &Baseline) -> Result<Quantities<GoodId>, Refused> {
        self.seen.borrow_mut().push(baseline.clone());
        Ok(self.output.clone())
    }
}
