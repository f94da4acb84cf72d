use std::fmt;

/// Errors related to identifier lookups
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    GoodNotFound(String),
    NutrientNotFound(String),
    CategoryNotFound(String),
    /// A category of the intake table has no entry for the nutrient
    IntakeNotFound {
        category: String,
        nutrient: String,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::GoodNotFound(good) => write!(f, "good {good:?} not found"),
            LookupError::NutrientNotFound(nutrient) => {
                write!(f, "nutrient {nutrient:?} not found")
            }
            LookupError::CategoryNotFound(category) => {
                write!(f, "demographic category {category:?} not found")
            }
            LookupError::IntakeNotFound { category, nutrient } => {
                write!(
                    f,
                    "no recommended intake of {nutrient:?} for category {category:?}"
                )
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors raised while validating a multiplier grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    Empty,
    NonPositive { index: usize, value: f64 },
    NonFinite { index: usize, value: f64 },
    InvalidRange { start: f64, stop: f64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no multipliers"),
            GridError::NonPositive { index, value } => {
                write!(f, "grid multiplier {value} at index {index} is not positive")
            }
            GridError::NonFinite { index, value } => {
                write!(f, "grid multiplier {value} at index {index} is not finite")
            }
            GridError::InvalidRange { start, stop } => {
                write!(
                    f,
                    "geometric grid endpoints must be positive and finite (start={start}, stop={stop})"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors raised while building a baseline
#[derive(Debug, Clone, PartialEq)]
pub enum BaselineError {
    NoGoods,
    InvalidPrice { good: String, price: f64 },
    InvalidBudget(f64),
}

impl fmt::Display for BaselineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaselineError::NoGoods => write!(f, "baseline price vector is empty"),
            BaselineError::InvalidPrice { good, price } => {
                write!(f, "price of {good:?} must be positive and finite, got {price}")
            }
            BaselineError::InvalidBudget(budget) => {
                write!(f, "budget must be positive and finite, got {budget}")
            }
        }
    }
}

impl std::error::Error for BaselineError {}

/// Errors raised by the reference demand oracle
#[derive(Debug, Clone, PartialEq)]
pub enum OracleError {
    NoGoods,
    InvalidShare { good: String, share: f64 },
    NonPositivePrice { good: String, price: f64 },
    NonPositiveBudget(f64),
    NonPositiveUtility(f64),
    Lookup(LookupError),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::NoGoods => write!(f, "demand system has no goods"),
            OracleError::InvalidShare { good, share } => {
                write!(f, "budget share of {good:?} must be positive, got {share}")
            }
            OracleError::NonPositivePrice { good, price } => {
                write!(f, "price of {good:?} must be positive, got {price}")
            }
            OracleError::NonPositiveBudget(budget) => {
                write!(f, "budget must be positive, got {budget}")
            }
            OracleError::NonPositiveUtility(utility) => {
                write!(f, "utility level must be positive, got {utility}")
            }
            OracleError::Lookup(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OracleError::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for OracleError {
    fn from(e: LookupError) -> Self {
        OracleError::Lookup(e)
    }
}

/// Errors related to household nutrition arithmetic
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionError {
    Lookup(LookupError),
    InvalidHorizon(f64),
    NonPositiveRequirement { nutrient: String, value: f64 },
}

impl fmt::Display for NutritionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutritionError::Lookup(e) => write!(f, "{e}"),
            NutritionError::InvalidHorizon(days) => {
                write!(f, "requirement horizon must be a positive number of days, got {days}")
            }
            NutritionError::NonPositiveRequirement { nutrient, value } => {
                write!(f, "requirement for {nutrient:?} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for NutritionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NutritionError::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for NutritionError {
    fn from(e: LookupError) -> Self {
        NutritionError::Lookup(e)
    }
}

/// Errors raised when validating a finished table
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    NonFinite {
        point: f64,
        column: String,
        value: f64,
    },
    /// Number of evaluation points differs from the number of rows
    PointCount { points: usize, rows: usize },
    /// A row has a different width than the column list
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::NonFinite {
                point,
                column,
                value,
            } => write!(f, "cell ({point}, {column:?}) is not finite: {value}"),
            TableError::PointCount { points, rows } => {
                write!(f, "table has {points} points but {rows} rows")
            }
            TableError::RowWidth {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} values, expected {expected}"),
        }
    }
}

impl std::error::Error for TableError {}

/// Errors raised by a sweep.
///
/// `E` is the evaluator's own error type; evaluator failures are carried
/// through untouched in `Evaluator`.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError<E> {
    Lookup(LookupError),
    Evaluator(E),
    /// Log transform requested for a value that has no real logarithm
    NonPositiveLog {
        point: f64,
        label: String,
        value: f64,
    },
    /// Evaluator produced NaN or an infinity for a retained label
    NonFinite {
        point: f64,
        label: String,
        value: f64,
    },
}

impl<E> SweepError<E> {
    /// The evaluator's error, if that is what failed
    pub fn evaluator(&self) -> Option<&E> {
        match self {
            SweepError::Evaluator(e) => Some(e),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for SweepError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Lookup(e) => write!(f, "{e}"),
            SweepError::Evaluator(e) => write!(f, "evaluation failed: {e}"),
            SweepError::NonPositiveLog { point, label, value } => {
                write!(
                    f,
                    "cannot take log of {label:?} = {value} at evaluation point {point}"
                )
            }
            SweepError::NonFinite { point, label, value } => {
                write!(
                    f,
                    "evaluator returned non-finite {label:?} = {value} at evaluation point {point}"
                )
            }
        }
    }
}

impl<E> std::error::Error for SweepError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Lookup(e) => Some(e),
            SweepError::Evaluator(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<LookupError> for SweepError<E> {
    fn from(e: LookupError) -> Self {
        SweepError::Lookup(e)
    }
}

/// Errors from the demand → nutrients → adequacy evaluator
#[derive(Debug, Clone, PartialEq)]
pub enum AdequacyError<E> {
    Oracle(E),
    Nutrition(NutritionError),
}

impl<E: fmt::Display> fmt::Display for AdequacyError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdequacyError::Oracle(e) => write!(f, "{e}"),
            AdequacyError::Nutrition(e) => write!(f, "{e}"),
        }
    }
}

impl<E> std::error::Error for AdequacyError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdequacyError::Oracle(e) => Some(e),
            AdequacyError::Nutrition(e) => Some(e),
        }
    }
}

impl<E> From<NutritionError> for AdequacyError<E> {
    fn from(e: NutritionError) -> Self {
        AdequacyError::Nutrition(e)
    }
}

impl<E> From<LookupError> for AdequacyError<E> {
    fn from(e: LookupError) -> Self {
        AdequacyError::Nutrition(NutritionError::Lookup(e))
    }
}
