//! Identifiers for goods, nutrients and demographic categories
//!
//! Each kind of label gets its own type so a nutrient can never be used to
//! look up a price, and missing lookups report which kind of label failed.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Common bound for the row/column labels of quantities and tables
pub trait Label: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// The lookup error reported when this label is absent
    fn not_found(&self) -> LookupError;
}

macro_rules! label_type {
    ($(#[$meta:meta])* $name:ident, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Label for $name {
            fn not_found(&self) -> LookupError {
                LookupError::$variant(self.0.clone())
            }
        }
    };
}

label_type!(
    /// A consumable good (e.g. "rice"), quantified in kilograms
    GoodId,
    GoodNotFound
);

label_type!(
    /// A nutrient (e.g. "energy", "protein")
    NutrientId,
    NutrientNotFound
);

label_type!(
    /// A demographic category of household members (e.g. "women 19-30")
    CategoryId,
    CategoryNotFound
);
