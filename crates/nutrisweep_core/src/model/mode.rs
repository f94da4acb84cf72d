use serde::{Deserialize, Serialize};

/// Which demand function the oracle evaluates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DemandMode {
    /// Marshallian demand: budget fixed, utility free to vary
    #[default]
    Uncompensated,
    /// Hicksian demand: utility held at `utility_level`, budget ignored
    Compensated { utility_level: f64 },
}

impl DemandMode {
    #[must_use]
    pub fn is_compensated(&self) -> bool {
        matches!(self, DemandMode::Compensated { .. })
    }

    /// Short name used in labels and logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DemandMode::Uncompensated => "Marshallian",
            DemandMode::Compensated { .. } => "Hicksian",
        }
    }
}
