// aquaguard-core/src/domain/sample.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;

/// Canonical feature order. This is the column contract for batch files and
/// the exact order the classifier was trained on — never reorder.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "ph",
    "Hardness",
    "Solids",
    "Chloramines",
    "Sulfate",
    "Conductivity",
    "Organic_carbon",
    "Trihalomethanes",
    "Turbidity",
];

/// Instrument input bounds (min, max) in canonical feature order. These cap
/// what a reading can physically be, mirroring the `validator` ranges below.
pub const INPUT_BOUNDS: [(f64, f64); 9] = [
    (0.0, 14.0),    // ph
    (0.0, 500.0),   // Hardness
    (0.0, 50000.0), // Solids
    (0.0, 15.0),    // Chloramines
    (0.0, 500.0),   // Sulfate
    (0.0, 1000.0),  // Conductivity
    (0.0, 50.0),    // Organic_carbon
    (0.0, 150.0),   // Trihalomethanes
    (0.0, 10.0),    // Turbidity
];

/// One water-quality measurement record: nine required numeric readings.
///
/// Serde names match the canonical (case-sensitive) column names used by the
/// batch file contract. The `validator` ranges are the instrument input
/// bounds, NOT the ideal safe ranges — a sample outside its ideal range is a
/// normal `Not Safe` outcome, a sample outside these bounds is a read error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WaterSample {
    /// pH (unitless)
    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f64,

    /// Hardness (mg/L)
    #[serde(rename = "Hardness")]
    #[validate(range(min = 0.0, max = 500.0))]
    pub hardness: f64,

    /// Total dissolved solids (ppm)
    #[serde(rename = "Solids")]
    #[validate(range(min = 0.0, max = 50000.0))]
    pub solids: f64,

    /// Chloramines (ppm)
    #[serde(rename = "Chloramines")]
    #[validate(range(min = 0.0, max = 15.0))]
    pub chloramines: f64,

    /// Sulfate (mg/L)
    #[serde(rename = "Sulfate")]
    #[validate(range(min = 0.0, max = 500.0))]
    pub sulfate: f64,

    /// Conductivity (µS/cm)
    #[serde(rename = "Conductivity")]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub conductivity: f64,

    /// Organic carbon (mg/L)
    #[serde(rename = "Organic_carbon")]
    #[validate(range(min = 0.0, max = 50.0))]
    pub organic_carbon: f64,

    /// Trihalomethanes (µg/L)
    #[serde(rename = "Trihalomethanes")]
    #[validate(range(min = 0.0, max = 150.0))]
    pub trihalomethanes: f64,

    /// Turbidity (NTU)
    #[serde(rename = "Turbidity")]
    #[validate(range(min = 0.0, max = 10.0))]
    pub turbidity: f64,
}

impl WaterSample {
    /// Features in canonical order, ready for the classifier call.
    pub fn as_features(&self) -> [f64; 9] {
        [
            self.ph,
            self.hardness,
            self.solids,
            self.chloramines,
            self.sulfate,
            self.conductivity,
            self.organic_carbon,
            self.trihalomethanes,
            self.turbidity,
        ]
    }

    /// Checks the instrument input bounds and reports every offending field
    /// at once, rather than failing on the first one.
    pub fn check_domain(&self) -> Result<(), DomainError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let mut fields: Vec<String> =
                    errors.field_errors().keys().map(|k| k.to_string()).collect();
                fields.sort();
                Err(DomainError::OutOfDomain(fields))
            }
        }
    }
}

/// Test fixture: the interactive form's default readings, a fully in-range
/// sample. Shared by the rule, decision and scorer tests.
#[cfg(test)]
pub(crate) fn typical_sample() -> WaterSample {
    WaterSample {
        ph: 7.0,
        hardness: 180.0,
        solids: 15000.0,
        chloramines: 7.5,
        sulfate: 330.0,
        conductivity: 500.0,
        organic_carbon: 10.0,
        trihalomethanes: 70.0,
        turbidity: 3.0,
    }
}
