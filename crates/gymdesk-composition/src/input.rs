use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gymdesk_core::models::measurements::{Circumferences, Sex, Skinfolds};

use crate::error::CompositionError;

/// What staff type into the assessment form.
///
/// `sex` is optional here because the form may be submitted without a
/// selection; [`Measurements::with_age`] turns that into an error rather
/// than guessing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Measurements {
    pub body_mass_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub sex: Option<Sex>,
    pub skinfolds: Skinfolds,
    #[serde(default)]
    pub circumferences: Circumferences,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Measurements {
    /// Pair the form with the client's age and check every field.
    pub fn with_age(&self, age_years: u32) -> Result<CompositionInput, CompositionError> {
        let sex = self.sex.ok_or(CompositionError::MissingSex)?;
        let input = CompositionInput {
            body_mass_kg: self.body_mass_kg,
            height_cm: self.height_cm,
            sex,
            age_years,
            skinfolds: self.skinfolds,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Everything the estimator consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionInput {
    pub body_mass_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub age_years: u32,
    pub skinfolds: Skinfolds,
}

impl CompositionInput {
    pub fn validate(&self) -> Result<(), CompositionError> {
        if !(self.body_mass_kg.is_finite() && self.body_mass_kg > 0.0) {
            return Err(CompositionError::InvalidBodyMass(self.body_mass_kg));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(CompositionError::InvalidHeight(self.height_cm));
        }
        for (site, value) in self.skinfolds.sites() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CompositionError::InvalidSkinfold { site, value });
            }
        }
        Ok(())
    }
}
