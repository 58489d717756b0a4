use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::measurements::{BodyComposition, Circumferences, Sex, Skinfolds};
use crate::national_id::NationalId;

/// A body-composition assessment.
///
/// Immutable once written: `composition` is a snapshot taken at creation and
/// is never recomputed, even if the client's birth date is later corrected.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub client_national_id: NationalId,
    /// Calendar date of the assessment in the studio's time zone.
    pub assessed_on: jiff::civil::Date,
    /// Completed years on `assessed_on`.
    pub age_years: u32,
    pub sex: Sex,
    pub body_mass_kg: f64,
    pub height_cm: f64,
    pub skinfolds: Skinfolds,
    #[serde(default)]
    pub circumferences: Circumferences,
    pub composition: BodyComposition,
    pub notes: Option<String>,
    pub s3_key: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
