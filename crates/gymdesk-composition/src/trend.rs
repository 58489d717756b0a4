use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use gymdesk_core::models::assessment::Assessment;

use crate::rounding::round1;

/// One assessment plotted on a client's progress chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrendPoint {
    pub assessment_id: Uuid,
    pub assessed_on: jiff::civil::Date,
    pub body_mass_kg: f64,
    pub fat_percent: f64,
    pub fat_mass: f64,
    pub lean_mass: f64,
    pub bmi: f64,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub abdomen: Option<f64>,
}

impl From<&Assessment> for TrendPoint {
    fn from(a: &Assessment) -> Self {
        Self {
            assessment_id: a.id,
            assessed_on: a.assessed_on,
            body_mass_kg: a.body_mass_kg,
            fat_percent: a.composition.fat_percent,
            fat_mass: a.composition.fat_mass,
            lean_mass: a.composition.lean_mass,
            bmi: a.composition.bmi,
            waist: a.circumferences.waist,
            hip: a.circumferences.hip,
            abdomen: a.circumferences.abdomen,
        }
    }
}

/// Change from the first to the latest assessment. Girths are only compared
/// when both ends recorded them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrendChange {
    pub days: i32,
    pub body_mass_kg: f64,
    pub fat_percent: f64,
    pub fat_mass: f64,
    pub lean_mass: f64,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub abdomen: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentTrend {
    /// Oldest first.
    pub points: Vec<TrendPoint>,
    /// `None` until there are at least two assessments.
    pub change: Option<TrendChange>,
}

/// Build a progress series from a client's stored assessments.
pub fn build_trend(assessments: &[Assessment]) -> AssessmentTrend {
    let mut ordered: Vec<&Assessment> = assessments.iter().collect();
    ordered.sort_by(|a, b| {
        a.assessed_on
            .cmp(&b.assessed_on)
            .then(a.created_at.cmp(&b.created_at))
    });

    let points: Vec<TrendPoint> = ordered.into_iter().map(TrendPoint::from).collect();

    let change = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => Some(TrendChange {
            days: first
                .assessed_on
                .until(last.assessed_on)
                .map(|span| span.get_days())
                .unwrap_or_default(),
            body_mass_kg: round1(last.body_mass_kg - first.body_mass_kg),
            fat_percent: round1(last.fat_percent - first.fat_percent),
            fat_mass: round1(last.fat_mass - first.fat_mass),
            lean_mass: round1(last.lean_mass - first.lean_mass),
            waist: delta(first.waist, last.waist),
            hip: delta(first.hip, last.hip),
            abdomen: delta(first.abdomen, last.abdomen),
        }),
        _ => None,
    };

    AssessmentTrend { points, change }
}

fn delta(first: Option<f64>, last: Option<f64>) -> Option<f64> {
    Some(round1(last? - first?))
}
