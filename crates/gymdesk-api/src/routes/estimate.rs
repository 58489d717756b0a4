use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use gymdesk_composition::age::{assessment_date, completed_years};
use gymdesk_composition::estimate as estimate_composition;
use gymdesk_composition::input::Measurements;
use gymdesk_core::models::measurements::BodyComposition;

use crate::error::ApiError;
use crate::state::AppState;

/// A live preview of the assessment form. Nothing is stored.
///
/// Age comes from `birthDate` when given (measured on `assessedOn`, default
/// today in the studio's zone); otherwise from `ageYears`. `assessedOn`
/// without `birthDate` is rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(flatten)]
    pub measurements: Measurements,
    pub age_years: Option<u32>,
    pub birth_date: Option<Date>,
    pub assessed_on: Option<Date>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub age_years: u32,
    #[serde(flatten)]
    pub composition: BodyComposition,
}

pub async fn estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let Json(req) = payload?;

    let age_years = match (req.birth_date, req.age_years) {
        (Some(birth_date), _) => {
            let on = req
                .assessed_on
                .unwrap_or_else(|| assessment_date(Timestamp::now(), &state.timezone));
            completed_years(birth_date, on)?
        }
        (None, Some(_)) if req.assessed_on.is_some() => {
            return Err(ApiError::BadRequest(
                "assessedOn applies only together with birthDate".to_string(),
            ));
        }
        (None, Some(age)) => age,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "either birthDate or ageYears is required".to_string(),
            ));
        }
    };

    let input = req.measurements.with_age(age_years)?;
    let composition = estimate_composition(&input)?;

    Ok(Json(EstimateResponse {
        age_years,
        composition,
    }))
}
