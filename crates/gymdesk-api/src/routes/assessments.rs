use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use jiff::Timestamp;
use uuid::Uuid;

use gymdesk_composition::age::{assessment_date, completed_years};
use gymdesk_composition::estimate;
use gymdesk_composition::input::Measurements;
use gymdesk_composition::trend::{build_trend, AssessmentTrend};
use gymdesk_core::models::assessment::Assessment;
use gymdesk_core::models::client::ClientProfile;
use gymdesk_core::national_id::NationalId;
use gymdesk_core::s3_keys;
use gymdesk_storage::documents;
use gymdesk_storage::error::StorageError;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_assessments(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    let Path(national_id) = path?;
    let national_id = NationalId::parse(&national_id)?;
    let mut assessments = load_client_assessments(&state, &national_id).await?;
    assessments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(assessments))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    path: Result<Path<(String, Uuid)>, PathRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Path((national_id, id)) = path?;
    let national_id = NationalId::parse(&national_id)?;
    let key = s3_keys::assessment(&national_id, id);
    let assessment: Assessment = documents::load_json(state.store.as_ref(), &key).await?;
    Ok(Json(assessment))
}

/// Record a new assessment.
///
/// The client's age is taken on the day the request arrives, in the studio's
/// time zone. The computed composition is stored alongside the raw inputs and
/// never recomputed.
pub async fn create_assessment(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Measurements>, JsonRejection>,
) -> Result<(StatusCode, Json<Assessment>), ApiError> {
    let Path(national_id) = path?;
    let national_id = NationalId::parse(&national_id)?;
    let Json(measurements) = payload?;

    let client: ClientProfile =
        match documents::load_json(state.store.as_ref(), &s3_keys::client(&national_id)).await {
            Ok(client) => client,
            Err(StorageError::NotFound { .. }) => {
                return Err(ApiError::NotFound(format!("client not found: {national_id}")));
            }
            Err(e) => return Err(e.into()),
        };

    let now = Timestamp::now();
    let assessed_on = assessment_date(now, &state.timezone);
    let age_years = completed_years(client.birth_date, assessed_on)?;

    let input = measurements.with_age(age_years)?;
    let composition = estimate(&input)?;

    let id = Uuid::new_v4();
    let key = s3_keys::assessment(&national_id, id);
    let assessment = Assessment {
        id,
        client_national_id: national_id.clone(),
        assessed_on,
        age_years,
        sex: input.sex,
        body_mass_kg: input.body_mass_kg,
        height_cm: input.height_cm,
        skinfolds: input.skinfolds,
        circumferences: measurements.circumferences,
        composition,
        notes: measurements.notes.filter(|n| !n.trim().is_empty()),
        s3_key: key.clone(),
        created_at: now,
        updated_at: now,
    };

    documents::save_json(state.store.as_ref(), &key, &assessment).await?;

    AuditEvent::new("create", "assessment", id.to_string(), national_id.as_str())
        .with_details(serde_json::json!({
            "fatPercent": composition.fat_percent,
            "ageYears": age_years,
        }))
        .emit();

    Ok((StatusCode::CREATED, Json(assessment)))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    path: Result<Path<(String, Uuid)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((national_id, id)) = path?;
    let national_id = NationalId::parse(&national_id)?;
    let key = s3_keys::assessment(&national_id, id);

    // S3 deletes are silent for missing keys; look first so callers get a 404.
    state.store.get(&key).await?;
    state.store.delete(&key).await?;

    AuditEvent::new("delete", "assessment", id.to_string(), national_id.as_str()).emit();

    Ok(StatusCode::NO_CONTENT)
}

pub async fn assessment_trend(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<AssessmentTrend>, ApiError> {
    let Path(national_id) = path?;
    let national_id = NationalId::parse(&national_id)?;
    let assessments = load_client_assessments(&state, &national_id).await?;
    Ok(Json(build_trend(&assessments)))
}

async fn load_client_assessments(
    state: &AppState,
    national_id: &NationalId,
) -> Result<Vec<Assessment>, ApiError> {
    let prefix = s3_keys::client_assessments_prefix(national_id);
    Ok(documents::load_all_json(state.store.as_ref(), &prefix).await?)
}
