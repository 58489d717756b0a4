//! gymdesk-api
//!
//! HTTP surface of the assessment workflow. Runs under the Lambda runtime or,
//! for local work, on a plain TCP listener.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod audit;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/assessments/estimate", post(routes::estimate::estimate))
        // Assessments are immutable once written: no PUT/PATCH routes.
        .route(
            "/clients/{national_id}/assessments",
            get(routes::assessments::list_assessments).post(routes::assessments::create_assessment),
        )
        .route(
            "/clients/{national_id}/assessments/trend",
            get(routes::assessments::assessment_trend),
        )
        .route(
            "/clients/{national_id}/assessments/{id}",
            get(routes::assessments::get_assessment).delete(routes::assessments::delete_assessment),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
