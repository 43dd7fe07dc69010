use crate::analytics::screening::{analyze_answers, ScreeningRecord, SectionBreakdown};
use crate::domain::questionnaire::{QuestionnaireAnswers, QuestionnaireSection, QUESTIONNAIRE_SECTIONS};
use crate::domain::tips;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    #[serde(flatten)]
    pub record: ScreeningRecord,
    pub sections: Vec<SectionBreakdown>,
    pub explanation: &'static str,
    pub share_message: String,
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: &'static str,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/users/:user_id/screenings",
            get(list_screenings).post(submit_screening),
        )
        .route("/users/:user_id/screenings/latest", get(latest_screening))
        .route("/questionnaire", get(questionnaire))
        .route("/tips/random", get(random_tip))
        .with_state(state)
}

async fn submit_screening(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
    Json(answers): Json<QuestionnaireAnswers>,
) -> Result<Json<ScreeningResponse>, StatusCode> {
    let result = analyze_answers(&answers);
    let explanation = result.explanation();
    let sections = result.sections.clone();
    let record = ScreeningRecord::new(result, answers, Utc::now());

    state
        .screenings
        .insert(user_id, &record)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save screening for {}: {}", user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    tracing::info!(
        %user_id,
        condition = record.condition.label(),
        risk = record.risk.as_str(),
        "screening recorded"
    );

    Ok(Json(ScreeningResponse {
        share_message: record.share_message(),
        record,
        sections,
        explanation,
    }))
}

async fn list_screenings(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ScreeningRecord>>, StatusCode> {
    let records = state.screenings.list(user_id).await.map_err(|e| {
        tracing::error!("Failed to list screenings for {}: {}", user_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(records))
}

async fn latest_screening(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Option<ScreeningRecord>>, StatusCode> {
    let record = state.screenings.latest(user_id).await.map_err(|e| {
        tracing::error!("Failed to load latest screening for {}: {}", user_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(record))
}

async fn questionnaire() -> Json<&'static [QuestionnaireSection]> {
    Json(QUESTIONNAIRE_SECTIONS)
}

async fn random_tip() -> Json<TipResponse> {
    Json(TipResponse {
        tip: tips::random_tip(),
    })
}
