use crate::analytics::week_chart::{self, DayScore};
use crate::analytics::{trend_display, InsightSummary, Tracker};
use crate::db::{self, StoreError};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

/// Insight result plus the colors and icon a client needs to render it.
#[derive(Debug, Serialize)]
pub struct InsightsResponse<I> {
    #[serde(flatten)]
    pub insights: I,
    pub score_color: &'static str,
    pub trend_icon: &'static str,
    pub trend_color: &'static str,
}

pub fn router<T: Tracker>(state: SharedState) -> Router {
    let base = format!("/users/:user_id/{}", T::DOMAIN.as_str());
    Router::new()
        .route(
            &format!("{base}/logs"),
            get(list_logs::<T>).put(save_log::<T>),
        )
        .route(&format!("{base}/logs/today"), get(today_log::<T>))
        .route(&format!("{base}/insights"), get(insights::<T>))
        .route(&format!("{base}/week"), get(week::<T>))
        .with_state(state)
}

fn internal_error(err: StoreError) -> StatusCode {
    tracing::error!("store error: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn save_log<T: Tracker>(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
    Json(entry): Json<T>,
) -> Result<Json<T>, StatusCode> {
    db::save_entry(state.logs.as_ref(), user_id, entry.clone())
        .await
        .map_err(internal_error)?;
    tracing::info!(%user_id, domain = T::DOMAIN.as_str(), date = %entry.date(), "log saved");
    Ok(Json(entry))
}

async fn list_logs<T: Tracker>(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<T>>, StatusCode> {
    let entries = db::load_entries::<T>(state.logs.as_ref(), user_id)
        .await
        .map_err(internal_error)?;
    Ok(Json(entries))
}

async fn today_log<T: Tracker>(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Option<T>>, StatusCode> {
    let entry = db::load_entry::<T>(state.logs.as_ref(), user_id, state.today())
        .await
        .map_err(internal_error)?;
    Ok(Json(entry))
}

async fn insights<T: Tracker>(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<InsightsResponse<T::Insights>>, StatusCode> {
    let entries = db::load_entries::<T>(state.logs.as_ref(), user_id)
        .await
        .map_err(internal_error)?;
    let insights = T::generate_insights(&entries, state.today());
    tracing::debug!(
        %user_id,
        domain = T::DOMAIN.as_str(),
        days = entries.len(),
        trend = insights.trend().as_str(),
        "insights generated"
    );
    let display = trend_display(insights.trend(), T::POLARITY);
    Ok(Json(InsightsResponse {
        score_color: T::score_color(insights.score()),
        trend_icon: display.icon,
        trend_color: display.color,
        insights,
    }))
}

async fn week<T: Tracker>(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<DayScore>>, StatusCode> {
    let entries = db::load_entries::<T>(state.logs.as_ref(), user_id)
        .await
        .map_err(internal_error)?;
    Ok(Json(week_chart::week_scores(&entries, state.today())))
}

#[cfg(test)]
mod tests {
    use crate::web::test_support::{app, send};
    use axum::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;

    fn general_log(date: &str, mood: &str) -> serde_json::Value {
        json!({
            "date": date,
            "sleep_hours": 8.0,
            "sleep_quality": "great",
            "mood": mood,
            "energy": "high",
            "water_glasses": 8,
            "exercise_minutes": 40,
            "screen_time_hours": 2.0
        })
    }

    #[tokio::test]
    async fn test_put_then_list_replaces_same_date() {
        let (app, _) = app();
        let user = Uuid::new_v4();
        let uri = format!("/users/{user}/general/logs");

        let (status, _) = send(&app, "PUT", &uri, Some(general_log("2024-06-18", "happy"))).await;
        assert_eq!(status, StatusCode::OK);
        send(&app, "PUT", &uri, Some(general_log("2024-06-17", "happy"))).await;
        send(&app, "PUT", &uri, Some(general_log("2024-06-18", "sad"))).await;

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let logs = body.as_array().unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0]["date"], "2024-06-17");
        assert_eq!(logs[1]["mood"], "sad");
    }

    #[tokio::test]
    async fn test_insights_for_todays_stressful_week() {
        let (app, state) = app();
        let user = Uuid::new_v4();
        let uri = format!("/users/{user}/general/logs");
        for offset in 0..4 {
            let date = state.today() - chrono::Duration::days(offset);
            send(&app, "PUT", &uri, Some(general_log(&date.to_string(), "stressed"))).await;
        }

        let (status, body) =
            send(&app, "GET", &format!("/users/{user}/general/insights"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["burnout_risk"], true);
        assert_eq!(body["trend"], "Stable");
        assert_eq!(body["trend_icon"], "trending-flat");
        assert!(body["score_color"].is_string());
        assert!(body["alerts"][0]
            .as_str()
            .unwrap()
            .contains("Burnout risk detected"));
    }

    #[tokio::test]
    async fn test_today_and_week_endpoints() {
        let (app, state) = app();
        let user = Uuid::new_v4();
        let today = state.today().to_string();

        let (status, body) =
            send(&app, "GET", &format!("/users/{user}/anemia/logs/today"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());

        let entry = json!({
            "date": today,
            "symptoms": { "fatigue": "severe", "dizziness": "mild" },
            "iron_food_frequency": "rarely",
            "supplement_usage": "no",
            "hemoglobin": 9.5
        });
        send(&app, "PUT", &format!("/users/{user}/anemia/logs"), Some(entry)).await;

        let (_, body) = send(&app, "GET", &format!("/users/{user}/anemia/logs/today"), None).await;
        assert_eq!(body["symptoms"]["fatigue"], "severe");

        let (status, body) = send(&app, "GET", &format!("/users/{user}/anemia/week"), None).await;
        assert_eq!(status, StatusCode::OK);
        let days = body.as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[6]["date"], today);
        assert!(days[6]["score"].as_u64().unwrap() > 0);
        assert_eq!(days[0]["score"], 0);
    }

    #[tokio::test]
    async fn test_empty_pcos_insights() {
        let (app, _) = app();
        let user = Uuid::new_v4();
        let (status, body) =
            send(&app, "GET", &format!("/users/{user}/pcos/insights"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_score"], 0);
        assert_eq!(body["risk_level"], "Low");
        assert_eq!(body["trend"], "Not enough data");
        assert_eq!(body["trend_icon"], "remove");
        assert_eq!(body["score_color"], "#10b981");
    }

    #[tokio::test]
    async fn test_rejects_bad_input() {
        let (app, _) = app();
        let (status, _) = send(&app, "GET", "/users/not-a-uuid/anemia/logs", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let user = Uuid::new_v4();
        let bad = json!({ "date": "2024-06-18", "mood": "ecstatic" });
        let (status, _) = send(&app, "PUT", &format!("/users/{user}/general/logs"), Some(bad)).await;
        assert!(status.is_client_error());
    }
}
