//! HTTP request handlers for the Shift Assignment Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::scheduling::generate_schedule;

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a schedule request and returns the generated schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // body_text carries serde's message, including the field path
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let mut policy = *config.policy();
    if let Some(mode) = request.filter_mode {
        policy.filter_mode = mode;
    }
    let workers = request.workers.len();

    let outcome = request
        .into_input(*config.default_week())
        .and_then(|input| generate_schedule(&input, &policy));

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                schedule_id = %result.schedule_id,
                workers,
                assigned = result.stats.total_assigned,
                shortfalls = result.shortfalls.len(),
                duration_us = result.audit_trace.duration_us,
                "Schedule generated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Scheduling failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{HeadcountRequest, PreferenceRequest};
    use crate::config::ConfigLoader;
    use crate::models::{Day, ScheduleResult, ShiftType, WeekLayout};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
        AppState::new(config)
    }

    fn one_shift_week() -> WeekLayout {
        WeekLayout {
            weekday_shifts: 1,
            friday_shifts: None,
            saturday_shifts: None,
        }
    }

    /// Two workers, every score 2 except the given Sunday morning scores.
    fn create_valid_request(first: i8, second: i8) -> ScheduleRequest {
        let week = one_shift_week();
        let workers = vec!["Noa".to_string(), "Eli".to_string()];
        let mut preferences = Vec::new();
        for (worker, sunday) in workers.iter().zip([first, second]) {
            for slot in week.active_slots() {
                let score = if slot.day == Day::Sunday { sunday } else { 2 };
                preferences.push(PreferenceRequest {
                    worker: worker.clone(),
                    day: slot.day,
                    shift: slot.shift,
                    score,
                });
            }
        }
        ScheduleRequest {
            workers,
            week: Some(week),
            headcounts: vec![HeadcountRequest {
                day: Day::Sunday,
                shift: ShiftType::Morning,
                required: 1,
            }],
            preferences,
            filter_mode: None,
        }
    }

    async fn post_schedule(router: Router, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/schedule")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request(1, 3)).unwrap();

        let response = post_schedule(router, body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.assignments.len(), 1);
        assert_eq!(result.assignments[0].worker.name(), "Eli");
        assert_eq!(result.stats.top_preference_percentage.to_string(), "100.0");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = post_schedule(router, "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_workers_returns_validation_error() {
        let router = create_router(create_test_state());
        let response = post_schedule(router, r#"{"preferences": []}"#.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("workers"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request(3, 3)).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/schedule")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_missing_preference_returns_configuration_incomplete() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request(3, 3);
        request.preferences.pop();
        let body = serde_json::to_string(&request).unwrap();

        let response = post_schedule(router, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "CONFIGURATION_INCOMPLETE");
    }
}
