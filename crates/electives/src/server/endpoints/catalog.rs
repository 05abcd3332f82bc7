use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::grid::{Weekday, TIME_SLOTS};
use crate::server::types::ApiErrorType;
use crate::types::WrapperState;

/// GET /grid
/// Returns the weekdays and time slots a front end offers for selection
pub async fn get_grid() -> Response {
    info!("GET /grid");

    let days: Vec<_> = Weekday::ALL
        .iter()
        .map(|d| json!({ "value": d.index(), "label": d.label() }))
        .collect();

    let slots: Vec<_> = TIME_SLOTS
        .iter()
        .map(|s| {
            json!({
                "index": s.index,
                "label": s.label(),
                "start_minutes": s.start,
                "end_minutes": s.end,
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "days": days, "time_slots": slots }))).into_response()
}

/// GET /courses
/// Returns the whole catalog snapshot
pub async fn get_courses(State(s): State<Arc<WrapperState>>) -> Response {
    info!("GET /courses ({} courses)", s.catalog.len());

    (StatusCode::OK, Json(&s.catalog.courses)).into_response()
}

/// GET /courses/:departmental/:numeric
/// Returns a single course
pub async fn get_course(
    Path((departmental, numeric)): Path<(String, String)>,
    State(s): State<Arc<WrapperState>>,
) -> Response {
    info!("GET /courses/{}/{}", departmental, numeric);

    match s.catalog.find(&departmental, &numeric) {
        Some(course) => (StatusCode::OK, Json(course)).into_response(),
        None => ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Course not found",
            Some(format!("{} {}", departmental, numeric)),
        ))
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::config::ServerConfig;
    use crate::server::endpoints::status::get_health;
    use axum::body::to_bytes;
    use serde_json::Value;

    const SAMPLE: &str = r#"[
        {
            "code": {"departmental": "PHIL 101", "numeric": "2400101"},
            "name": "Introduction to Philosophy",
            "credits": 3,
            "sections": [{"section_id": 1, "times": [{"day": 0, "start": "08:40", "end": "09:30"}]}]
        },
        {
            "code": {"departmental": "EMPTY", "numeric": "0"},
            "name": "No sections",
            "credits": 3,
            "sections": []
        }
    ]"#;

    fn state() -> Arc<WrapperState> {
        Arc::new(WrapperState::new(
            parse_catalog(SAMPLE).unwrap(),
            ServerConfig::default(),
        ))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_grid() {
        let response = get_grid().await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["days"].as_array().unwrap().len(), 5);
        assert_eq!(body["time_slots"][0]["label"], "08:40-09:30");
    }

    #[tokio::test]
    async fn test_get_courses() {
        let response = get_courses(State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let courses = body.as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["code"]["departmental"], "PHIL 101");
        assert_eq!(courses[0]["sections"][0]["times"][0]["day"], 0);
    }

    #[tokio::test]
    async fn test_get_course() {
        let response = get_course(
            Path(("phil 101".to_string(), "2400101".to_string())),
            State(state()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_course(
            Path(("EMPTY".to_string(), "0".to_string())),
            State(state()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Course not found");
    }

    #[tokio::test]
    async fn test_get_health() {
        let response = get_health(State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["courses"], 1);
        assert_eq!(body["skipped"], 1);
    }
}
