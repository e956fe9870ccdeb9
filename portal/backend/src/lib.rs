//! Concession Portal API
//!
//! Axum front for the concession form sessions.

pub mod config;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use concession_forms::ConcessionUseCases;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub forms: Arc<dyn ConcessionUseCases>,
}

impl AppState {
    pub fn new(forms: Arc<dyn ConcessionUseCases>) -> Self {
        Self { forms }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))

        // Form schema
        .route("/api/form", get(form_schema))

        // Sessions
        .route("/api/sessions", post(open_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/fields", patch(change_field))
        .route("/api/sessions/:id/timeslots", post(open_timeslots))
        .route("/api/sessions/:id/submit", post(submit))

        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use concession_forms::infrastructure::{FixedClock, InMemoryConcessionStore, NoOpNotifier};
    use concession_forms::ConcessionService;
    use serde_json::{json, Value};

    const NOON: &str = "12.00 PM TO 1.00 PM";

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn server() -> (TestServer, Arc<InMemoryConcessionStore>) {
        let store = Arc::new(InMemoryConcessionStore::new());
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let service = ConcessionService::new(
            store.clone(),
            Arc::new(NoOpNotifier),
            Arc::new(FixedClock::new(today)),
        );
        let router = build_router(AppState::new(Arc::new(service)));
        (TestServer::new(router).unwrap(), store)
    }

    async fn open(server: &TestServer) -> String {
        let response = server.post("/api/sessions").await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"].as_str().unwrap().to_string()
    }

    async fn set(server: &TestServer, id: &str, field: &str, value: &str) -> Value {
        let response = server
            .patch(&format!("/api/sessions/{}/fields", id))
            .json(&json!({ "field": field, "value": value }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    async fn fill(server: &TestServer, id: &str) {
        let fields = [
            ("firstName", "Asha"),
            ("lastName", "Kulkarni"),
            ("address", "Andheri West"),
            ("sapId", "70012345678"),
            ("contact", "9876543210"),
            ("gender", "female"),
            ("dob", "2006-03-10"),
            ("course", "B TECH"),
            ("stream", "DATA SCIENCE"),
            ("year", "3"),
            ("classForPass", "second"),
            ("passPeriod", "monthly"),
            ("railwayType", "western"),
            ("station", "Borivali"),
            ("collectiondate", "2026-10-19"),
            ("timeslot", NOON),
        ];
        for (field, value) in fields {
            set(server, id, field, value).await;
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (server, _) = server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_form_schema() {
        let (server, _) = server();
        let schema: Value = server.get("/api/form").await.json();

        assert_eq!(schema["school"], "MPSTME");
        assert_eq!(schema["stationNote"], "Applicable only till Vile Parle Station");
        assert_eq!(schema["stream"].as_array().unwrap().len(), 12);
        assert_eq!(schema["timeslot"][0]["value"], "11.00 AM TO 12.00 PM");
        assert_eq!(schema["fields"].as_array().unwrap().len(), 18);
    }

    #[tokio::test]
    async fn test_open_session_defaults() {
        let (server, _) = server();
        let id = open(&server).await;

        let view: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
        assert_eq!(view["state"], "editing");
        assert_eq!(view["submission"]["school"], "MPSTME");
        assert_eq!(view["timeslotSelectable"], false);
        assert_eq!(view["timeslots"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let (server, _) = server();
        let response = server.get(&format!("/api/sessions/{}", uuid::Uuid::new_v4())).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "not_found");
    }

    #[tokio::test]
    async fn test_field_validation_messages() {
        let (server, _) = server();
        let id = open(&server).await;

        let view = set(&server, &id, "sapId", "7001234").await;
        assert_eq!(view["errors"]["sapId"], "SAP ID should be 11 digits");

        let view = set(&server, &id, "dob", "2006-03-10").await;
        assert_eq!(view["submission"]["age"], "20 years 7 months");
        assert_eq!(view["errors"]["dob"], "");

        let view = set(&server, &id, "collectiondate", "2026-10-18").await;
        assert_eq!(
            view["errors"]["collectiondate"],
            "Collection date cannot be on a Saturday or Sunday"
        );
        assert_eq!(view["timeslotSelectable"], false);
    }

    #[tokio::test]
    async fn test_bad_field_and_choice() {
        let (server, _) = server();
        let id = open(&server).await;
        let path = format!("/api/sessions/{}/fields", id);

        server
            .patch(&path)
            .json(&json!({ "field": "nickname", "value": "Ash" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .patch(&path)
            .json(&json!({ "field": "railwayType", "value": "metro" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .patch(&path)
            .json(&json!({ "field": "age", "value": "19 years 0 months" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .patch(&path)
            .json(&json!({ "field": "timeslot", "value": NOON }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_full_slot_is_disabled() {
        let (server, store) = server();
        store.set_count(monday(), NOON, 60);
        let id = open(&server).await;

        set(&server, &id, "collectiondate", "2026-10-19").await;
        let options: Value = server.post(&format!("/api/sessions/{}/timeslots", id)).await.json();
        let noon = options
            .as_array()
            .unwrap()
            .iter()
            .find(|o| o["value"] == NOON)
            .unwrap()
            .clone();
        assert_eq!(noon["disabled"], true);

        server
            .patch(&format!("/api/sessions/{}/fields", id))
            .json(&json!({ "field": "timeslot", "value": NOON }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_timeslots_need_collection_date() {
        let (server, _) = server();
        let id = open(&server).await;
        server
            .post(&format!("/api/sessions/{}/timeslots", id))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_incomplete_submit_is_rejected() {
        let (server, store) = server();
        let id = open(&server).await;
        set(&server, &id, "firstName", "Asha").await;

        let response = server.post(&format!("/api/sessions/{}/submit", id)).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
        assert!(message.starts_with("Please fill in all the fields"));
        assert!(store.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_submit_and_confirm() {
        let (server, store) = server();
        let id = open(&server).await;
        fill(&server, &id).await;

        let response = server.post(&format!("/api/sessions/{}/submit", id)).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["state"], "submitted");

        let stored = store.submissions();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].sapid, "70012345678");
        assert_eq!(stored[0].timeslot, NOON);

        let confirmation: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
        assert_eq!(confirmation["state"], "submitted");
        assert_eq!(confirmation["submission"]["firstName"], "Asha");

        server
            .patch(&format!("/api/sessions/{}/fields", id))
            .json(&json!({ "field": "station", "value": "Dadar" }))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_persistence_failure_returns_to_editing() {
        let (server, store) = server();
        let id = open(&server).await;
        fill(&server, &id).await;
        store.set_unavailable(true);

        server
            .post(&format!("/api/sessions/{}/submit", id))
            .await
            .assert_status(StatusCode::BAD_GATEWAY);

        let view: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
        assert_eq!(view["state"], "editing");
        assert!(view["lastError"].as_str().unwrap().contains("datastore unavailable"));

        store.set_unavailable(false);
        server
            .post(&format!("/api/sessions/{}/submit", id))
            .await
            .assert_status_ok();
    }
}
