pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::presentation::handlers as session_handlers;
use crate::solon::handlers as solon_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Synchronization
        .route(
            "/api/v1/profile",
            post(solon_handlers::handle_submit_profile),
        )
        // Session / presentation
        .route("/api/v1/session", get(session_handlers::handle_get_session))
        .route(
            "/api/v1/session/view",
            post(session_handlers::handle_select_view),
        )
        .route(
            "/api/v1/session/reset",
            post(session_handlers::handle_reset_session),
        )
        .route("/api/v1/share", get(session_handlers::handle_share))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Config;
    use crate::errors::SYNC_FAILED_MESSAGE;
    use crate::llm_client::stub::StubModel;
    use crate::llm_client::{ChunkSource, GroundingChunk};
    use crate::presentation::session::Session;

    const STORE_REPLY: &str = r#"Claro, aquí está:
```json
{"profileJobs": [{"companyName":"Tienda X","address":"Calle 1","applicationMethod":"Presencial","urgency":"Alta","requirements":["Ventas"]}], "investment": null}
```"#;

    fn test_state(model: Arc<StubModel>) -> AppState {
        AppState {
            llm: model,
            clock: Arc::new(FixedClock::at(10, 15)),
            session: Arc::new(Mutex::new(Session::default())),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                gemini_base_url: "http://127.0.0.1:9".to_string(),
                gemini_timeout: None,
                public_url: "https://solon.example".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    fn cdmx_profile() -> Value {
        json!({
            "country": "México",
            "location": "Ciudad de México",
            "skills": "Ventas",
            "age": 25,
            "sex": "Femenino"
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(Arc::new(StubModel::replying("{}"))));
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_store_reply_renders_one_card_and_no_investment() {
        let model = Arc::new(StubModel::replying(STORE_REPLY));
        let app = build_router(test_state(model.clone()));

        let (status, body) = send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profileJobs"].as_array().unwrap().len(), 1);
        assert_eq!(body["profileJobs"][0]["applicationMethod"], "Presencial");
        assert!(body["investment"].is_null());
        assert_eq!(body["nearbyJobs"], json!([]));
        assert_eq!(body["text"], "Sincronización completa.");

        let request = model.last_request().unwrap();
        assert!(request.prompt.contains("Ciudad de México"));
        assert!(request.prompt.contains("Ventas"));

        let (_, snapshot) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(snapshot["state"], "ready");
        assert_eq!(snapshot["screen"], "selection");
        assert_eq!(snapshot["view"]["investmentAvailable"], false);

        let (status, jobs) = send(
            &app,
            "POST",
            "/api/v1/session/view",
            Some(json!({"view": "jobs", "jobTab": "profile"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(jobs["view"]["kind"], "jobList");
        let cards = jobs["view"]["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0]["companyName"], "Tienda X");
        assert_eq!(cards[0]["action"]["kind"], "openInMaps");
        assert_eq!(cards[0]["openNow"], true);
        assert_eq!(jobs["localTime"], "10:15:00");

        let (_, investment) = send(
            &app,
            "POST",
            "/api/v1/session/view",
            Some(json!({"view": "investment"})),
        )
        .await;
        assert_eq!(investment["view"]["kind"], "investmentUnavailable");
    }

    #[tokio::test]
    async fn test_grounding_sources_reach_response_and_session() {
        let chunk = |web: Option<&str>, maps: Option<&str>| GroundingChunk {
            web: web.map(|u| ChunkSource {
                uri: Some(u.to_string()),
            }),
            maps: maps.map(|u| ChunkSource {
                uri: Some(u.to_string()),
            }),
        };
        let model = StubModel::replying(STORE_REPLY).with_grounding(vec![
            chunk(Some("https://empleos.example/tienda-x"), None),
            chunk(None, Some("https://maps.google.com/?cid=7")),
        ]);
        let app = build_router(test_state(Arc::new(model)));
        let expected = json!(["https://empleos.example/tienda-x", "https://maps.google.com/?cid=7"]);

        let (status, body) = send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sources"], expected);

        let (_, snapshot) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(snapshot["state"], "ready");
        assert_eq!(snapshot["sources"], expected);
    }

    #[tokio::test]
    async fn test_dropped_submission_still_settles_session() {
        let model = Arc::new(StubModel::replying(STORE_REPLY).after(Duration::from_millis(150)));
        let app = build_router(test_state(model.clone()));

        // The client goes away before the model answers.
        let first = tokio::time::timeout(
            Duration::from_millis(20),
            send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())),
        )
        .await;
        assert!(first.is_err());

        let mut state = Value::Null;
        for _ in 0..50 {
            let (_, snapshot) = send(&app, "GET", "/api/v1/session", None).await;
            state = snapshot["state"].clone();
            if state != "loading" {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(state, "ready");

        let (status, body) = send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profileJobs"].as_array().unwrap().len(), 1);
        assert_eq!(model.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_refusal_reply_shows_generic_error_state() {
        let app = build_router(test_state(Arc::new(StubModel::replying(
            "Lo siento, no puedo ayudar.",
        ))));

        let (status, body) = send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "SYNC_FAILED");
        assert_eq!(body["error"]["message"], SYNC_FAILED_MESSAGE);

        let (_, snapshot) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(snapshot["state"], "failed");
        assert_eq!(snapshot["message"], SYNC_FAILED_MESSAGE);
        assert!(snapshot.get("view").is_none());
    }

    #[tokio::test]
    async fn test_network_failure_looks_like_parse_failure() {
        let app = build_router(test_state(Arc::new(StubModel::failing())));
        let (status, body) = send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "SYNC_FAILED");
        assert_eq!(body["error"]["message"], SYNC_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_blank_location_is_rejected_before_model_call() {
        let model = Arc::new(StubModel::replying("{}"));
        let app = build_router(test_state(model.clone()));

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/profile",
            Some(json!({"location": " ", "skills": "Ventas"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(model.last_request().is_none());
    }

    #[tokio::test]
    async fn test_submission_while_loading_is_conflict() {
        let model = Arc::new(StubModel::replying("{}"));
        let state = test_state(model.clone());
        let profile = serde_json::from_value(cdmx_profile()).unwrap();
        state.session.lock().await.begin_submission(profile).unwrap();
        let app = build_router(state);

        let (status, body) = send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert!(model.last_request().is_none());

        let (_, snapshot) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(snapshot["state"], "loading");
    }

    #[tokio::test]
    async fn test_view_switch_before_results_is_conflict() {
        let app = build_router(test_state(Arc::new(StubModel::replying("{}"))));
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/session/view",
            Some(json!({"view": "jobs"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_reset_clears_results() {
        let app = build_router(test_state(Arc::new(StubModel::replying(STORE_REPLY))));
        send(&app, "POST", "/api/v1/profile", Some(cdmx_profile())).await;

        let (status, _) = send(&app, "POST", "/api/v1/session/reset", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, snapshot) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(snapshot["state"], "awaitingProfile");
    }

    #[tokio::test]
    async fn test_share_returns_public_url() {
        let app = build_router(test_state(Arc::new(StubModel::replying("{}"))));
        let (status, body) = send(&app, "GET", "/api/v1/share", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "https://solon.example");
    }
}
