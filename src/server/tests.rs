//! Server Module Tests
//!
//! Drives the assembled router end to end with in-process requests.
//!
//! ## Test Scopes
//! - **Search endpoint**: Query validation, result shape and degraded reads.
//! - **Add endpoint**: Validation, id assignment and store side effects.
//! - **CORS**: Headers on regular, error and preflight responses.

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::search::types::Record;
    use crate::server::{build_router, AppState};
    use crate::storage::store::{JsonFileStore, MemoryStore, NewRecord, RecordStore};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn seeded_store() -> Arc<MemoryStore> {
        let records = vec![
            NewRecord {
                domain: "maps.example".to_string(),
                apptitle: "Maps".to_string(),
                appdescription: "navigation tool".to_string(),
                by: None,
                icon: None,
            }
            .into_record(1),
            NewRecord {
                domain: "weather.com".to_string(),
                apptitle: "Weather App".to_string(),
                appdescription: "daily forecasts".to_string(),
                by: Some("meteo".to_string()),
                icon: None,
            }
            .into_record(2),
        ];
        Arc::new(MemoryStore::with_records(records))
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// A store whose every operation fails.
    struct BrokenStore;

    fn disk_gone() -> StoreError {
        StoreError::Io {
            path: "data.json".into(),
            source: std::io::Error::other("disk gone"),
        }
    }

    #[async_trait]
    impl RecordStore for BrokenStore {
        async fn load_all(&self) -> Result<Vec<Record>, StoreError> {
            Err(disk_gone())
        }

        async fn append(&self, _record: NewRecord) -> Result<Record, StoreError> {
            Err(disk_gone())
        }
    }

    // ============================================================
    // SEARCH ENDPOINT
    // ============================================================

    #[tokio::test]
    async fn test_search_returns_decorated_matches() {
        let app = build_router(AppState::new(seeded_store()));

        let (status, body) = send(app, get("/s?q=maps")).await;

        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], 1);
        assert_eq!(results[0]["apptitle"], "Maps");
        assert_eq!(results[0]["cortype"], "https://");
        assert_eq!(results[0]["similarity"], "high");
    }

    #[tokio::test]
    async fn test_search_description_match_is_low_similarity() {
        let app = build_router(AppState::new(seeded_store()));

        let (status, body) = send(app, get("/s?q=navigation")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["apptitle"], "Maps");
        assert_eq!(body[0]["similarity"], "low");
    }

    #[tokio::test]
    async fn test_search_url_encoded_query() {
        let app = build_router(AppState::new(seeded_store()));

        let (status, body) = send(app, get("/s?q=Weather%20App")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], 2);
        assert_eq!(body[0]["similarity"], "high");
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty_array() {
        let app = build_router(AppState::new(seeded_store()));

        let (status, body) = send(app, get("/s?q=zzzzqqq")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_search_missing_query_rejected() {
        for uri in ["/s", "/s?q=", "/s?q=%20%20"] {
            let app = build_router(AppState::new(seeded_store()));

            let (status, body) = send(app, get(uri)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
            assert_eq!(body, json!({"error": "Query parameter is required"}));
        }
    }

    #[tokio::test]
    async fn test_search_respects_configured_threshold() {
        let strict = build_router(AppState::with_threshold(seeded_store(), 0.0));
        let (_, body) = send(strict, get("/s?q=mapz")).await;
        assert_eq!(body, json!([]));

        let default = build_router(AppState::new(seeded_store()));
        let (_, body) = send(default, get("/s?q=mapz")).await;
        assert_eq!(body[0]["id"], 1);
    }

    #[tokio::test]
    async fn test_search_unreadable_store_degrades_to_empty() {
        let app = build_router(AppState::new(Arc::new(BrokenStore)));

        let (status, body) = send(app, get("/s?q=maps")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    // ============================================================
    // ADD ENDPOINT
    // ============================================================

    #[tokio::test]
    async fn test_add_assigns_next_ids() {
        let store = seeded_store();

        let (status, first) = send(
            build_router(AppState::new(store.clone())),
            post_json(
                "/add",
                json!({"domain": "chess.example", "apptitle": "Chess", "appdescription": "play online"}),
            ),
        )
        .await;
        let (_, second) = send(
            build_router(AppState::new(store.clone())),
            post_json(
                "/add",
                json!({"domain": "go.example", "apptitle": "Go", "appdescription": "board game"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["message"], "Data added successfully");
        assert_eq!(first["item"]["id"], 3);
        assert_eq!(second["item"]["id"], 4);
        assert_eq!(store.load_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_add_fills_defaults_and_overrides_cortype() {
        let app = build_router(AppState::new(Arc::new(MemoryStore::new())));

        let (status, body) = send(
            app,
            post_json(
                "/add",
                json!({
                    "id": 42,
                    "domain": "chess.example",
                    "apptitle": "Chess",
                    "appdescription": "play online",
                    "cortype": "gopher://"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let item = &body["item"];
        assert_eq!(item["id"], 1);
        assert_eq!(item["by"], "unknown");
        assert_eq!(item["cortype"], "https://");
        assert_eq!(
            item["icon"],
            "https://www.google.com/s2/favicons?domain=chess.example"
        );
    }

    #[tokio::test]
    async fn test_add_missing_field_rejected_without_mutation() {
        let store = seeded_store();
        let app = build_router(AppState::new(store.clone()));

        let (status, body) = send(
            app,
            post_json("/add", json!({"domain": "chess.example", "apptitle": "Chess"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "All fields are required"}));
        assert_eq!(store.load_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_without_body_rejected() {
        let app = build_router(AppState::new(seeded_store()));
        let req = Request::builder()
            .method(Method::POST)
            .uri("/add")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "All fields are required"}));
    }

    #[tokio::test]
    async fn test_add_storage_failure_is_server_error() {
        let app = build_router(AppState::new(Arc::new(BrokenStore)));

        let (status, body) = send(
            app,
            post_json(
                "/add",
                json!({"domain": "chess.example", "apptitle": "Chess", "appdescription": "play"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to save data"}));
    }

    #[tokio::test]
    async fn test_added_record_is_searchable_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("data.json")));

        let (status, _) = send(
            build_router(AppState::new(store.clone())),
            post_json(
                "/add",
                json!({"domain": "weather.com", "apptitle": "Weather", "appdescription": "forecasts"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(build_router(AppState::new(store)), get("/s?q=wether")).await;

        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["apptitle"], "Weather");
        assert_eq!(body[0]["similarity"], "low");
    }

    // ============================================================
    // CORS
    // ============================================================

    #[tokio::test]
    async fn test_cors_headers_on_success_and_error() {
        for uri in ["/s?q=maps", "/s"] {
            let app = build_router(AppState::new(seeded_store()));
            let response = app.oneshot(get(uri)).await.unwrap();
            let headers = response.headers();

            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(
                headers[header::ACCESS_CONTROL_ALLOW_METHODS],
                "GET, POST, PUT, DELETE"
            );
            assert_eq!(
                headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
                "Origin, X-Requested-With, Content-Type, Accept"
            );
        }
    }

    #[tokio::test]
    async fn test_preflight_answered() {
        let app = build_router(AppState::new(seeded_store()));
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/add")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
