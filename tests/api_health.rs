#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tempfile::TempDir;
    use tms::api::{self, AppState};
    use tms::db::{migrations, pool};
    use tower::ServiceExt;

    fn make_app() -> (TempDir, Router) {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("tms.db");
        let pool = pool::new_pool(&db_path, 4).unwrap();
        {
            let mut conn = pool.get().unwrap();
            migrations::init_with_migrations(&mut conn).unwrap();
        }
        let state = AppState {
            pool,
            env: "test".to_string(),
        };
        (temp_dir, api::router(state))
    }

    #[tokio::test]
    async fn healthcheck_returns_available() {
        let (_guard, app) = make_app();

        let req = Request::builder().uri("/healthcheck").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000).await.unwrap();
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["status"], "available");
        assert_eq!(parsed["environment"], "test");
        assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let (_guard, app) = make_app();

        let req = Request::builder().uri("/nonexistent").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
