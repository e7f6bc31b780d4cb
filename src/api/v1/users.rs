//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{NewUser, User, UserUpdate};

/// POST /users/v1
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    debug!(name = %request.name, "Creating user");

    let user = state.user_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/v1/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    debug!(user_id = %id, "Getting user");

    let user = state.user_service.get(&id).await?;

    Ok(Json(user))
}

/// PUT /users/v1/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    debug!(user_id = %id, "Updating user");

    let user = state.user_service.update(&id, request).await?;

    Ok(Json(user))
}

/// DELETE /users/v1/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>, ApiError> {
    debug!(user_id = %id, "Deleting user");

    state.user_service.delete(&id).await?;

    Ok(Json("Successful"))
}

/// GET|PUT|DELETE /users/v1/ - the ID segment is empty
pub async fn missing_id() -> ApiError {
    debug!("Request without user ID");

    ApiError::bad_request("id is missing")
        .with_param("id")
        .with_code("missing_id")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::api::state::AppState;
    use crate::domain::user::MockUserRepository;
    use crate::domain::{DomainError, UserId};
    use crate::infrastructure::user::{InMemoryUserRepository, UserService};

    use super::*;

    fn create_app() -> Router {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        create_router(AppState::new(Arc::new(service)))
    }

    fn create_app_with_repository(repository: MockUserRepository) -> Router {
        let service = UserService::new(Arc::new(repository));
        create_router(AppState::new(Arc::new(service)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

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

    async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        app.clone().oneshot(request).await.unwrap().status()
    }

    async fn create_alice(app: &Router) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/users/v1",
            Some(json!({"name": "Alice", "age": 0, "address": "123 Wonderland"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Healthy"));
    }

    #[tokio::test]
    async fn test_ready() {
        let app = create_app();

        let (status, body) = send(&app, Method::GET, "/ready", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"][0]["name"], "user_store");
    }

    #[tokio::test]
    async fn test_ready_reports_store_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_count()
            .returning(|| Err(DomainError::internal("store offline")));
        let app = create_app_with_repository(repo);

        let (status, body) = send(&app, Method::GET, "/ready", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_create_user() {
        let app = create_app();

        let body = create_alice(&app).await;

        assert!(UserId::parse(body["id"].as_str().unwrap()).is_ok());
        assert_eq!(body["name"], "Alice");
        assert_eq!(body["age"], 0);
        assert_eq!(body["address"], "123 Wonderland");
        assert!(body["createdAt"].is_string());
        assert!(body.get("updatedAt").is_none());
    }

    #[tokio::test]
    async fn test_create_user_ignores_client_id() {
        let app = create_app();
        let client_id = UserId::generate().to_string();

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/v1",
            Some(json!({"id": client_id, "name": "Alice", "age": 30})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(body["id"], client_id);
    }

    #[tokio::test]
    async fn test_create_user_invalid_body() {
        let app = create_app();

        assert_eq!(
            send_raw(&app, Method::POST, "/users/v1", "{invalid json").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::POST, "/users/v1", "null").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_create_user_validation_failure() {
        let app = create_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/v1",
            Some(json!({"name": "A", "age": 30})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request_error");

        let (status, _) = send(
            &app,
            Method::POST,
            "/users/v1",
            Some(json!({"name": "Alice", "age": 200})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_user_store_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_put()
            .returning(|_| Err(DomainError::internal("store offline")));
        let app = create_app_with_repository(repo);

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/v1",
            Some(json!({"name": "Alice", "age": 30})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "internal server error");
    }

    #[tokio::test]
    async fn test_get_user() {
        let app = create_app();
        let created = create_alice(&app).await;
        let uri = format!("/users/v1/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_missing_id() {
        let app = create_app();

        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let (status, body) = send(&app, method, "/users/v1/", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["param"], "id");
            assert_eq!(body["error"]["code"], "missing_id");
        }
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let app = create_app();

        let (status, _) = send(&app, Method::GET, "/users/v1/invalid-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/users/v1/invalid-uuid",
            Some(json!({"name": "Updated Name"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::DELETE, "/users/v1/invalid-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let app = create_app();
        let uri = format!("/users/v1/{}", UserId::generate());

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "Nobody"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_user() {
        let app = create_app();
        let created = create_alice(&app).await;
        let uri = format!("/users/v1/{}", created["id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({"name": "Alice Updated", "address": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["name"], "Alice Updated");
        assert_eq!(body["address"], "123 Wonderland");
        assert_eq!(body["createdAt"], created["createdAt"]);
        assert!(body["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_update_user_bad_body() {
        let app = create_app();
        let created = create_alice(&app).await;
        let uri = format!("/users/v1/{}", created["id"].as_str().unwrap());

        assert_eq!(
            send_raw(&app, Method::PUT, &uri, "{bad json").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_delete_user() {
        let app = create_app();
        let created = create_alice(&app).await;
        let uri = format!("/users/v1/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Successful"));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let app = create_app();
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }
}
