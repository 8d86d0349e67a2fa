use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        categories::{
            category_statistics, create_category, delete_category, get_category,
            list_categories, update_category,
        },
        health::{livez, root},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let category_routes = Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/", get(list_categories).post(create_category))
        .route("/categories/statistics", get(category_statistics))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .layer(cors);

    Router::new()
        .route("/", get(root))
        .route("/livez", get(livez))
        .merge(category_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn create(app: &Router, name: &str, description: Option<&str>) -> String {
        let (status, body) = send(
            app,
            json_request(
                "POST",
                "/categories/",
                json!({ "name": name, "description": description }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_root_message() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Category Service is running" }));
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let (status, _) = send(&app, get_request("/livez")).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_categories_empty() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, get_request("/categories/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_category() {
        let app = create_app(AppState::default());

        let id = create(&app, "Electronics", Some("Gadgets")).await;

        let (status, body) = send(&app, get_request(&format!("/categories/{id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": id, "name": "Electronics", "description": "Gadgets" })
        );
    }

    #[tokio::test]
    async fn test_create_without_description() {
        let app = create_app(AppState::default());

        let (status, body) = send(
            &app,
            json_request("POST", "/categories", json!({ "name": "Books" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Books");
        assert_eq!(body["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_blank_name_is_bad_request() {
        let app = create_app(AppState::default());

        let (status, body) = send(
            &app,
            json_request("POST", "/categories/", json!({ "name": "   " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Category name cannot be empty");
    }

    #[tokio::test]
    async fn test_get_missing_category() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, get_request("/categories/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Category with id nope not found");
    }

    #[tokio::test]
    async fn test_list_reflects_writes() {
        let app = create_app(AppState::default());

        // Warm the list cache before writing.
        let (_, body) = send(&app, get_request("/categories/")).await;
        assert_eq!(body, json!([]));

        create(&app, "Books", None).await;

        let (_, body) = send(&app, get_request("/categories/")).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Books");
    }

    #[tokio::test]
    async fn test_update_category() {
        let app = create_app(AppState::default());
        let id = create(&app, "Books", None).await;
        let uri = format!("/categories/{id}");

        // Warm the entity cache before updating.
        send(&app, get_request(&uri)).await;

        let (status, body) = send(
            &app,
            json_request("PUT", &uri, json!({ "name": "Novels", "description": "Fiction" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Novels");

        let (_, body) = send(&app, get_request(&uri)).await;
        assert_eq!(
            body,
            json!({ "id": id, "name": "Novels", "description": "Fiction" })
        );
    }

    #[tokio::test]
    async fn test_update_missing_category() {
        let app = create_app(AppState::default());

        let (status, _) = send(
            &app,
            json_request("PUT", "/categories/nope", json!({ "name": "Novels" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_blank_name_is_bad_request() {
        let app = create_app(AppState::default());
        let id = create(&app, "Books", None).await;

        let (status, _) = send(
            &app,
            json_request("PUT", &format!("/categories/{id}"), json!({ "name": "" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_category() {
        let app = create_app(AppState::default());
        let id = create(&app, "Books", None).await;
        let uri = format!("/categories/{id}");
        send(&app, get_request(&uri)).await;

        let (status, body) = send(&app, delete_request(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Category deleted successfully" }));

        let (status, _) = send(&app, get_request(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, delete_request(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_statistics() {
        let app = create_app(AppState::default());
        for name in ["Electronics", "Books", "Clothing"] {
            create(&app, name, None).await;
        }

        let (status, body) = send(&app, get_request("/categories/statistics")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total_count": 3,
                "average_name_length": 8.0,
                "longest_name": "Electronics",
                "shortest_name": "Books"
            })
        );
    }
}
