use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public category routes (no authentication required)
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/category/all-category", get(handlers::list_categories))
        .route("/category/slugify", get(handlers::preview_slug))
        .with_state(service)
}

/// Admin category routes; must sit behind the auth middleware
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/category/add", post(handlers::add_category))
        .route("/category/show/{id}", get(handlers::show_category))
        .route("/category/update/{id}", put(handlers::update_category))
        .route("/category/delete/{id}", delete(handlers::delete_category))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::repositories::memory::InMemoryCategoryRepository;
    use crate::shared::test_helpers::with_admin_auth;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_server() -> TestServer {
        let service = Arc::new(CategoryService::new(Arc::new(
            InMemoryCategoryRepository::new(),
        )));
        let app = Router::new()
            .merge(with_admin_auth(admin_routes(Arc::clone(&service))))
            .merge(routes(service));
        TestServer::new(app).unwrap()
    }

    async fn create(server: &TestServer, name: &str, slug: &str) -> Value {
        let response = server
            .post("/category/add")
            .json(&json!({ "name": name, "slug": slug }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()
    }

    #[tokio::test]
    async fn test_add_then_duplicate_slug() {
        let server = test_server();

        let body = create(&server, "Shoes", "shoes").await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Category added successfully.");
        assert_eq!(body["data"]["name"], "Shoes");
        assert_eq!(body["data"]["slug"], "shoes");
        assert!(body["data"]["id"].is_string());

        let response = server
            .post("/category/add")
            .json(&json!({ "name": "Shoes2", "slug": "shoes" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Category with this slug already exists");
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_payloads() {
        let server = test_server();

        let response = server
            .post("/category/add")
            .json(&json!({ "name": "Shoes" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Slug is required");

        let response = server
            .post("/category/add")
            .json(&json!({ "name": "Shoes", "slug": "Mens Shoes" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Mens Shoes is not a valid slug! Use only lowercase letters, numbers and hyphens."
        );
    }

    #[tokio::test]
    async fn test_slug_containing_separator_reports_one_error() {
        let response = test_server()
            .post("/category/add")
            .json(&json!({ "name": "Shoes", "slug": "ab; cd" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            "ab; cd is not a valid slug! Use only lowercase letters, numbers and hyphens."
        );
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let server = test_server();

        let response = server
            .post("/category/add")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_show_update_delete_lifecycle() {
        let server = test_server();
        let created = create(&server, "Shoes", "shoes").await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let response = server.get(&format!("/category/show/{}", id)).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["slug"], "shoes");

        let response = server
            .put(&format!("/category/update/{}", id))
            .json(&json!({ "name": "Sneakers", "slug": "sneakers" }))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["message"], "Category updated successfully.");
        assert_eq!(body["data"]["id"], id.as_str());
        assert_eq!(body["data"]["slug"], "sneakers");

        let response = server.delete(&format!("/category/delete/{}", id)).await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["message"],
            "Category deleted successfully."
        );

        let response = server.delete(&format!("/category/delete/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Category not found");

        server
            .get(&format!("/category/show/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_and_own_slug() {
        let server = test_server();
        create(&server, "Shoes", "shoes").await;
        let bags = create(&server, "Bags", "bags").await;
        let bags_id = bags["data"]["id"].as_str().unwrap().to_string();

        server
            .put(&format!("/category/update/{}", bags_id))
            .json(&json!({ "name": "Bags", "slug": "shoes" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .put(&format!("/category/update/{}", bags_id))
            .json(&json!({ "name": "Bags & Totes", "slug": "bags" }))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let server = test_server();

        server
            .put(&format!("/category/update/{}", uuid::Uuid::new_v4()))
            .json(&json!({ "name": "Shoes", "slug": "shoes" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let server = test_server();

        let response = server.get("/category/show/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let server = test_server();
        create(&server, "Bravo", "b-slug").await;
        create(&server, "Alpha", "a-slug").await;

        let response = server.get("/category/all-category").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["name"], "Alpha");
        assert_eq!(body["data"][1]["name"], "Bravo");
    }

    #[tokio::test]
    async fn test_slug_preview() {
        let server = test_server();

        let response = server
            .get("/category/slugify")
            .add_query_param("name", "Home & Garden")
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["slug"], "home-garden");
        assert_eq!(body["data"]["valid"], true);

        server
            .get("/category/slugify")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_routes_require_authenticated_user() {
        let service = Arc::new(CategoryService::new(Arc::new(
            InMemoryCategoryRepository::new(),
        )));
        let server = TestServer::new(admin_routes(service)).unwrap();

        server
            .post("/category/add")
            .json(&json!({ "name": "Shoes", "slug": "shoes" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
