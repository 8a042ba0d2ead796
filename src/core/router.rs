use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    middleware::from_fn,
    BoxError, Router,
};
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::JwtValidator;
use crate::features::categories::{routes as categories_routes, CategoryService};

/// Simple health check endpoint (no auth required)
async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

fn swagger_router(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

async fn handle_timeout_error(method: Method, uri: Uri, err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::RequestTimeout(format!("{} {}", method, uri))
    } else {
        AppError::Internal(format!("Unhandled middleware error on {} {}: {}", method, uri, err))
    }
}

/// Abort requests running longer than `timeout` with a 408 error envelope
fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

/// Assemble the full application: public and admin category routes, swagger,
/// health check, and the shared request layers
pub fn build_router(
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
    category_service: Arc<CategoryService>,
    jwt_validator: Arc<JwtValidator>,
) -> Router {
    // Admin routes (require a valid token; handlers check the admin role)
    let admin_routes = Router::new()
        .merge(categories_routes::admin_routes(Arc::clone(&category_service)))
        .route_layer(axum::middleware::from_fn_with_state(
            jwt_validator,
            middleware::auth_middleware,
        ));

    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new().merge(categories_routes::routes(category_service));

    let app = Router::new()
        .merge(swagger_router(swagger_config))
        .merge(admin_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(DefaultBodyLimit::max(app_config.max_request_body_size));

    with_request_timeout(app, app_config.request_timeout)
        .layer(middleware::cors_layer(
            app_config.cors_allowed_origins.clone(),
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
