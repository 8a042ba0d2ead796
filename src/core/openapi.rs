use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories (admin)
        categories_handlers::add_category,
        categories_handlers::show_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::preview_slug,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CategoryPayloadDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::SlugPreviewDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::SlugPreviewDto>,
        )
    ),
    tags(
        (name = "categories", description = "Category management (writes are admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Category Service API",
        version = "0.1.0",
        description = "Category management endpoints",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
