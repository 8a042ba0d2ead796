use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{
    CategoryPayloadDto, CategoryResponseDto, SlugPreviewDto, SlugifyQuery,
};
use crate::features::categories::services::CategoryService;
use crate::shared::slug::slugify;
use crate::shared::types::{ApiResponse, Meta};

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/category/add",
    request_body = CategoryPayloadDto,
    responses(
        (status = 201, description = "Category added successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or slug already exists"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let input = dto.into_input()?;

    let category = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Category added successfully.".to_string()),
            None,
        )),
    ))
}

/// Get a category by id (admin only)
#[utoipa::path(
    get,
    path = "/category/show/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Malformed category ID"),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn show_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Replace a category's name and slug (admin only)
#[utoipa::path(
    put,
    path = "/category/update/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or slug already exists"),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let input = dto.into_input()?;

    let category = service.update(id, input).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category updated successfully.".to_string()),
        None,
    )))
}

/// Delete a category (admin only)
#[utoipa::path(
    delete,
    path = "/category/delete/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted successfully"),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted successfully.".to_string()),
        None,
    )))
}

/// List all categories sorted by name
#[utoipa::path(
    get,
    path = "/category/all-category",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let total = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Preview the slug the category form derives from a name
#[utoipa::path(
    get,
    path = "/category/slugify",
    params(SlugifyQuery),
    responses(
        (status = 200, description = "Derived slug", body = ApiResponse<SlugPreviewDto>),
        (status = 400, description = "Missing name")
    ),
    tag = "categories"
)]
pub async fn preview_slug(
    Query(query): Query<SlugifyQuery>,
) -> Result<Json<ApiResponse<SlugPreviewDto>>> {
    let name = query
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("Category name is required"))?;

    let slug = slugify(&name);
    Ok(Json(ApiResponse::success(
        Some(SlugPreviewDto::new(name, slug)),
        None,
        None,
    )))
}
