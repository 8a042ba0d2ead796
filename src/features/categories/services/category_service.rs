use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::CategoryInput;
use crate::features::categories::repositories::{
    CategoryRepository, StoreError, SLUG_UNIQUE_CONSTRAINT,
};

pub const SLUG_TAKEN_MESSAGE: &str = "Category with this slug already exists";
pub const CATEGORY_NOT_FOUND_MESSAGE: &str = "Category not found";

/// Convert a storage failure into an AppError.
///
/// A unique violation from the store is reported exactly like a failed
/// pre-check, so callers see one Conflict shape whichever path caught it.
fn handle_store_error(e: StoreError, operation: &str) -> AppError {
    match e {
        StoreError::UniqueViolation {
            constraint: Some(ref constraint),
        } if constraint != SLUG_UNIQUE_CONSTRAINT => {
            AppError::Internal(format!(
                "Unexpected unique violation on {} during {}",
                constraint, operation
            ))
        }
        StoreError::UniqueViolation { constraint } => {
            tracing::warn!(
                "Slug uniqueness enforced by store during {} (constraint={:?})",
                operation,
                constraint
            );
            AppError::Conflict(SLUG_TAKEN_MESSAGE.to_string())
        }
        StoreError::Unavailable(msg) => {
            tracing::error!("Category store unavailable during {}: {}", operation, msg);
            AppError::ServiceUnavailable(msg)
        }
        StoreError::Database(e) => {
            tracing::error!("Failed to {} category: {:?}", operation, e);
            AppError::Database(e)
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound(CATEGORY_NOT_FOUND_MESSAGE.to_string())
}

/// Service for category operations.
///
/// Writes follow check-then-write: an advisory slug lookup gives an early
/// Conflict, and the repository's unique constraint is the final word.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Create a category with a slug no other category holds
    pub async fn create(&self, input: CategoryInput) -> Result<CategoryResponseDto> {
        let existing = self
            .repository
            .find_by_slug(input.slug(), None)
            .await
            .map_err(|e| handle_store_error(e, "check slug for"))?;

        if existing.is_some() {
            tracing::warn!("Rejected category create: slug '{}' taken", input.slug());
            return Err(AppError::Conflict(SLUG_TAKEN_MESSAGE.to_string()));
        }

        let category = self
            .repository
            .insert(&input)
            .await
            .map_err(|e| handle_store_error(e, "create"))?;

        tracing::info!(
            "Category created: id={}, slug={}",
            category.id,
            category.slug
        );

        Ok(category.into())
    }

    /// Get category by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| handle_store_error(e, "fetch"))?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self
            .repository
            .list_ordered_by_name()
            .await
            .map_err(|e| handle_store_error(e, "list"))?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Replace name and slug of an existing category
    pub async fn update(&self, id: Uuid, input: CategoryInput) -> Result<CategoryResponseDto> {
        let current = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| handle_store_error(e, "fetch"))?
            .ok_or_else(not_found)?;

        if current.slug != input.slug() {
            let holder = self
                .repository
                .find_by_slug(input.slug(), Some(id))
                .await
                .map_err(|e| handle_store_error(e, "check slug for"))?;

            if holder.is_some() {
                tracing::warn!(
                    "Rejected category update: id={}, slug '{}' taken",
                    id,
                    input.slug()
                );
                return Err(AppError::Conflict(SLUG_TAKEN_MESSAGE.to_string()));
            }
        }

        // Deleted between the lookup and the write
        let category = self
            .repository
            .update(id, &input)
            .await
            .map_err(|e| handle_store_error(e, "update"))?
            .ok_or_else(not_found)?;

        tracing::info!(
            "Category updated: id={}, slug={}",
            category.id,
            category.slug
        );

        Ok(category.into())
    }

    /// Hard delete
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| handle_store_error(e, "delete"))?;

        if !deleted {
            return Err(not_found());
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}
