use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryInput};
use crate::shared::constants::{
    CATEGORY_NAME_MAX_LEN, CATEGORY_NAME_MIN_LEN, CATEGORY_SLUG_MAX_LEN, CATEGORY_SLUG_MIN_LEN,
};
use crate::shared::validation::SLUG_REGEX;

fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    let len = name.chars().count() as u64;
    if len == 0 {
        return Err(ValidationError::new("required").with_message("Category name is required".into()));
    }
    if len < CATEGORY_NAME_MIN_LEN {
        return Err(ValidationError::new("length").with_message(
            format!(
                "Category name must be at least {} characters long",
                CATEGORY_NAME_MIN_LEN
            )
            .into(),
        ));
    }
    if len > CATEGORY_NAME_MAX_LEN {
        return Err(ValidationError::new("length").with_message(
            format!(
                "Category name cannot exceed {} characters",
                CATEGORY_NAME_MAX_LEN
            )
            .into(),
        ));
    }
    Ok(())
}

fn validate_slug(slug: &str) -> std::result::Result<(), ValidationError> {
    let len = slug.chars().count() as u64;
    if len == 0 {
        return Err(ValidationError::new("required").with_message("Slug is required".into()));
    }
    if len < CATEGORY_SLUG_MIN_LEN {
        return Err(ValidationError::new("length").with_message(
            format!(
                "Slug must be at least {} characters long",
                CATEGORY_SLUG_MIN_LEN
            )
            .into(),
        ));
    }
    if len > CATEGORY_SLUG_MAX_LEN {
        return Err(ValidationError::new("length").with_message(
            format!("Slug cannot exceed {} characters", CATEGORY_SLUG_MAX_LEN).into(),
        ));
    }
    if !SLUG_REGEX.is_match(slug) {
        return Err(ValidationError::new("regex").with_message(
            format!(
                "{} is not a valid slug! Use only lowercase letters, numbers and hyphens.",
                slug
            )
            .into(),
        ));
    }
    Ok(())
}

/// Flatten validator output into one message per failure, ordered by field name
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, messages)| messages)
        .collect()
}

/// Request body for both add and update.
///
/// Missing fields deserialize as empty strings and fail validation as required.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CategoryPayloadDto {
    /// Display name, 3-50 characters after trimming
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Running Shoes")]
    pub name: String,

    /// Lowercase letters, digits and hyphens, 3-50 characters, unique
    #[serde(default)]
    #[validate(custom(function = "validate_slug"))]
    #[schema(example = "running-shoes")]
    pub slug: String,
}

impl CategoryPayloadDto {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
        }
    }

    /// Trim, validate and convert into a writable input
    pub fn into_input(self) -> Result<CategoryInput> {
        let dto = self.trimmed();
        dto.validate()
            .map_err(|e| AppError::Validation(validation_messages(&e)))?;

        Ok(CategoryInput::from_validated(dto.name, dto.slug))
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Query params for slug preview
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugifyQuery {
    /// Category name to derive the slug from
    #[serde(default)]
    pub name: Option<String>,
}

/// Slug derived from a name, as the category form would submit it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewDto {
    pub name: String,
    pub slug: String,
    /// Whether the derived slug passes slug validation as-is
    pub valid: bool,
}

impl SlugPreviewDto {
    pub fn new(name: String, slug: String) -> Self {
        let valid = validate_slug(&slug).is_ok();
        Self { name, slug, valid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, slug: &str) -> CategoryPayloadDto {
        CategoryPayloadDto {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    fn validation_error(dto: CategoryPayloadDto) -> String {
        match dto.into_input() {
            Err(AppError::Validation(errors)) => errors.join("; "),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_payload_is_trimmed() {
        let input = payload("  Shoes  ", " shoes ").into_input().unwrap();
        assert_eq!(input.name(), "Shoes");
        assert_eq!(input.slug(), "shoes");
    }

    #[test]
    fn test_missing_fields() {
        let msg = validation_error(CategoryPayloadDto::default());
        assert_eq!(msg, "Category name is required; Slug is required");
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let msg = validation_error(payload("   ", "shoes"));
        assert_eq!(msg, "Category name is required");
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            validation_error(payload("ab", "shoes")),
            "Category name must be at least 3 characters long"
        );
        assert_eq!(
            validation_error(payload(&"x".repeat(51), "shoes")),
            "Category name cannot exceed 50 characters"
        );
        assert_eq!(
            validation_error(payload("Shoes", "sh")),
            "Slug must be at least 3 characters long"
        );
        assert_eq!(
            validation_error(payload("Shoes", &"s".repeat(51))),
            "Slug cannot exceed 50 characters"
        );
        assert!(payload(&"x".repeat(50), &"s".repeat(50))
            .into_input()
            .is_ok());
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // 3 characters, 6 bytes
        assert!(payload("ééé", "eee").into_input().is_ok());
    }

    #[test]
    fn test_slug_pattern_rejections() {
        for slug in ["Shoes", "mens shoes", "mens_shoes", "shoes!", "café"] {
            let msg = validation_error(payload("Shoes", slug));
            assert!(
                msg.ends_with("is not a valid slug! Use only lowercase letters, numbers and hyphens."),
                "{slug}: {msg}"
            );
        }
    }

    #[test]
    fn test_slug_with_separator_is_a_single_error() {
        match payload("Shoes", "ab; cd").into_input() {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].starts_with("ab; cd is not a valid slug!"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_slug_preview_validity() {
        assert!(SlugPreviewDto::new("Shoes".into(), "shoes".into()).valid);
        assert!(!SlugPreviewDto::new("!!".into(), "".into()).valid);
        assert!(!SlugPreviewDto::new("TV".into(), "tv".into()).valid);
    }

    #[test]
    fn test_payload_deserializes_with_missing_fields() {
        let dto: CategoryPayloadDto = serde_json::from_str(r#"{"name":"Shoes"}"#).unwrap();
        assert_eq!(dto.slug, "");
        assert!(matches!(
            dto.into_input(),
            Err(AppError::Validation(ref errors)) if errors.len() == 1 && errors[0] == "Slug is required"
        ));
    }
}
