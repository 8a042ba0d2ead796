use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::features::categories::dtos::CategoryPayloadDto;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated `name`/`slug` pair ready to be written.
///
/// Only constructible through validation, so the writer never sees a
/// malformed or untrimmed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    name: String,
    slug: String,
}

impl CategoryInput {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Result<Self> {
        CategoryPayloadDto {
            name: name.into(),
            slug: slug.into(),
        }
        .into_input()
    }

    /// Caller must have validated both fields.
    pub(in crate::features::categories) fn from_validated(name: String, slug: String) -> Self {
        Self { name, slug }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
