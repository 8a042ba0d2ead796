use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CategoryRepository, StoreResult};
use crate::features::categories::models::{Category, CategoryInput};

const CATEGORY_COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Byte-wise name order, independent of the database locale
const LIST_ORDER: &str = r#"ORDER BY name COLLATE "C" ASC, created_at ASC"#;

/// PostgreSQL-backed category store; slug uniqueness is enforced by
/// the `categories_slug_key` constraint
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> StoreResult<Option<Category>> {
        let query = format!(
            r#"
            SELECT {}
            FROM categories
            WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
            LIMIT 1
            "#,
            CATEGORY_COLUMNS
        );

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .bind(exclude_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    async fn list_ordered_by_name(&self) -> StoreResult<Vec<Category>> {
        let query = format!("SELECT {} FROM categories {}", CATEGORY_COLUMNS, LIST_ORDER);

        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn insert(&self, input: &CategoryInput) -> StoreResult<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(input.name())
            .bind(input.slug())
            .fetch_one(&self.pool)
            .await?;

        Ok(category)
    }

    async fn update(&self, id: Uuid, input: &CategoryInput) -> StoreResult<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = $1, slug = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(input.name())
            .bind(input.slug())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_order_ignores_database_locale() {
        assert!(LIST_ORDER.contains(r#"name COLLATE "C" ASC"#));
        assert!(LIST_ORDER.ends_with("created_at ASC"));
    }
}
