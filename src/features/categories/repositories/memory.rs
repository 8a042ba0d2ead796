//! In-memory category store for tests.
//!
//! Mirrors the PostgreSQL table: ids and timestamps are assigned on write and
//! the slug constraint is checked atomically under the lock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{CategoryRepository, StoreError, StoreResult, SLUG_UNIQUE_CONSTRAINT};
use crate::features::categories::models::{Category, CategoryInput};

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    records: Mutex<HashMap<Uuid, Category>>,
    unavailable: AtomicBool,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("pool timed out".to_string()));
        }
        Ok(())
    }

    fn slug_taken(records: &HashMap<Uuid, Category>, slug: &str, exclude_id: Option<Uuid>) -> bool {
        records
            .values()
            .any(|c| c.slug == slug && Some(c.id) != exclude_id)
    }

    fn unique_violation() -> StoreError {
        StoreError::UniqueViolation {
            constraint: Some(SLUG_UNIQUE_CONSTRAINT.to_string()),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>> {
        self.check_available()?;
        Ok(self.records.lock().await.get(&id).cloned())
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> StoreResult<Option<Category>> {
        self.check_available()?;
        let records = self.records.lock().await;
        Ok(records
            .values()
            .find(|c| c.slug == slug && Some(c.id) != exclude_id)
            .cloned())
    }

    async fn list_ordered_by_name(&self) -> StoreResult<Vec<Category>> {
        self.check_available()?;
        let mut categories: Vec<Category> =
            self.records.lock().await.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(categories)
    }

    async fn insert(&self, input: &CategoryInput) -> StoreResult<Category> {
        self.check_available()?;
        let mut records = self.records.lock().await;
        if Self::slug_taken(&records, input.slug(), None) {
            return Err(Self::unique_violation());
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: input.name().to_string(),
            slug: input.slug().to_string(),
            created_at: now,
            updated_at: now,
        };
        records.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: Uuid, input: &CategoryInput) -> StoreResult<Option<Category>> {
        self.check_available()?;
        let mut records = self.records.lock().await;
        if !records.contains_key(&id) {
            return Ok(None);
        }
        if Self::slug_taken(&records, input.slug(), Some(id)) {
            return Err(Self::unique_violation());
        }

        Ok(records.get_mut(&id).map(|category| {
            category.name = input.name().to_string();
            category.slug = input.slug().to_string();
            category.updated_at = Utc::now();
            category.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        self.check_available()?;
        Ok(self.records.lock().await.remove(&id).is_some())
    }
}

/// Store whose advisory slug lookup always misses, as if another writer
/// committed the same slug between the check and the write
pub struct StalePrecheckRepository<R> {
    pub inner: R,
}

#[async_trait]
impl<R: CategoryRepository> CategoryRepository for StalePrecheckRepository<R> {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(
        &self,
        _slug: &str,
        _exclude_id: Option<Uuid>,
    ) -> StoreResult<Option<Category>> {
        Ok(None)
    }

    async fn list_ordered_by_name(&self) -> StoreResult<Vec<Category>> {
        self.inner.list_ordered_by_name().await
    }

    async fn insert(&self, input: &CategoryInput) -> StoreResult<Category> {
        self.inner.insert(input).await
    }

    async fn update(&self, id: Uuid, input: &CategoryInput) -> StoreResult<Option<Category>> {
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        self.inner.delete(id).await
    }
}
