//! Document persistence.
//!
//! Every entity is stored as a JSON document in its own collection. Handlers talk to
//! collections through [`Repository`], which has a Postgres implementation for
//! deployments and an in-memory one for local runs and tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A type persisted as one JSON document per record.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection (and table) name.
    const COLLECTION: &'static str;

    /// JSON field names whose non-empty values must be unique within the collection.
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate value for unique field '{field}' in {collection}")]
    Duplicate {
        collection: &'static str,
        field: String,
    },

    #[error("document '{id}' does not exist in {collection}")]
    Missing { collection: &'static str, id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Equality match on a top-level JSON field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<Value>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn matches(&self, doc: &Value) -> bool {
        doc.get(self.field) == Some(&self.value)
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(request.size))
        };

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}

#[async_trait]
pub trait Repository<T: Document>: Send + Sync {
    /// Persists a new document, assigning a fresh id when the document has none.
    async fn insert(&self, doc: T) -> StoreResult<T>;

    /// Replaces an existing document.
    async fn save(&self, doc: &T) -> StoreResult<()>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    async fn find_many(&self, filters: &[Filter]) -> StoreResult<Vec<T>>;

    async fn find_page(&self, filters: &[Filter], page: PageRequest) -> StoreResult<Page<T>>;

    /// Returns whether a document was removed.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    async fn find_one(&self, filters: &[Filter]) -> StoreResult<Option<T>> {
        Ok(self.find_many(filters).await?.into_iter().next())
    }

    async fn find_all(&self) -> StoreResult<Vec<T>> {
        self.find_many(&[]).await
    }

    async fn exists(&self, filters: &[Filter]) -> StoreResult<bool> {
        Ok(self.find_one(filters).await?.is_some())
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
