use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{new_id, Document, Filter, Page, PageRequest, Repository, StoreError, StoreResult};

/// Process-local collection kept in insertion order.
pub struct MemoryRepository<T> {
    docs: RwLock<Vec<(String, Value)>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            _marker: PhantomData,
        }
    }

    fn check_unique(docs: &[(String, Value)], id: &str, doc: &Value) -> StoreResult<()> {
        for field in T::UNIQUE_FIELDS {
            let value = match doc.get(*field) {
                Some(Value::String(s)) if s.is_empty() => continue,
                Some(Value::Null) | None => continue,
                Some(value) => value,
            };

            let taken = docs
                .iter()
                .any(|(other_id, other)| other_id != id && other.get(*field) == Some(value));
            if taken {
                return Err(StoreError::Duplicate {
                    collection: T::COLLECTION,
                    field: (*field).to_string(),
                });
            }
        }
        Ok(())
    }

    fn matching(docs: &[(String, Value)], filters: &[Filter]) -> StoreResult<Vec<T>> {
        docs.iter()
            .filter(|(_, doc)| filters.iter().all(|f| f.matches(doc)))
            .map(|(_, doc)| serde_json::from_value(doc.clone()).map_err(StoreError::from))
            .collect()
    }
}

impl<T: Document> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> Repository<T> for MemoryRepository<T> {
    async fn insert(&self, mut doc: T) -> StoreResult<T> {
        if doc.id().is_empty() {
            doc.set_id(new_id());
        }
        let value = serde_json::to_value(&doc)?;

        let mut docs = self.docs.write().await;
        if docs.iter().any(|(id, _)| id == doc.id()) {
            return Err(StoreError::Duplicate {
                collection: T::COLLECTION,
                field: "id".to_string(),
            });
        }
        Self::check_unique(&docs, doc.id(), &value)?;
        docs.push((doc.id().to_string(), value));
        Ok(doc)
    }

    async fn save(&self, doc: &T) -> StoreResult<()> {
        let value = serde_json::to_value(doc)?;

        let mut docs = self.docs.write().await;
        Self::check_unique(&docs, doc.id(), &value)?;
        match docs.iter_mut().find(|(id, _)| id == doc.id()) {
            Some(slot) => {
                slot.1 = value;
                Ok(())
            }
            None => Err(StoreError::Missing {
                collection: T::COLLECTION,
                id: doc.id().to_string(),
            }),
        }
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let docs = self.docs.read().await;
        docs.iter()
            .find(|(doc_id, _)| doc_id == id)
            .map(|(_, doc)| serde_json::from_value(doc.clone()))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn find_many(&self, filters: &[Filter]) -> StoreResult<Vec<T>> {
        let docs = self.docs.read().await;
        Self::matching(&docs, filters)
    }

    async fn find_page(&self, filters: &[Filter], page: PageRequest) -> StoreResult<Page<T>> {
        let docs = self.docs.read().await;
        let all = Self::matching(&docs, filters)?;
        let total = all.len() as u64;
        let content = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect();
        Ok(Page::new(content, page, total))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|(doc_id, _)| doc_id != id);
        Ok(docs.len() != before)
    }
}
