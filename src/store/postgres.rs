use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};

use super::{new_id, Document, Filter, Page, PageRequest, Repository, StoreError, StoreResult};

const UNIQUE_VIOLATION: &str = "23505";

/// Collection stored as a `(id, seq, doc jsonb)` table named after `T::COLLECTION`.
pub struct PgRepository<T> {
    pool: PgPool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &[Filter]) {
        for (i, filter) in filters.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push("doc -> ");
            builder.push_bind(filter.field);
            builder.push(" = ");
            builder.push_bind(Json(filter.value.clone()));
        }
    }

    fn map_write_error(err: sqlx::Error) -> StoreError {
        if let sqlx::Error::Database(db) = &err {
            if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let field = db
                    .constraint()
                    .and_then(field_from_constraint)
                    .unwrap_or("id")
                    .to_string();
                return StoreError::Duplicate {
                    collection: T::COLLECTION,
                    field,
                };
            }
        }
        StoreError::Database(err)
    }
}

/// Unique indexes are named `<collection>__<field>`.
fn field_from_constraint(name: &str) -> Option<&str> {
    name.split_once("__").map(|(_, field)| field)
}

#[async_trait]
impl<T: Document> Repository<T> for PgRepository<T> {
    async fn insert(&self, mut doc: T) -> StoreResult<T> {
        if doc.id().is_empty() {
            doc.set_id(new_id());
        }

        let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", T::COLLECTION);
        sqlx::query(&sql)
            .bind(doc.id())
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .map_err(Self::map_write_error)?;

        Ok(doc)
    }

    async fn save(&self, doc: &T) -> StoreResult<()> {
        let sql = format!("UPDATE {} SET doc = $2 WHERE id = $1", T::COLLECTION);
        let result = sqlx::query(&sql)
            .bind(doc.id())
            .bind(Json(doc))
            .execute(&self.pool)
            .await
            .map_err(Self::map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing {
                collection: T::COLLECTION,
                id: doc.id().to_string(),
            });
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", T::COLLECTION);
        let row: Option<Json<T>> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn find_many(&self, filters: &[Filter]) -> StoreResult<Vec<T>> {
        let mut builder = QueryBuilder::new(format!("SELECT doc FROM {}", T::COLLECTION));
        Self::push_filters(&mut builder, filters);
        builder.push(" ORDER BY seq");

        let rows: Vec<Json<T>> = builder.build_query_scalar().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_page(&self, filters: &[Filter], page: PageRequest) -> StoreResult<Page<T>> {
        let mut count = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", T::COLLECTION));
        Self::push_filters(&mut count, filters);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::new(format!("SELECT doc FROM {}", T::COLLECTION));
        Self::push_filters(&mut select, filters);
        select.push(" ORDER BY seq LIMIT ");
        select.push_bind(i64::from(page.size));
        select.push(" OFFSET ");
        select.push_bind(page.offset() as i64);

        let rows: Vec<Json<T>> = select.build_query_scalar().fetch_all(&self.pool).await?;
        let content = rows.into_iter().map(|Json(doc)| doc).collect();
        Ok(Page::new(content, page, total.max(0) as u64))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::COLLECTION);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
