use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, QueryBuilder};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    transactions::models::{category_count::CategoryCount, transaction::Transaction},
};

use super::{TransactionStore, TransactionsFilter};

// Postgres caps bind parameters per statement at 65535.
static INSERT_CHUNK_SIZE: usize = 1000;

static CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id TEXT PRIMARY KEY,
    seq BIGSERIAL,
    title TEXT,
    description TEXT,
    price DOUBLE PRECISION NOT NULL,
    date_of_sale TIMESTAMPTZ,
    category TEXT,
    sold BOOLEAN
)
"#;

static CREATE_INDEX_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS transactions_date_of_sale_idx
ON transactions (date_of_sale)
"#;

static SELECT_TRANSACTIONS_SQL: &str =
    "SELECT id, title, description, price, date_of_sale, category, sold FROM transactions";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(Some(Duration::from_secs(60)))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Creates the table and its index when missing.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX_SQL).execute(&self.pool).await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn push_where(builder: &mut QueryBuilder<'_, Postgres>, has_inserted_where: &mut bool) {
    if !*has_inserted_where {
        builder.push(" WHERE ");
        *has_inserted_where = true;
    } else {
        builder.push(" AND ");
    }
}

pub fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &TransactionsFilter) {
    let mut has_inserted_where = false;

    if let Some(search) = &filter.search {
        push_where(builder, &mut has_inserted_where);
        builder
            .push("(STRPOS(LOWER(title), LOWER(")
            .push_bind(search.text.to_string())
            .push(")) > 0 OR STRPOS(LOWER(description), LOWER(")
            .push_bind(search.text.to_string())
            .push(")) > 0");

        if let Some(price) = search.price {
            builder.push(" OR price = ").push_bind(price);
        }

        builder.push(")");
    }

    if let Some(window) = &filter.window {
        push_where(builder, &mut has_inserted_where);

        match window.bounds() {
            Some((start, end)) => {
                builder
                    .push("date_of_sale >= ")
                    .push_bind(start)
                    .push(" AND date_of_sale <= ")
                    .push_bind(end);
            }
            None => {
                builder.push("FALSE");
            }
        }
    }

    if let Some(sold) = filter.sold {
        push_where(builder, &mut has_inserted_where);
        builder.push("sold = ").push_bind(sold);
    }

    if let Some(range) = &filter.price_range {
        push_where(builder, &mut has_inserted_where);
        builder
            .push("price >= ")
            .push_bind(range.min)
            .push(" AND price < ")
            .push_bind(range.max);
    }
}

pub fn find_query(
    filter: &TransactionsFilter,
    skip: i64,
    limit: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_TRANSACTIONS_SQL);
    push_filter(&mut builder, filter);
    builder
        .push(" ORDER BY seq OFFSET ")
        .push_bind(skip)
        .push(" LIMIT ")
        .push_bind(limit);

    tracing::debug!(sql = builder.sql());

    builder
}

fn count_query(filter: &TransactionsFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM transactions");
    push_filter(&mut builder, filter);
    builder
}

fn sum_price_query(filter: &TransactionsFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new("SELECT COALESCE(SUM(price), 0)::DOUBLE PRECISION FROM transactions");
    push_filter(&mut builder, filter);
    builder
}

fn count_by_category_query(filter: &TransactionsFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new("SELECT category AS id, COUNT(*) AS count FROM transactions");
    push_filter(&mut builder, filter);
    builder.push(" GROUP BY category");
    builder
}

#[async_trait]
impl TransactionStore for PgStore {
    async fn delete_all(&self) -> Result<u64, ApiError> {
        let sqlx_result = sqlx::query("DELETE FROM transactions")
            .execute(&self.pool)
            .await;

        match sqlx_result {
            Ok(result) => Ok(result.rows_affected()),
            Err(e) => {
                tracing::error!("delete_all: {}", e);
                Err(DefaultApiError::DatabaseError.value())
            }
        }
    }

    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<u64, ApiError> {
        if transactions.is_empty() {
            return Ok(0);
        }

        let Ok(mut tx) = self.pool.begin().await
        else {
            tracing::error!("insert_many: failed to begin pool transaction");
            return Err(DefaultApiError::DatabaseError.value());
        };

        let mut inserted = 0;

        for chunk in transactions.chunks(INSERT_CHUNK_SIZE) {
            let mut builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO transactions (id, title, description, price, date_of_sale, category, sold) ",
            );
            builder.push_values(chunk, |mut b, t| {
                b.push_bind(t.id.to_string())
                    .push_bind(t.title.clone())
                    .push_bind(t.description.clone())
                    .push_bind(t.price)
                    .push_bind(t.date_of_sale)
                    .push_bind(t.category.clone())
                    .push_bind(t.sold);
            });

            match builder.build().execute(&mut tx).await {
                Ok(result) => inserted += result.rows_affected(),
                Err(e) => {
                    tracing::error!("insert_many: {}", e);
                    return Err(DefaultApiError::DatabaseError.value());
                }
            }
        }

        match tx.commit().await {
            Ok(_) => Ok(inserted),
            Err(e) => {
                tracing::error!("insert_many commit: {}", e);
                Err(DefaultApiError::DatabaseError.value())
            }
        }
    }

    async fn find(
        &self,
        filter: &TransactionsFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, ApiError> {
        let mut builder = find_query(filter, skip, limit);

        match builder
            .build_query_as::<Transaction>()
            .fetch_all(&self.pool)
            .await
        {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                tracing::error!("find: {}", e);
                Err(DefaultApiError::DatabaseError.value())
            }
        }
    }

    async fn count(&self, filter: &TransactionsFilter) -> Result<i64, ApiError> {
        let mut builder = count_query(filter);

        match builder
            .build_query_as::<(i64,)>()
            .fetch_one(&self.pool)
            .await
        {
            Ok((count,)) => Ok(count),
            Err(e) => {
                tracing::error!("count: {}", e);
                Err(DefaultApiError::DatabaseError.value())
            }
        }
    }

    async fn sum_price(&self, filter: &TransactionsFilter) -> Result<f64, ApiError> {
        let mut builder = sum_price_query(filter);

        match builder
            .build_query_as::<(f64,)>()
            .fetch_one(&self.pool)
            .await
        {
            Ok((sum,)) => Ok(sum),
            Err(e) => {
                tracing::error!("sum_price: {}", e);
                Err(DefaultApiError::DatabaseError.value())
            }
        }
    }

    async fn count_by_category(
        &self,
        filter: &TransactionsFilter,
    ) -> Result<Vec<CategoryCount>, ApiError> {
        let mut builder = count_by_category_query(filter);

        match builder
            .build_query_as::<CategoryCount>()
            .fetch_all(&self.pool)
            .await
        {
            Ok(categories) => Ok(categories),
            Err(e) => {
                tracing::error!("count_by_category: {}", e);
                Err(DefaultApiError::DatabaseError.value())
            }
        }
    }
}
