use async_trait::async_trait;

use crate::{
    app::models::api_error::ApiError,
    transactions::{
        models::{
            category_count::CategoryCount, price_range::PriceRange, transaction::Transaction,
        },
        util::date_window::DateWindow,
    },
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Free-text search. `price` is set only when the text itself is numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub text: String,
    pub price: Option<f64>,
}

/// Conjunction of optional predicates. An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionsFilter {
    pub search: Option<SearchFilter>,
    pub window: Option<DateWindow>,
    pub sold: Option<bool>,
    pub price_range: Option<PriceRange>,
}

impl TransactionsFilter {
    pub fn in_window(window: DateWindow) -> Self {
        Self {
            window: Some(window),
            ..Self::default()
        }
    }

    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn delete_all(&self) -> Result<u64, ApiError>;

    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<u64, ApiError>;

    async fn find(
        &self,
        filter: &TransactionsFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn count(&self, filter: &TransactionsFilter) -> Result<i64, ApiError>;

    /// Sum of `price` over matching records, 0 when nothing matches.
    async fn sum_price(&self, filter: &TransactionsFilter) -> Result<f64, ApiError>;

    async fn count_by_category(
        &self,
        filter: &TransactionsFilter,
    ) -> Result<Vec<CategoryCount>, ApiError>;
}
