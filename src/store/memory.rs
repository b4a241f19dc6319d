use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    transactions::models::{category_count::CategoryCount, transaction::Transaction},
};

use super::{TransactionStore, TransactionsFilter};

/// Insertion-ordered store evaluating filters in process.
#[derive(Default)]
pub struct MemoryStore {
    pub transactions: RwLock<Vec<Transaction>>,
    pub failing: bool,
}

impl MemoryStore {
    pub fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            transactions: RwLock::new(Vec::new()),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.failing {
            true => Err(DefaultApiError::DatabaseError.value()),
            false => Ok(()),
        }
    }
}

fn contains_ignore_case(field: &Option<String>, needle: &str) -> bool {
    match field {
        Some(value) => value.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

pub fn matches(filter: &TransactionsFilter, transaction: &Transaction) -> bool {
    if let Some(search) = &filter.search {
        let by_text = contains_ignore_case(&transaction.title, &search.text)
            || contains_ignore_case(&transaction.description, &search.text);
        let by_price = search.price == Some(transaction.price);

        if !by_text && !by_price {
            return false;
        }
    }

    if let Some(window) = &filter.window {
        match &transaction.date_of_sale {
            Some(date) if window.contains(date) => {}
            _ => return false,
        }
    }

    if let Some(sold) = filter.sold {
        if transaction.sold != Some(sold) {
            return false;
        }
    }

    if let Some(range) = &filter.price_range {
        if !range.contains(transaction.price) {
            return false;
        }
    }

    true
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn delete_all(&self) -> Result<u64, ApiError> {
        self.check()?;
        let mut transactions = self.transactions.write().await;
        let deleted = transactions.len() as u64;
        transactions.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<u64, ApiError> {
        self.check()?;
        let inserted = transactions.len() as u64;
        self.transactions.write().await.extend(transactions);
        Ok(inserted)
    }

    async fn find(
        &self,
        filter: &TransactionsFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.check()?;
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| matches(filter, t))
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &TransactionsFilter) -> Result<i64, ApiError> {
        self.check()?;
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| matches(filter, t))
            .count() as i64)
    }

    async fn sum_price(&self, filter: &TransactionsFilter) -> Result<f64, ApiError> {
        self.check()?;
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| matches(filter, t))
            .fold(0.0, |sum, t| sum + t.price))
    }

    async fn count_by_category(
        &self,
        filter: &TransactionsFilter,
    ) -> Result<Vec<CategoryCount>, ApiError> {
        self.check()?;
        let mut counts: HashMap<Option<String>, i64> = HashMap::new();

        for transaction in self.transactions.read().await.iter() {
            if matches(filter, transaction) {
                *counts.entry(transaction.category.clone()).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(id, count)| CategoryCount { id, count })
            .collect())
    }
}
