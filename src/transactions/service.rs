use serde_json::Value;

use crate::{
    app::{models::api_error::ApiError, util},
    store::{SearchFilter, TransactionStore, TransactionsFilter},
    AppState,
};

use super::{
    dtos::{
        get_transactions_filter_dto::GetTransactionsFilterDto,
        seed_transaction_dto::SeedTransactionDto,
    },
    models::{
        category_count::CategoryCount,
        combined_data::CombinedData,
        price_range::{PriceRangeCount, PRICE_RANGES},
        statistics::Statistics,
        transaction::Transaction,
    },
    util::{date_window::DateWindow, numeric::parse_search_number},
};

pub async fn initialize_database(state: &AppState) -> Result<u64, ApiError> {
    let url = state.envy.seed_url();
    let records = util::reqwest::get_json::<Vec<Value>>(url, &state.client).await?;

    tracing::info!("fetched {} seed records from {}", records.len(), url);

    seed_store(records, state.store.as_ref()).await
}

fn seed_transaction(index: usize, record: Value) -> Option<Transaction> {
    let dto = match serde_json::from_value::<SeedTransactionDto>(record) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!("seed record {} discarded: {}", index, e);
            return None;
        }
    };

    match Transaction::from_seed(dto) {
        Ok(transaction) => Some(transaction),
        Err(e) => {
            tracing::warn!("seed record {} discarded: {}", index, e);
            None
        }
    }
}

/// Replaces the store contents with the seed records that pass validation.
/// Each record is judged on its own. Not atomic: a failure after the delete
/// leaves the store empty.
pub async fn seed_store(
    records: Vec<Value>,
    store: &dyn TransactionStore,
) -> Result<u64, ApiError> {
    let deleted = store.delete_all().await?;
    tracing::debug!("deleted {} transactions", deleted);

    let total = records.len();
    let transactions: Vec<Transaction> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| seed_transaction(index, record))
        .collect();

    let discarded = total - transactions.len();
    let inserted = store.insert_many(transactions).await?;

    tracing::info!("seeded {} transactions, discarded {}", inserted, discarded);

    Ok(inserted)
}

pub fn search_filter(dto: &GetTransactionsFilterDto) -> TransactionsFilter {
    let search = dto.search().map(|text| SearchFilter {
        text: text.to_string(),
        price: parse_search_number(text),
    });

    TransactionsFilter {
        search,
        ..TransactionsFilter::default()
    }
}

pub async fn list_transactions(
    dto: &GetTransactionsFilterDto,
    store: &dyn TransactionStore,
) -> Result<Vec<Transaction>, ApiError> {
    store
        .find(&search_filter(dto), dto.skip(), dto.per_page())
        .await
}

pub async fn get_statistics(
    window: &DateWindow,
    store: &dyn TransactionStore,
) -> Result<Statistics, ApiError> {
    let sold = TransactionsFilter::in_window(*window).sold(true);
    let not_sold = TransactionsFilter::in_window(*window).sold(false);

    let (sold_items, not_sold_items, total_sale_amount) = tokio::try_join!(
        store.count(&sold),
        store.count(&not_sold),
        store.sum_price(&sold)
    )?;

    Ok(Statistics {
        total_sale_amount,
        sold_items,
        not_sold_items,
    })
}

pub async fn get_price_range_data(
    window: &DateWindow,
    store: &dyn TransactionStore,
) -> Result<Vec<PriceRangeCount>, ApiError> {
    let base = TransactionsFilter::in_window(*window);
    let base = &base;

    let futures = PRICE_RANGES.iter().map(|range| async move {
        let count = store.count(&base.clone().price_range(*range)).await?;

        Ok::<_, ApiError>(PriceRangeCount {
            range: range.range.to_string(),
            count,
        })
    });

    futures::future::try_join_all(futures).await
}

pub async fn get_category_data(
    window: &DateWindow,
    store: &dyn TransactionStore,
) -> Result<Vec<CategoryCount>, ApiError> {
    store
        .count_by_category(&TransactionsFilter::in_window(*window))
        .await
}

pub async fn get_combined_data(
    window: &DateWindow,
    store: &dyn TransactionStore,
) -> Result<CombinedData, ApiError> {
    let (statistics, bar_chart_data, pie_chart_data) = tokio::try_join!(
        get_statistics(window, store),
        get_price_range_data(window, store),
        get_category_data(window, store)
    )?;

    Ok(CombinedData {
        statistics,
        bar_chart_data,
        pie_chart_data,
    })
}
