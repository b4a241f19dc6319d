use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::{
        get_month_filter_dto::GetMonthFilterDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    errors::TransactionsApiError,
    models::{
        category_count::CategoryCount, combined_data::CombinedData,
        price_range::PriceRangeCount, statistics::Statistics, transaction::Transaction,
    },
    service,
};

pub async fn initialize_database(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    match service::initialize_database(&state).await {
        Ok(_) => Ok(Json(
            json!({ "message": "Database initialized with seed data successfully" }),
        )),
        Err(_) => Err(TransactionsApiError::InitializeFailed.value()),
    }
}

pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match service::list_transactions(&dto, state.store.as_ref()).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(_) => Err(TransactionsApiError::TransactionsFailed.value()),
    }
}

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthFilterDto>,
) -> Result<Json<Statistics>, ApiError> {
    match service::get_statistics(&dto.window(), state.store.as_ref()).await {
        Ok(statistics) => Ok(Json(statistics)),
        Err(_) => Err(TransactionsApiError::StatisticsFailed.value()),
    }
}

pub async fn get_price_range_data(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthFilterDto>,
) -> Result<Json<Vec<PriceRangeCount>>, ApiError> {
    match service::get_price_range_data(&dto.window(), state.store.as_ref()).await {
        Ok(ranges) => Ok(Json(ranges)),
        Err(_) => Err(TransactionsApiError::BarChartFailed.value()),
    }
}

pub async fn get_category_data(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthFilterDto>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    match service::get_category_data(&dto.window(), state.store.as_ref()).await {
        Ok(categories) => Ok(Json(categories)),
        Err(_) => Err(TransactionsApiError::PieChartFailed.value()),
    }
}

pub async fn get_combined_data(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetMonthFilterDto>,
) -> Result<Json<CombinedData>, ApiError> {
    match service::get_combined_data(&dto.window(), state.store.as_ref()).await {
        Ok(combined) => Ok(Json(combined)),
        Err(_) => Err(TransactionsApiError::CombinedFailed.value()),
    }
}
