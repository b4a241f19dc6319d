use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    InitializeFailed,
    TransactionsFailed,
    StatisticsFailed,
    BarChartFailed,
    PieChartFailed,
    CombinedFailed,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        let message = match *self {
            Self::InitializeFailed => "Error initializing database",
            Self::TransactionsFailed => "Error fetching transactions",
            Self::StatisticsFailed => "Error fetching statistics",
            Self::BarChartFailed => "Error fetching bar chart data",
            Self::PieChartFailed => "Error fetching pie chart data",
            Self::CombinedFailed => "Error fetching combined data",
        };

        ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}
