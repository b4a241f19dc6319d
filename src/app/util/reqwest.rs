use serde::de::DeserializeOwned;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    client: &reqwest::Client,
) -> Result<T, ApiError> {
    let result = client.get(url).send().await;

    match result {
        Ok(res) => match res.error_for_status() {
            Ok(res) => match res.json::<T>().await {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::error!("get_json decode {}: {}", url, e);
                    Err(DefaultApiError::UpstreamError.value())
                }
            },
            Err(e) => {
                tracing::error!("get_json status {}: {}", url, e);
                Err(DefaultApiError::UpstreamError.value())
            }
        },
        Err(e) => {
            tracing::error!("get_json {}: {:?}", url, e);
            Err(DefaultApiError::UpstreamError.value())
        }
    }
}
