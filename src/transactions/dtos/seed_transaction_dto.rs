use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::transactions::util::{lenient, numeric::parse_price};

/// One record of the upstream seed dataset. Extra upstream fields are ignored
/// and fields other than `price` are cast leniently.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedTransactionDto {
    #[serde(default, deserialize_with = "lenient::string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_none")]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_price"))]
    pub price: Value,
    #[serde(default, deserialize_with = "lenient::date_time_or_none")]
    pub date_of_sale: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::string_or_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::bool_or_none")]
    pub sold: Option<bool>,
}

fn validate_price(value: &Value) -> Result<(), ValidationError> {
    if parse_price(value).is_some() {
        return Ok(());
    }

    let shown = match value {
        Value::String(s) => s.to_string(),
        other => other.to_string(),
    };

    let mut error = ValidationError::new("price");
    error.message = Some(Cow::from(format!("{} is not a valid number!", shown)));

    return Err(error);
}
