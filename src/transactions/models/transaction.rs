use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::transactions::{
    dtos::seed_transaction_dto::SeedTransactionDto, util::numeric::parse_price,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub date_of_sale: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub sold: Option<bool>,
}

impl Transaction {
    /// Validates the raw seed record and assigns a fresh id.
    pub fn from_seed(dto: SeedTransactionDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;

        // validate() guarantees a finite price
        let price = parse_price(&dto.price).unwrap_or_default();

        return Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: dto.title,
            description: dto.description,
            price,
            date_of_sale: dto.date_of_sale,
            category: dto.category,
            sold: dto.sold,
        });
    }
}
