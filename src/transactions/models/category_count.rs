use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub count: i64,
}
