use serde::{Deserialize, Serialize};

use super::{category_count::CategoryCount, price_range::PriceRangeCount, statistics::Statistics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    pub statistics: Statistics,
    pub bar_chart_data: Vec<PriceRangeCount>,
    pub pie_chart_data: Vec<CategoryCount>,
}
