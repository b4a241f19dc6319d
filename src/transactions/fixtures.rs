use chrono::{DateTime, Utc};

use super::models::transaction::Transaction;

fn transaction(
    id: &str,
    title: &str,
    description: &str,
    price: f64,
    date_of_sale: Option<&str>,
    category: Option<&str>,
    sold: bool,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        price,
        date_of_sale: date_of_sale.map(|d| d.parse::<DateTime<Utc>>().unwrap()),
        category: category.map(|c| c.to_string()),
        sold: Some(sold),
    }
}

/// October 2021 holds t1, t2, t4 and t9. t5 falls after the midnight end of
/// the window. t7 lands in the February 2022 window through the day-31 rollover.
pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("t1", "Mens Casual Slim Fit Shirt", "Soft cotton", 15.99, Some("2021-10-05T09:00:00Z"), Some("men's clothing"), true),
        transaction("t2", "Solid Gold Petite Micropave", "Satisfaction guaranteed", 168.0, Some("2021-10-12T12:30:00Z"), Some("jewelery"), false),
        transaction("t3", "WD 4TB Gaming Drive", "Expand your PS4 gaming experience", 114.0, Some("2021-11-03T18:00:00Z"), Some("electronics"), true),
        transaction("t4", "Samsung 49-Inch Monitor", "Super ultrawide screen", 999.99, Some("2021-10-31T00:00:00Z"), Some("electronics"), true),
        transaction("t5", "Rain Jacket Women", "Lightweight windbreaker", 39.99, Some("2021-10-31T10:00:00Z"), Some("women's clothing"), false),
        transaction("t6", "Opna Women's Short Sleeve", "Moisture wicking", 7.95, Some("2022-02-15T08:00:00Z"), Some("women's clothing"), false),
        transaction("t7", "DANVOUY Womens T Shirt", "95% cotton", 44.0, Some("2022-03-02T08:00:00Z"), Some("women's clothing"), true),
        transaction("t8", "Undated Item", "No sale date", 250.5, None, None, true),
        transaction("t9", "Acrylic Stand", "Display stand", 100.5, Some("2021-10-20T10:00:00Z"), None, false),
        transaction("t10", "Fjallraven Backpack", "Fits 15 inch laptops", 109.95, Some("2021-12-10T10:00:00Z"), Some("men's clothing"), false),
    ]
}
