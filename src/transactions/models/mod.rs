pub mod category_count;
pub mod combined_data;
pub mod price_range;
pub mod statistics;
pub mod transaction;
