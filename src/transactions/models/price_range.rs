use serde::{Deserialize, Serialize};

/// One histogram bucket. `min` is inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub range: &'static str,
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price < self.max
    }
}

// Lower bounds after the first bucket start at x01, so prices in [100, 101),
// [200, 201) and so on fall into no bucket.
pub static PRICE_RANGES: [PriceRange; 10] = [
    PriceRange { range: "0-100", min: 0.0, max: 100.0 },
    PriceRange { range: "101-200", min: 101.0, max: 200.0 },
    PriceRange { range: "201-300", min: 201.0, max: 300.0 },
    PriceRange { range: "301-400", min: 301.0, max: 400.0 },
    PriceRange { range: "401-500", min: 401.0, max: 500.0 },
    PriceRange { range: "501-600", min: 501.0, max: 600.0 },
    PriceRange { range: "601-700", min: 601.0, max: 700.0 },
    PriceRange { range: "701-800", min: 701.0, max: 800.0 },
    PriceRange { range: "801-900", min: 801.0, max: 900.0 },
    PriceRange { range: "901-above", min: 901.0, max: f64::INFINITY },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_table_keeps_the_x01_lower_bounds() {
        assert_eq!(PRICE_RANGES.len(), 10);
        assert_eq!(PRICE_RANGES[0].min, 0.0);
        assert_eq!(PRICE_RANGES[0].max, 100.0);
        for (i, range) in PRICE_RANGES.iter().enumerate().skip(1) {
            assert_eq!(range.min, (i * 100 + 1) as f64);
        }
        assert!(PRICE_RANGES[9].max.is_infinite());
    }

    #[test]
    fn upper_bound_is_exclusive_and_gaps_match_nothing() {
        let matches = |price: f64| PRICE_RANGES.iter().filter(|r| r.contains(price)).count();

        assert_eq!(matches(0.0), 1);
        assert_eq!(matches(99.99), 1);
        assert_eq!(matches(100.0), 0);
        assert_eq!(matches(100.5), 0);
        assert_eq!(matches(101.0), 1);
        assert_eq!(matches(900.0), 0);
        assert_eq!(matches(901.0), 1);
        assert_eq!(matches(1_000_000.0), 1);
        assert_eq!(matches(-1.0), 0);
    }
}
