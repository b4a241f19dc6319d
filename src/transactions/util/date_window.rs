use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Inclusive `[YYYY-MM-01, YYYY-MM-31]` range, both bounds at midnight UTC.
///
/// The end is always "day 31" of the month. Months with fewer days roll the
/// end forward, so `2022-02` ends on `2022-03-03`. A month that fails to parse
/// produces a window without bounds, which matches no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn from_month(month: Option<&str>) -> Self {
        let Some(month) = month
        else {
            return Self::invalid();
        };

        let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        else {
            return Self::invalid();
        };

        let Some(start) = first.and_hms_opt(0, 0, 0)
        else {
            return Self::invalid();
        };

        let start = Utc.from_utc_datetime(&start);

        Self {
            start: Some(start),
            end: Some(start + Duration::days(30)),
        }
    }

    pub fn invalid() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        match self.bounds() {
            Some((start, end)) => *date >= start && *date <= end,
            None => false,
        }
    }
}
