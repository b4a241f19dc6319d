use serde::Deserialize;

use crate::transactions::{util::numeric::parse_positive, DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Raw `/transactions` query. Values stay strings so malformed input falls
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsFilterDto {
    pub search: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl GetTransactionsFilterDto {
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn page(&self) -> i64 {
        parse_positive(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn per_page(&self) -> i64 {
        parse_positive(self.per_page.as_deref(), DEFAULT_PER_PAGE)
    }

    pub fn skip(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent_or_malformed() {
        let dto = GetTransactionsFilterDto::default();
        assert_eq!((dto.page(), dto.per_page(), dto.skip()), (1, 10, 0));
        assert_eq!(dto.search(), None);

        let dto = GetTransactionsFilterDto {
            search: Some(String::new()),
            page: Some("two".to_string()),
            per_page: Some("0".to_string()),
        };
        assert_eq!((dto.page(), dto.per_page(), dto.skip()), (1, 10, 0));
        assert_eq!(dto.search(), None);
    }

    #[test]
    fn skip_is_offset_of_page() {
        let dto = GetTransactionsFilterDto {
            search: Some("bag".to_string()),
            page: Some("3".to_string()),
            per_page: Some("5".to_string()),
        };

        assert_eq!(dto.skip(), 10);
        assert_eq!(dto.search(), Some("bag"));
    }
}
