use serde::Deserialize;

pub static DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,

    pub seed_url: Option<String>,
}

impl Envy {
    pub fn seed_url(&self) -> &str {
        self.seed_url.as_deref().unwrap_or(DEFAULT_SEED_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_config_from_env_pairs() {
        let vars = vec![
            ("APP_ENV".to_string(), "test".to_string()),
            ("PORT".to_string(), "4000".to_string()),
            ("DATABASE_URL".to_string(), "postgres://localhost/sales".to_string()),
        ];

        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.port, Some(4000));
        assert_eq!(envy.database_max_connections, None);
        assert_eq!(envy.seed_url(), DEFAULT_SEED_URL);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let vars = vec![("APP_ENV".to_string(), "test".to_string())];

        assert!(envy::from_iter::<_, Envy>(vars).is_err());
    }
}
