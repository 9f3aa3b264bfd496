use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_LIMIT: u32 = 151;

/// Настройки клиента каталога
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
        }
    }
}

impl CatalogConfig {
    /// Build a full API URL from a path like "/pokemon"
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.limit, 151);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{ "limit": 20 }"#).unwrap();
        assert_eq!(config.limit, 20);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = CatalogConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            limit: 3,
        };
        assert_eq!(config.endpoint("/type"), "http://localhost:8080/api/type");
    }
}
