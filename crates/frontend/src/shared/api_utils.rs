//! PokeAPI access for the browser build.
//!
//! Provides the catalog configuration and the `gloo-net` transport the
//! catalog client fetches through.

use async_trait::async_trait;
use contracts::domain::a001_pokemon::catalog::{CatalogClient, CatalogTransport};
use contracts::shared::config::CatalogConfig;
use contracts::shared::error::CatalogError;
use gloo_net::http::Request;

/// Read the catalog configuration
///
/// Starts from the embedded defaults (PokeAPI, 151 entries) and applies
/// overrides from the page query string.
///
/// # Example
/// ```text
/// http://localhost:8080/?limit=30
/// http://localhost:8080/?base_url=http://localhost:9000/api/v2
/// ```
pub fn catalog_config() -> CatalogConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    config_from_query(&search)
}

fn config_from_query(search: &str) -> CatalogConfig {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return CatalogConfig::default();
    }
    match serde_qs::from_str::<CatalogConfig>(query) {
        Ok(config) => {
            log::info!("Catalog config from query: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring query string '{}': {}", query, e);
            CatalogConfig::default()
        }
    }
}

/// Build a catalog client over `gloo-net`
pub fn catalog_client(config: CatalogConfig) -> CatalogClient<GlooTransport> {
    CatalogClient::new(GlooTransport, config)
}

/// `fetch`-based transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl CatalogTransport for GlooTransport {
    async fn get_text(&self, url: &str) -> Result<String, CatalogError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::network(url, e))?;

        if !response.ok() {
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::network(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(config_from_query(""), CatalogConfig::default());
        assert_eq!(config_from_query("?"), CatalogConfig::default());
    }

    #[test]
    fn test_query_overrides() {
        let config = config_from_query("?limit=30");
        assert_eq!(config.limit, 30);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_bad_query_falls_back() {
        assert_eq!(config_from_query("?limit=lots"), CatalogConfig::default());
    }
}
