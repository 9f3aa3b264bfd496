//! Remote catalog client.
//!
//! One list request followed by one detail request per entry, all in flight at
//! once. The join is all-or-nothing: the first failed request fails the load.

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;

use super::aggregate::{NamedResource, NamedResourceList, Pokemon, PokemonDto};
use crate::shared::config::CatalogConfig;
use crate::shared::error::CatalogError;

/// HTTP seam. Implementations return the response body of a successful GET
/// and map transport failures and non-2xx statuses to [`CatalogError`].
#[async_trait(?Send)]
pub trait CatalogTransport {
    async fn get_text(&self, url: &str) -> Result<String, CatalogError>;
}

pub struct CatalogClient<T: CatalogTransport> {
    transport: T,
    config: CatalogConfig,
}

impl<T: CatalogTransport> CatalogClient<T> {
    pub fn new(transport: T, config: CatalogConfig) -> Self {
        Self { transport, config }
    }

    /// Loads the configured number of records.
    pub async fn load(&self) -> Result<Vec<Pokemon>, CatalogError> {
        self.load_catalog(self.config.limit).await
    }

    /// Records come back in list order, whatever order the detail responses
    /// settle in.
    pub async fn load_catalog(&self, limit: u32) -> Result<Vec<Pokemon>, CatalogError> {
        let list_url = format!("{}?limit={}", self.config.endpoint("/pokemon"), limit);
        let list: NamedResourceList = self.get_json(&list_url).await?;
        log::debug!("Catalog list returned {} entries", list.results.len());

        let details = list
            .results
            .iter()
            .map(|entry| self.get_json::<PokemonDto>(&entry.url));
        let dtos = try_join_all(details).await?;

        let records: Vec<Pokemon> = dtos.into_iter().map(Pokemon::from).collect();
        log::info!("Loaded {} Pokémon", records.len());
        Ok(records)
    }

    /// `GET {base}/type`, used for the category menu only.
    pub async fn load_types(&self) -> Result<Vec<NamedResource>, CatalogError> {
        self.load_named_list("/type").await
    }

    /// `GET {base}/region`, display only.
    pub async fn load_regions(&self) -> Result<Vec<NamedResource>, CatalogError> {
        self.load_named_list("/region").await
    }

    async fn load_named_list(&self, path: &str) -> Result<Vec<NamedResource>, CatalogError> {
        let list: NamedResourceList = self.get_json(&self.config.endpoint(path)).await?;
        Ok(list.results)
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, CatalogError> {
        let body = self.transport.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
