use thiserror::Error;

/// Ошибки загрузки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn network(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Network or non-2xx failure (as opposed to a malformed body)
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::HttpStatus { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::HttpStatus { url, .. } | Self::Parse { url, .. } => {
                url
            }
        }
    }
}

/// Ошибки хранилища избранного
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Stored favorites are not a JSON array of ids: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}
