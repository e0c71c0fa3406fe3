use thiserror::Error;

/// Hosted portfolio function the site was built against.
pub const DEFAULT_ENDPOINT: &str =
    "https://functions.poehali.dev/f97add4b-c311-47d0-b1a0-ded0bd2855ed";
/// Endpoint value that selects the in-memory store.
pub const MEMORY_ENDPOINT: &str = "memory";
pub const DEFAULT_IMAGE_WARN_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("store endpoint must not be empty")]
    EmptyEndpoint,
    #[error("invalid image warning threshold: {0:?}")]
    InvalidThreshold(String),
}

/// Where the gallery's items live and how uploads are vetted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub endpoint: String,
    pub image_warn_bytes: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_warn_bytes: DEFAULT_IMAGE_WARN_BYTES,
        }
    }
}

impl StoreConfig {
    /// Reads `PORTFOLIO_ENDPOINT` and `PORTFOLIO_IMAGE_WARN_BYTES` as they were
    /// at compile time, so the server and the wasm bundle agree.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_ENDPOINT"),
            option_env!("PORTFOLIO_IMAGE_WARN_BYTES"),
        )
        .unwrap_or_else(|e| {
            log::warn!("invalid store configuration ({e}), falling back to defaults");
            Self::default()
        })
    }

    pub fn from_values(
        endpoint: Option<&str>,
        image_warn_bytes: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::EmptyEndpoint);
            }
            config.endpoint = endpoint.to_string();
        }
        if let Some(raw) = image_warn_bytes {
            config.image_warn_bytes = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidThreshold(raw.to_string()))?;
        }
        Ok(config)
    }

    pub fn uses_memory_store(&self) -> bool {
        self.endpoint.eq_ignore_ascii_case(MEMORY_ENDPOINT)
    }
}
