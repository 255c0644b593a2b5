use std::time::Duration;

/// Where and how the PokeAPI catalog fetches creature data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    /// Moves kept per creature
    pub move_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout: Duration::from_secs(30),
            move_limit: 10,
        }
    }
}

impl CatalogConfig {
    pub const BASE_URL_VAR: &'static str = "DUEL_POKEAPI_URL";
    pub const TIMEOUT_VAR: &'static str = "DUEL_POKEAPI_TIMEOUT_SECS";
    pub const MOVE_LIMIT_VAR: &'static str = "DUEL_MOVE_LIMIT";

    /// Defaults overridden by any `DUEL_*` variables that are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    ///
    /// Values that fail to parse keep the default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(Self::BASE_URL_VAR) {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                tracing::warn!(var = Self::BASE_URL_VAR, "Empty value, using default");
            } else {
                config.base_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(Self::TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(var = Self::TIMEOUT_VAR, value = %raw, "Invalid timeout, using default"),
            }
        }

        if let Some(raw) = lookup(Self::MOVE_LIMIT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.move_limit = limit,
                Err(e) => tracing::warn!(
                    var = Self::MOVE_LIMIT_VAR,
                    value = %raw,
                    error = %e,
                    "Invalid move limit, using default"
                ),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_move_limit(mut self, move_limit: usize) -> Self {
        self.move_limit = move_limit;
        self
    }

    /// URL of one creature resource
    pub fn creature_url(&self, key: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, key)
    }
}
