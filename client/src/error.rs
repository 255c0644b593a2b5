use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Pokemon '{0}' not found")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed catalog data: {0}")]
    Decode(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
