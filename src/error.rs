use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Fact fetch failed: {0}")]
    Fetch(String),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl BlogError {
    pub fn author_not_found(id: i64) -> Self {
        BlogError::NotFound {
            entity: "Author",
            id,
        }
    }

    /// Machine-readable code reported in the `extensions` of a GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::NotFound { .. } => "NOT_FOUND",
            BlogError::Fetch(_) => "FETCH_FAILED",
            BlogError::Store(_) => "STORE_ERROR",
            BlogError::Config(_) | BlogError::Toml(_) => "CONFIG_ERROR",
            BlogError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<reqwest::Error> for BlogError {
    fn from(e: reqwest::Error) -> Self {
        BlogError::Fetch(e.to_string())
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
