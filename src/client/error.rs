//! Error type shared by every CocktailDB operation.
//!
//! "Nothing matched" is not an error: it is reported as [`Matches::Empty`] or an
//! empty list. Every variant here means the operation failed and the component's
//! previously stored result is unchanged.
//!
//! [`Matches::Empty`]: crate::client::types::Matches::Empty

#[derive(thiserror::Error, Debug)]
pub enum CocktailError {
    /// The body was not JSON, or not the JSON shape the endpoint promises.
    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Invalid option or a call made out of the required order.
    #[error("Contract violation: {0}")]
    ContractViolation(String),
    #[error("Failed to reach TheCocktailDB: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TheCocktailDB answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl CocktailError {
    pub fn contract(message: impl Into<String>) -> Self {
        CocktailError::ContractViolation(message.into())
    }

    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CocktailError::ContractViolation(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, CocktailError::MalformedResponse { .. })
    }
}

pub type Result<T> = std::result::Result<T, CocktailError>;
