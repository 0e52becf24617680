use serde::{Deserialize, Serialize};

/// Error body returned by the service manager.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrResponse {
    pub error: String,
    pub description: Option<String>,
}

impl ErrResponse {
    pub fn new(error: String, description: Option<String>) -> ErrResponse {
        ErrResponse {
            error,
            description,
        }
    }
}

impl std::fmt::Display for ErrResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description {
            Some(ref description) => write!(f, "{}: {}", self.error, description),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for ErrResponse {}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    // NOTE: must place error first
    // otherwise serde will match an error body against a lenient T
    Err(ErrResponse),
    Ok(T),
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ErrResponse> {
        match self {
            ApiResponse::Ok(data) => Ok(data),
            ApiResponse::Err(err) => Err(err),
        }
    }
}
