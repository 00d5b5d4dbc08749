use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Backend responded with status {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RepositoryError::ConnectionError(format!("Request timed out: {err}"));
        }
        if err.is_connect() || err.is_request() {
            return RepositoryError::ConnectionError(err.to_string());
        }
        if err.is_decode() {
            return RepositoryError::MalformedResponse(err.to_string());
        }
        if let Some(status) = err.status() {
            return match status.as_u16() {
                404 => RepositoryError::NotFound,
                code => RepositoryError::UnexpectedStatus(code),
            };
        }
        RepositoryError::Unexpected(format!("Unexpected http error: {err}"))
    }
}
