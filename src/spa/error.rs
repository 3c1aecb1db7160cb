use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpaError {
    #[error("failed to fetch page: {0}")]
    Fetch(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
