use std::time::Duration;

use async_trait::async_trait;

use crate::spa::{
    error::SpaError,
    routes::PageSource,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, source: &PageSource) -> Result<String, SpaError>;
}

/// Resolves remote page content over HTTP, or from disk when the source
/// is a plain path.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self, SpaError> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, source: &PageSource) -> Result<String, SpaError> {
        match source {
            PageSource::Inline => Err(SpaError::Fetch(
                "inline pages are never fetched".to_string(),
            )),
            PageSource::Remote(location) => {
                if location.starts_with("http://") || location.starts_with("https://") {
                    let body = self
                        .client
                        .get(location)
                        .send()
                        .await?
                        .error_for_status()?
                        .text()
                        .await?;
                    Ok(body)
                } else {
                    Ok(tokio::fs::read_to_string(location).await?)
                }
            }
        }
    }
}
