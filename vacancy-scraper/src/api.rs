use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use salary_analyzer::SalaryRange;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' failed with status {status}")]
    RequestNotOk { url: String, status: StatusCode },
}

/// One page of search results, reduced to what the salary statistics need
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    /// Total number of vacancies the provider reports for the query
    pub found: u32,
    pub salaries: Vec<SalaryRange>,
    /// Whether the provider has a page after this one
    pub has_more: bool,
}

/// A job-listing service that can be searched page by page
#[async_trait]
pub trait VacancyProvider {
    /// Name shown as the title of the provider's summary table
    fn title(&self) -> &str;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SearchPage>;
}

/// Sends the request and decodes the json body, failing on any non-success status
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let resp = request.send().await?;
    let status = resp.status();
    let url = resp.url().to_string();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "request to {} not successful, status code: {}, error resp body: {:?}",
            url,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk { url, status });
    }
    log::debug!("successfully retrieved results from {}", url);
    Ok(resp.json().await?)
}
