pub(crate) mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{get_json, Result, SearchPage, VacancyProvider};
use types::SearchResponse;

pub const BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const TOWN: &str = "Москва";
/// Catalogue id of "Development, programming"
pub const CATALOGUE_ID: u32 = 48;
pub const RESULTS_PER_PAGE: u32 = 100;

const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    /// Secret key of the registered SuperJob application
    pub app_id: String,
}

impl SuperJobConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }
}

pub struct SuperJobClient {
    client: Client,
    base_url: String,
    config: SuperJobConfig,
}

impl SuperJobClient {
    pub fn new(config: SuperJobConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: SuperJobConfig, client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_owned(),
            config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn search_page(response: SearchResponse) -> SearchPage {
    if response.total == 0 {
        return SearchPage::default();
    }
    let salaries = response
        .objects
        .iter()
        .map(|vacancy| {
            log::trace!("superjob vacancy {}", vacancy.id);
            vacancy.salary()
        })
        .collect();
    SearchPage {
        found: response.total,
        salaries,
        has_more: response.more,
    }
}

#[async_trait]
impl VacancyProvider for SuperJobClient {
    fn title(&self) -> &str {
        "SuperJob Moscow"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SearchPage> {
        log::debug!(
            "requesting vacancies from superjob, page: {}, language: {}",
            page,
            language
        );
        let query = [
            ("keyword", language.to_owned()),
            ("town", TOWN.to_owned()),
            ("catalogues", CATALOGUE_ID.to_string()),
            ("page", page.to_string()),
            ("count", RESULTS_PER_PAGE.to_string()),
        ];
        let request = self
            .client
            .get(&self.base_url)
            .header(APP_ID_HEADER, &self.config.app_id)
            .query(&query);
        let response: SearchResponse = get_json(request).await?;
        Ok(search_page(response))
    }
}
