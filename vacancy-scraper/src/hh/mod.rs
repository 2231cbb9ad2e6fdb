pub(crate) mod types;

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client};
use salary_analyzer::SalaryRange;

use crate::api::{get_json, Result, SearchPage, VacancyProvider};
use types::SearchResponse;

pub const BASE_URL: &str = "https://api.hh.ru/vacancies/";
/// HeadHunter area id of Moscow
pub const AREA: u32 = 1;
pub const SEARCH_PERIOD_DAYS: u32 = 30;
pub const RESULTS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone)]
pub struct HhConfig {
    /// HeadHunter rejects requests without a user agent identifying the application
    pub user_agent: String,
}

impl Default for HhConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("vacancy-salaries/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub struct HhClient {
    client: Client,
    base_url: String,
    config: HhConfig,
}

impl HhClient {
    pub fn new(config: HhConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: HhConfig, client: Client) -> Self {
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

fn search_page(response: SearchResponse, page: u32) -> SearchPage {
    let salaries = response
        .items
        .into_iter()
        .filter_map(|vacancy| match vacancy.salary {
            Some(salary) => Some(SalaryRange::from(salary)),
            None => {
                log::trace!("vacancy {} has no salary", vacancy.id);
                None
            }
        })
        .collect();
    SearchPage {
        found: response.found,
        salaries,
        has_more: page + 1 < response.pages,
    }
}

#[async_trait]
impl VacancyProvider for HhClient {
    fn title(&self) -> &str {
        "HH Moscow"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SearchPage> {
        log::debug!(
            "requesting vacancies from hh, page: {}, language: {}",
            page,
            language
        );
        let query = [
            ("text", language.to_owned()),
            ("area", AREA.to_string()),
            ("period", SEARCH_PERIOD_DAYS.to_string()),
            ("page", page.to_string()),
            ("per_page", RESULTS_PER_PAGE.to_string()),
        ];
        let request = self
            .client
            .get(&self.base_url)
            .header(USER_AGENT, &self.config.user_agent)
            .query(&query);
        let response: SearchResponse = get_json(request).await?;
        Ok(search_page(response, page))
    }
}
