use async_stream::try_stream;
use futures::{Stream, StreamExt};
use salary_analyzer::{Aggregator, LanguageAggregate, ResultSet};

use crate::api::{Result, SearchPage, VacancyProvider};

/// Lazily requests the result pages of one language, starting at page 0.
/// The stream ends after the page the provider reports as the last one,
/// or right after the first failed request.
pub fn pages<'a, P>(provider: &'a P, language: &'a str) -> impl Stream<Item = Result<SearchPage>> + 'a
where
    P: VacancyProvider + ?Sized,
{
    try_stream! {
        let mut page = 0;
        loop {
            let search_page = provider.fetch_page(language, page).await?;
            let has_more = search_page.has_more;
            yield search_page;
            if !has_more {
                break;
            }
            page += 1;
        }
    }
}

/// Aggregate the salaries of all vacancies for a language.
/// Returns `None` if none of them had a usable salary.
pub async fn aggregate_language<P>(provider: &P, language: &str) -> Result<Option<LanguageAggregate>>
where
    P: VacancyProvider + ?Sized,
{
    let mut aggregator = Aggregator::new();
    let pages = pages(provider, language);
    tokio::pin!(pages);
    while let Some(page) = pages.next().await {
        let page = page?;
        aggregator.record_found(page.found);
        for salary in &page.salaries {
            aggregator.add(salary);
        }
    }
    log::debug!(
        "processed {} vacancies for {} from {}",
        aggregator.processed(),
        language,
        provider.title()
    );
    Ok(aggregator.finish())
}

/// Query all languages one after another, the first failed request aborts the run
pub async fn collect_results<P, S>(provider: &P, languages: &[S]) -> Result<ResultSet>
where
    P: VacancyProvider + ?Sized,
    S: AsRef<str>,
{
    let mut results = ResultSet::new();
    for language in languages {
        let language = language.as_ref();
        match aggregate_language(provider, language).await? {
            Some(aggregate) => {
                log::info!(
                    "{}: {} found, {} processed, average salary {}",
                    language,
                    aggregate.vacancies_found,
                    aggregate.vacancies_processed,
                    aggregate.average_salary
                );
                results.insert(language, aggregate);
            }
            None => log::info!("{}: no vacancies with salary, skipping", language),
        }
    }
    log::info!(
        "collected results for {} languages from {}",
        results.len(),
        provider.title()
    );
    Ok(results)
}
