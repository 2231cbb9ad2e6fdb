use salary_analyzer::{ResultSet, Table};
use serde::Serialize;
use vacancy_scraper::{collect_results, HhClient, SuperJobClient, VacancyProvider};

use crate::config::Config;
use crate::{Result, Target};

pub const LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "C++",
    "TypeScript",
    "Swift",
    "Scala",
    "Objective-C",
    "C#",
    "PHP",
    "Ruby",
];

#[derive(Serialize)]
struct Report<'a> {
    title: &'a str,
    results: &'a ResultSet,
}

/// Builds the clients for all targets, failing before any request is sent
pub fn providers(targets: &[Target], config: &Config) -> Result<Vec<Box<dyn VacancyProvider>>> {
    targets
        .iter()
        .map(|target| -> Result<Box<dyn VacancyProvider>> {
            let provider: Box<dyn VacancyProvider> = match target {
                Target::Hh => Box::new(HhClient::new(config.hh.clone())),
                Target::Superjob => Box::new(SuperJobClient::new(config.superjob()?.clone())),
            };
            Ok(provider)
        })
        .collect()
}

pub async fn scrape(provider: &dyn VacancyProvider, json: bool) -> Result<()> {
    log::info!("Collecting salaries from {}", provider.title());
    let results = collect_results(provider, &LANGUAGES).await?;
    if json {
        let report = Report {
            title: provider.title(),
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", Table::new(Some(provider.title().to_owned()), &results));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn test_providers_in_target_order() {
        let config = Config::from_env_vars(&[("SUPERJOB_SECURITY_CODE", "secret")]);
        let providers =
            providers(&[Target::Superjob, Target::Hh], &config).expect("Failed to build providers");
        let titles = providers.iter().map(|p| p.title()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["SuperJob Moscow", "HH Moscow"]);
    }

    #[test]
    fn test_missing_credential_fails_before_requests() {
        let config = Config::from_env_vars(&[]);
        assert!(providers(&[Target::Hh], &config).is_ok());
        let result = providers(&[Target::Hh, Target::Superjob], &config);
        assert!(matches!(result, Err(Error::MissingEnv(_))));
    }
}
