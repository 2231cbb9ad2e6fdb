mod config;
mod scrape;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use thiserror::Error;

use config::Config;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable '{0}' not set")]
    MissingEnv(&'static str),
    #[error("Scraping failed: '{0}'")]
    Scrape(#[from] vacancy_scraper::Error),
    #[error("Failed to serialize results: '{0}'")]
    Serialize(#[from] serde_json::Error),
}

/// Average salaries of programming languages in Moscow, from HeadHunter and SuperJob
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job sites to query, all of them if omitted
    #[clap(long, value_enum)]
    site: Vec<Target>,

    /// Print the results as json instead of tables
    #[clap(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Hh,
    Superjob,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let targets = if args.site.is_empty() {
        Target::value_variants().to_vec()
    } else {
        args.site
    };
    let config = Config::from_env();
    let providers = scrape::providers(&targets, &config).map_err(|e| {
        log::error!("{}", e);
        e
    })?;
    for provider in &providers {
        scrape::scrape(provider.as_ref(), args.json).await?;
    }
    Ok(())
}
