pub mod api;
pub mod hh;
pub mod pipeline;
pub mod superjob;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{Error, Result, SearchPage, VacancyProvider};
pub use hh::{HhClient, HhConfig};
pub use pipeline::{aggregate_language, collect_results, pages};
pub use superjob::{SuperJobClient, SuperJobConfig};
