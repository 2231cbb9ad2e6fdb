use crate::estimator::estimate;
use crate::models::{LanguageAggregate, SalaryRange};

/// Collects salary estimates of one language across all result pages
#[derive(Debug, Default)]
pub struct Aggregator {
    found: Option<u32>,
    estimates: Vec<f64>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the total reported by the provider; only the first report counts
    pub fn record_found(&mut self, found: u32) {
        self.found.get_or_insert(found);
    }

    /// Adds a listing's salary, returns the estimate if one could be made
    pub fn add(&mut self, range: &SalaryRange) -> Option<f64> {
        let estimate = estimate(range)?;
        self.estimates.push(estimate);
        Some(estimate)
    }

    pub fn processed(&self) -> usize {
        self.estimates.len()
    }

    /// Produces the aggregate, or `None` if no listing had a usable salary
    pub fn finish(self) -> Option<LanguageAggregate> {
        if self.estimates.is_empty() {
            return None;
        }
        let processed = u32::try_from(self.estimates.len()).unwrap_or(u32::MAX);
        let mean = self.estimates.iter().sum::<f64>() / self.estimates.len() as f64;
        let mut found = self.found.unwrap_or_default();
        if found < processed {
            log::warn!(
                "provider reported {} vacancies but {} were processed",
                found,
                processed
            );
            found = processed;
        }
        Some(LanguageAggregate::new(found, processed, mean.trunc() as u64))
    }
}
