use salary_analyzer::SalaryRange;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub(crate) struct Vacancy {
    pub(crate) id: u64,
    #[serde(default)]
    payment_from: Option<u32>,
    #[serde(default)]
    payment_to: Option<u32>,
}

impl Vacancy {
    /// Unspecified payments are sent either as `0` or `null`
    pub(crate) fn salary(&self) -> SalaryRange {
        SalaryRange::from_zeroed(
            self.payment_from.unwrap_or_default(),
            self.payment_to.unwrap_or_default(),
        )
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u32,
    pub(crate) more: bool,
}
