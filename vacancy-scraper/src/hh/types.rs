use salary_analyzer::SalaryRange;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub(crate) struct Salary {
    from: Option<u32>,
    to: Option<u32>,
    currency: Option<String>,
}

impl From<Salary> for SalaryRange {
    fn from(salary: Salary) -> Self {
        SalaryRange::new(
            salary.from.filter(|amount| *amount > 0),
            salary.to.filter(|amount| *amount > 0),
            salary.currency,
        )
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct Vacancy {
    pub(crate) id: String,
    pub(crate) salary: Option<Salary>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u32,
    pub(crate) pages: u32,
}
