use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Salary range disclosed by a single listing.
/// A bound of `None` means the listing did not specify it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub from: Option<u32>,
    pub to: Option<u32>,
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(from: Option<u32>, to: Option<u32>, currency: Option<String>) -> Self {
        Self { from, to, currency }
    }

    /// Builds a range from providers that encode a missing bound as `0`
    pub fn from_zeroed(from: u32, to: u32) -> Self {
        Self {
            from: Some(from).filter(|amount| *amount > 0),
            to: Some(to).filter(|amount| *amount > 0),
            currency: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageAggregate {
    pub vacancies_found: u32,
    pub vacancies_processed: u32,
    pub average_salary: u64,
}

impl LanguageAggregate {
    pub fn new(vacancies_found: u32, vacancies_processed: u32, average_salary: u64) -> Self {
        Self {
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }
}

/// Per-language aggregates of one provider, kept in query order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, LanguageAggregate)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an aggregate, replacing an existing entry for the same language in place
    pub fn insert(&mut self, language: impl Into<String>, aggregate: LanguageAggregate) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = aggregate,
            None => self.entries.push((language, aggregate)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageAggregate> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, aggregate)| aggregate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageAggregate)> {
        self.entries
            .iter()
            .map(|(language, aggregate)| (language.as_str(), aggregate))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, aggregate) in &self.entries {
            map.serialize_entry(language, aggregate)?;
        }
        map.end()
    }
}
