pub mod aggregator;
pub mod estimator;
pub mod models;
pub mod table;

pub use aggregator::Aggregator;
pub use estimator::{estimate, LOCAL_CURRENCY};
pub use models::{LanguageAggregate, ResultSet, SalaryRange};
pub use table::Table;
