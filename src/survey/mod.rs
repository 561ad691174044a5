//! Survey tables: the question header and one record of answers per respondent.

mod reader;
mod types;

pub use reader::{load_survey, parse_survey};
pub use types::{Record, RowPolicy, Survey};
