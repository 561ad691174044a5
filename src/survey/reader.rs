use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use super::types::{Record, Survey};
use crate::error::EvalError;

const BOM: char = '\u{feff}';

/// Loads a survey export from a CSV file.
///
/// The first row is the header; every other non-empty row becomes a
/// [`Record`] keyed by its first cell. Row widths are not checked here.
pub fn load_survey(path: impl AsRef<Path>) -> Result<Survey, EvalError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        EvalError::Input(format!("{} is not valid UTF-8: {e}", path.display()))
    })?;
    let survey = parse_survey(&text)?;
    log::debug!(
        "loaded {} records and {} questions from {}",
        survey.len(),
        survey.question_texts().len(),
        path.display()
    );
    Ok(survey)
}

/// Parses survey CSV text. A leading byte-order mark is ignored.
pub fn parse_survey(text: &str) -> Result<Survey, EvalError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = reader.records();

    let header = rows
        .next()
        .ok_or_else(|| EvalError::Input("missing header row".to_string()))??;
    let mut survey = Survey::new(header.iter().map(str::to_string).collect());

    for row in rows {
        let row = row?;
        let mut cells = row.iter();
        let Some(id) = cells.next() else {
            continue;
        };
        survey.insert(Record::new(id, cells.map(str::to_string).collect()));
    }
    Ok(survey)
}
