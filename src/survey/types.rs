use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// One respondent: the identifier from the first column and the remaining cells in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    answers: Vec<String>,
}

impl Record {
    pub fn new(id: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            id: id.into(),
            answers,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// How to treat a record with fewer answers than there are questions.
///
/// Records with more answers than questions are always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Abort with [`EvalError::MalformedRow`].
    #[default]
    Reject,
    /// Evaluate missing answers as empty strings.
    Pad,
    /// Evaluate only the answers present.
    Truncate,
}

/// A loaded survey table.
///
/// Records keep the order in which their identifier first appeared; a later
/// row with the same identifier replaces the earlier answers in place.
#[derive(Debug, Clone, Default)]
pub struct Survey {
    questions: Vec<String>,
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Survey {
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            questions,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a record, replacing the answers of an existing record with the same id.
    pub fn insert(&mut self, record: Record) {
        match self.index.get(record.id()) {
            Some(&pos) => {
                log::debug!("record '{}' appears more than once, keeping the last row", record.id());
                self.records[pos] = record;
            }
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// The full header row, identifier label included.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Header cells after the identifier label, aligned with each record's answers.
    pub fn question_texts(&self) -> &[String] {
        self.questions.get(1..).unwrap_or(&[])
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn answers(&self, id: &str) -> Option<&[String]> {
        self.index.get(id).map(|&pos| self.records[pos].answers())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Answers of `record` lined up one-to-one with [`Survey::question_texts`].
    pub fn aligned_answers<'a>(
        &self,
        record: &'a Record,
        policy: RowPolicy,
    ) -> Result<Vec<&'a str>, EvalError> {
        let questions = self.question_texts().len();
        let answers = record.answers().len();
        let malformed = || EvalError::MalformedRow {
            record: record.id().to_string(),
            answers,
            questions,
        };

        if answers > questions {
            return Err(malformed());
        }

        let mut aligned: Vec<&'a str> = record.answers().iter().map(String::as_str).collect();
        if answers < questions {
            match policy {
                RowPolicy::Reject => return Err(malformed()),
                RowPolicy::Pad => aligned.resize(questions, ""),
                RowPolicy::Truncate => {}
            }
        }
        Ok(aligned)
    }
}
