use std::io::{self, Write};

const HEADER_RULE_WIDTH: usize = 50;
const PAIR_RULE_WIDTH: usize = 40;

/// Line-oriented, human-readable report of a survey run.
pub(super) struct Report<'w, W: Write + ?Sized> {
    out: &'w mut W,
}

impl<'w, W: Write + ?Sized> Report<'w, W> {
    pub(super) fn new(out: &'w mut W) -> Self {
        Self { out }
    }

    pub(super) fn preamble(&mut self, header: &[String]) -> io::Result<()> {
        writeln!(self.out, "Questions:")?;
        writeln!(self.out, "{header:?}")?;
        writeln!(self.out, "{}", "=".repeat(HEADER_RULE_WIDTH))
    }

    pub(super) fn record(&mut self, id: &str) -> io::Result<()> {
        writeln!(self.out, "Evaluating answers for record: {id}")
    }

    pub(super) fn pair(
        &mut self,
        question: &str,
        answer: &str,
        model: &str,
        evaluation: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "Question: {question}")?;
        writeln!(self.out, "Answer: {answer}")?;
        writeln!(self.out, "Evaluation from {model}:")?;
        writeln!(self.out, "{evaluation}")?;
        writeln!(self.out, "{}", "-".repeat(PAIR_RULE_WIDTH))?;
        self.out.flush()
    }
}
