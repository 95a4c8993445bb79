//! Bridge from fixture inputs to the formatter.
//!
//! Fixture inputs are owned JSON values; the formatter takes borrowed
//! arguments. [`execute_case`] owns the conversion and returns the
//! rendered text or the formatter's error message.

use stringforge_core::fmt::{self, Arg};
use thiserror::Error;

use crate::fixtures::{CaseInput, FixtureCase};

/// How a single case execution went wrong at the harness level (the
/// formatter's own failures are reported as [`CaseOutcome::Failed`]).
#[derive(Debug, Error)]
pub enum ExecError {
    /// Rendered bytes were not valid UTF-8, so there is no text to
    /// compare against the expectation.
    #[error("case `{name}` produced non-UTF-8 output")]
    NonTextOutput { name: String },
}

/// What actually happened when the case ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Formatting succeeded with this output.
    Rendered(String),
    /// Formatting failed with this error message.
    Failed(String),
}

/// Run one fixture case against the formatter.
pub fn execute_case(case: &FixtureCase) -> Result<CaseOutcome, ExecError> {
    let args: Vec<Arg<'_>> = case.inputs.iter().map(to_arg).collect();
    match fmt::format(&case.format, &args) {
        Ok(text) => Ok(CaseOutcome::Rendered(text)),
        Err(fmt::FormatError::InvalidUtf8) => Err(ExecError::NonTextOutput {
            name: case.name.clone(),
        }),
        Err(err) => Ok(CaseOutcome::Failed(err.to_string())),
    }
}

fn to_arg(input: &CaseInput) -> Arg<'_> {
    match input {
        CaseInput::Int(v) => Arg::Int(*v),
        CaseInput::Uint(v) => Arg::Uint(*v),
        CaseInput::Float(v) => Arg::Float(*v),
        CaseInput::Char(c) => Arg::Char(*c),
        CaseInput::Str(s) => Arg::Str(s.as_bytes()),
        CaseInput::Null => Arg::Null,
        CaseInput::Ptr(addr) => Arg::Ptr(*addr),
    }
}
