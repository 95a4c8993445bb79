//! Test execution engine.

use serde::Serialize;

use crate::diff;
use crate::exec::{self, CaseOutcome};
use crate::fixtures::FixtureSet;

/// Result of verifying one fixture case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub family: String,
    pub case_name: String,
    pub spec_section: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    /// Rendered diff, present only when the case failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Runs fixture sets and collects per-case results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<CaseResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let expected = match (&case.expected_output, &case.expected_error) {
                    (Some(output), _) => Expectation::Output(output.clone()),
                    (None, Some(substring)) => Expectation::Error(substring.clone()),
                    (None, None) => Expectation::Output(String::new()),
                };

                let (actual, passed) = match exec::execute_case(case) {
                    Ok(CaseOutcome::Rendered(text)) => {
                        let passed = matches!(&expected, Expectation::Output(want) if *want == text);
                        (text, passed)
                    }
                    Ok(CaseOutcome::Failed(message)) => {
                        let passed = matches!(&expected, Expectation::Error(want) if message.contains(want.as_str()));
                        (format!("error: {message}"), passed)
                    }
                    Err(err) => (format!("harness error: {err}"), false),
                };

                let expected = expected.into_display();
                let diff = (!passed).then(|| diff::render_diff(&expected, &actual));
                CaseResult {
                    family: fixture_set.family.clone(),
                    case_name: case.name.clone(),
                    spec_section: case.spec_section.clone(),
                    passed,
                    expected,
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

enum Expectation {
    Output(String),
    Error(String),
}

impl Expectation {
    fn into_display(self) -> String {
        match self {
            Expectation::Output(text) => text,
            Expectation::Error(substring) => format!("error containing: {substring}"),
        }
    }
}

/// Aggregate counts over a result list.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    #[must_use]
    pub fn from_results(results: &[CaseResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
