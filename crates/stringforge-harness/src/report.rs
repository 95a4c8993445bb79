//! Structured logging and report generation.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or an in-memory buffer.
//! - [`ConformanceReport`]: markdown/JSON summary of a verification run.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::runner::{CaseResult, RunSummary};

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Per-case verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            family: None,
            case: None,
            spec_section: None,
            outcome: None,
            details: None,
        }
    }

    /// Attach the case identity fields from a result.
    #[must_use]
    pub fn with_case(mut self, result: &CaseResult) -> Self {
        self.family = Some(result.family.clone());
        self.case = Some(result.case_name.clone());
        self.spec_section = Some(result.spec_section.clone());
        self
    }

    /// Set the outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

/// Writes structured JSONL log entries to a file or an in-memory buffer.
pub struct LogEmitter {
    writer: Box<dyn Write>,
    seq: u64,
    campaign: String,
}

impl LogEmitter {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path, campaign: &str) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(std::io::BufWriter::new(file)),
            seq: 0,
            campaign: campaign.to_string(),
        })
    }

    /// Create an emitter that writes to an in-memory buffer (for testing).
    #[must_use]
    pub fn to_buffer(campaign: &str) -> Self {
        Self {
            writer: Box::new(Vec::new()),
            seq: 0,
            campaign: campaign.to_string(),
        }
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{:03}", self.campaign, self.seq)
    }

    /// Emit a log entry with an auto-generated trace id.
    pub fn emit(&mut self, level: LogLevel, event: &str) -> std::io::Result<LogEntry> {
        let trace_id = self.next_trace_id();
        let entry = LogEntry::new(trace_id, level, event);
        self.write_entry(&entry)?;
        Ok(entry)
    }

    /// Emit one entry per case result, plus a summary entry.
    pub fn emit_run(&mut self, results: &[CaseResult]) -> std::io::Result<()> {
        for result in results {
            let (level, outcome) = if result.passed {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            let mut entry = LogEntry::new(self.next_trace_id(), level, "case_verified")
                .with_case(result)
                .with_outcome(outcome);
            if let Some(diff) = &result.diff {
                entry = entry.with_details(serde_json::json!({
                    "expected": result.expected,
                    "actual": result.actual,
                    "diff": diff,
                }));
            }
            self.write_entry(&entry)?;
        }

        let summary = RunSummary::from_results(results);
        let entry = LogEntry::new(self.next_trace_id(), LogLevel::Info, "run_complete")
            .with_details(serde_json::json!({
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.failed,
            }));
        self.write_entry(&entry)
    }

    fn write_entry(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

// ---------------------------------------------------------------------------
// Conformance report
// ---------------------------------------------------------------------------

/// Human-readable + machine-readable conformance report.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub title: String,
    pub campaign: String,
    pub summary: RunSummary,
    pub results: Vec<CaseResult>,
}

impl ConformanceReport {
    #[must_use]
    pub fn new(campaign: impl Into<String>, results: Vec<CaseResult>) -> Self {
        Self {
            title: String::from("stringforge Conformance Report"),
            campaign: campaign.into(),
            summary: RunSummary::from_results(&results),
            results,
        }
    }

    /// Render as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", self.title));
        md.push_str(&format!("Campaign: `{}`\n\n", self.campaign));
        md.push_str(&format!(
            "Total: {} | Passed: {} | Failed: {}\n\n",
            self.summary.total, self.summary.passed, self.summary.failed
        ));
        md.push_str("| Family | Case | Spec | Result |\n");
        md.push_str("|--------|------|------|--------|\n");
        for result in &self.results {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                result.family,
                result.case_name,
                result.spec_section,
                if result.passed { "pass" } else { "FAIL" }
            ));
        }
        for result in self.results.iter().filter(|r| !r.passed) {
            md.push_str(&format!("\n## FAIL: {}\n\n```\n", result.case_name));
            if let Some(diff) = &result.diff {
                md.push_str(diff);
            }
            md.push_str("\n```\n");
        }
        md
    }

    /// Render as pretty JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn now_utc() -> String {
    // Simple format without an external date dependency.
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    format!("{secs}.{:03}", duration.subsec_millis())
}
