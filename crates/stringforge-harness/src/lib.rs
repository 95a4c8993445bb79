//! Conformance testing harness for stringforge.
//!
//! This crate provides:
//! - Fixture loading: JSON test cases mapping format strings + typed
//!   inputs to expected output or expected errors
//! - A runner that executes cases against the formatter and diffs results
//! - Structured JSONL logging and markdown/JSON report generation

#![forbid(unsafe_code)]

pub mod diff;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use fixtures::{CaseInput, FixtureCase, FixtureSet, builtin_sets};
pub use report::{ConformanceReport, LogEmitter, LogEntry, LogLevel};
pub use runner::{CaseResult, RunSummary, TestRunner};
