//! CLI entrypoint for the stringforge conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stringforge_harness::{ConformanceReport, FixtureSet, LogEmitter, TestRunner};

/// Conformance tooling for stringforge.
#[derive(Debug, Parser)]
#[command(name = "stringforge-harness")]
#[command(about = "Conformance testing harness for stringforge")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run fixture cases against the formatter.
    Run {
        /// Directory of fixture JSON files (built-in set when omitted).
        #[arg(long)]
        fixtures: Option<PathBuf>,
        /// Campaign name used in trace ids.
        #[arg(long, default_value = "conformance")]
        campaign: String,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Report output path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List the cases that would run, without executing them.
    List {
        /// Directory of fixture JSON files (built-in set when omitted).
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            fixtures,
            campaign,
            log,
            report,
        } => {
            let sets = load_sets(fixtures.as_deref())?;
            let runner = TestRunner::new(&campaign);
            let mut results = Vec::new();
            for set in &sets {
                results.extend(runner.run(set));
            }
            // Stable ordering for reproducible report diffs.
            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            if let Some(log_path) = log {
                if let Some(parent) = log_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let mut emitter = LogEmitter::to_file(&log_path, &campaign)?;
                emitter.emit_run(&results)?;
                emitter.flush()?;
                eprintln!("Wrote structured log to {}", log_path.display());
            }

            let report_doc = ConformanceReport::new(&campaign, results);
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
                eprintln!("Wrote report to {}", report_path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::List { fixtures } => {
            let sets = load_sets(fixtures.as_deref())?;
            for set in &sets {
                println!("{} ({} cases)", set.family, set.cases.len());
                for case in &set.cases {
                    println!("  {}  [{}]  {:?}", case.name, case.spec_section, case.format);
                }
            }
        }
    }

    Ok(())
}

fn load_sets(dir: Option<&std::path::Path>) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    let Some(dir) = dir else {
        return Ok(stringforge_harness::builtin_sets());
    };

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut sets = Vec::new();
    for path in paths {
        match FixtureSet::from_file(&path) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }
    if sets.is_empty() {
        return Err(format!("No fixture JSON files found in {}", dir.display()).into());
    }
    Ok(sets)
}
