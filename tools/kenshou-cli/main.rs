use clap::Parser;
use itertools::Itertools;
use kenshou::prelude::*;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

/// A workflow graph validation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file ({"components": [...], "connections": [...]})
    workflow_path: String,

    /// Emit the raw report as JSON instead of the human-readable summary
    #[arg(short, long)]
    json: bool,

    /// Additionally detect cycles of length >= 3 (off by default)
    #[arg(long)]
    transitive_cycles: bool,

    /// Treat advisory warnings as failures for the exit code
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let payload = fs::read_to_string(&cli.workflow_path)?;
    let workflow = UiWorkflow::from_json(&payload)?.into_workflow()?;

    let mut builder = Validator::builder(workflow);
    if cli.transitive_cycles {
        builder = builder.with_transitive_cycle_check();
    }
    let validator = builder.build();

    let started = Instant::now();
    let report = validator.validate();
    let elapsed = started.elapsed();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(validator.workflow(), &report, elapsed);
    }

    let failed = !report.valid || (cli.strict && report.warnings().next().is_some());
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_summary(
    workflow: &WorkflowDefinition,
    report: &ValidationReport,
    elapsed: std::time::Duration,
) {
    println!(
        "Validated {} component(s), {} connection(s) in {:.2?}",
        workflow.components.len(),
        workflow.connections.len(),
        elapsed
    );

    let blocking = report.blocking().collect::<Vec<_>>();
    if !blocking.is_empty() {
        println!("\nErrors:\n  {}", blocking.iter().join("\n  "));
    }

    let warnings = report.warnings().collect::<Vec<_>>();
    if !warnings.is_empty() {
        println!("\nWarnings:\n  {}", warnings.iter().join("\n  "));
    }

    println!(
        "\nResult: {}",
        if report.valid { "VALID" } else { "INVALID" }
    );
}
