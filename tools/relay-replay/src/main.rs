//! relay-replay: feed recorded header batches to a relay checkpoint.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use relay_replay::{run, PolicyKind, ReplayFile, ReplayOptions, ReplayReport, StepStatus};
use relay_telemetry::{init_tracing, TelemetryConfig};

/// Replay a recorded relay session
#[derive(Parser, Debug)]
#[command(name = "relay-replay")]
#[command(about = "Replay hex-encoded subnet header batches into a relay checkpoint")]
struct Args {
    /// Replay file (JSON)
    file: PathBuf,

    /// Replay into this variant instead of the recorded one
    #[arg(short, long, value_enum)]
    policy: Option<PolicyKind>,

    /// Host block number at bootstrap
    #[arg(long, default_value = "0")]
    host_block: u64,

    /// Stop at the first rejected step
    #[arg(long)]
    fail_fast: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every header
    #[arg(short, long)]
    verbose: bool,

    /// Print Prometheus metrics after the report
    #[cfg(feature = "metrics")]
    #[arg(long)]
    metrics: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_tracing(&telemetry)?;

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let file: ReplayFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.file.display()))?;

    let report = run(
        &file,
        ReplayOptions {
            policy: args.policy,
            host_start: args.host_block,
            fail_fast: args.fail_fast,
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    #[cfg(feature = "metrics")]
    if args.metrics {
        print!("{}", relay_telemetry::encode_metrics()?);
    }

    if report.rejected() > 0 {
        std::process::exit(2);
    }
    Ok(())
}

fn print_report(report: &ReplayReport) {
    println!("policy: {:?}", report.policy);
    for step in &report.steps {
        let detail = match &step.status {
            StepStatus::Applied {
                accepted,
                duplicates,
                finalized,
            } => format!(
                "applied: {} accepted, {} duplicate, finalized {:?}",
                accepted, duplicates, finalized
            ),
            StepStatus::Rejected { kind, error } => format!("REJECTED [{}]: {}", kind, error),
            StepStatus::Checked { valid } => format!("check: {}", valid),
        };
        println!(
            "  #{:<3} {:<10} @host {:<8} {}",
            step.index, step.action, step.host_block, detail
        );
    }
    println!("head:           #{} {}", report.head.number, report.head.hash);
    println!(
        "last finalized: #{} {}",
        report.last_finalized.number, report.last_finalized.hash
    );
    println!(
        "validators:     {} (threshold {})",
        report.validators.len(),
        report.threshold
    );
}
