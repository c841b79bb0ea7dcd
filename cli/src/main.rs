#![allow(clippy::print_stdout, clippy::print_stderr)]
use crate::cli::{Args, MultiValueArg};
use anyhow::Context;
use clap::Parser;
use shaclcmp::{
    BatchError, BatchEvent, BatchRunner, FingerprintOptions, MultiValue, ReportLayout, Summary,
};
use std::process::ExitCode;
use time::OffsetDateTime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

/// Exit code used when no test case directory has both reports.
const NOTHING_TO_DO: u8 = 2;

pub fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing();

    let runner = BatchRunner::new(ReportLayout::new(args.first, args.second)).with_options(
        FingerprintOptions::new().with_multi_value(args.multi_value.into()),
    );
    let verbose = args.verbose;
    let results = match runner.run(&args.dir, |event| {
        if verbose {
            print_progress(event);
        }
    }) {
        Ok(results) => results,
        Err(error @ BatchError::DirectoryNotFound { .. }) => {
            eprintln!("{error}");
            Vec::new()
        }
        Err(error) => return Err(error.into()),
    };

    if results.is_empty() {
        println!("No tests found to run.");
        return Ok(ExitCode::from(NOTHING_TO_DO));
    }

    let summary = Summary::new(&results);
    println!("{}", summary.render());
    summary
        .write_to(&args.report, OffsetDateTime::now_utc())
        .with_context(|| format!("Failed to write the report to {}", args.report.display()))?;
    println!("\nReport saved: {}", args.report.display());

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_progress(event: BatchEvent<'_>) {
    match event {
        BatchEvent::Checking { test_dir } => println!("Checking {test_dir}..."),
        BatchEvent::Finished(result) => {
            println!("   {}", result.status());
            match &result.outcome {
                Ok(outcome) => {
                    for fingerprint in &outcome.only_in_first {
                        println!("     < {fingerprint}");
                    }
                    for fingerprint in &outcome.only_in_second {
                        println!("     > {fingerprint}");
                    }
                }
                Err(error) => println!("     {error}"),
            }
        }
        BatchEvent::Skipped { test_dir } => println!("Skipping {test_dir} (missing reports)"),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shaclcmp=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

impl From<MultiValueArg> for MultiValue {
    fn from(value: MultiValueArg) -> Self {
        match value {
            MultiValueArg::Last => Self::LastWins,
            MultiValueArg::Join => Self::JoinAll,
        }
    }
}
