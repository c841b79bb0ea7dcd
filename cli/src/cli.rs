use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "shaclcmp")]
/// Compare SHACL validation reports, ignoring message texts and blank node identifiers
///
/// Each folder of the base directory is a test case holding two reports of the same validation,
/// produced by two engines. The reports are equivalent if they contain the same validation results.
pub struct Args {
    /// Base directory containing the test case folders
    #[arg(short, long, default_value = "test-cases", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,
    /// Show progress for each test case
    ///
    /// The results found in only one of the two reports of a failing test case are also printed.
    #[arg(short, long)]
    pub verbose: bool,
    /// File to write the summary report to
    #[arg(short, long, default_value = "comparison_summary.txt", value_hint = ValueHint::FilePath)]
    pub report: PathBuf,
    /// Name of the first report file in each test case folder
    #[arg(long, default_value = shaclcmp::DEFAULT_FIRST_REPORT)]
    pub first: String,
    /// Name of the second report file in each test case folder
    #[arg(long, default_value = shaclcmp::DEFAULT_SECOND_REPORT)]
    pub second: String,
    /// How a result property with several values is compared
    #[arg(long, value_enum, default_value_t = MultiValueArg::Last)]
    pub multi_value: MultiValueArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum MultiValueArg {
    /// Only one of the values is kept
    Last,
    /// All the values are compared
    Join,
}
