//! Comparison of all the test case directories found in a base directory.

use crate::compare::{ComparisonOutcome, compare_reports_with};
use crate::error::{BatchError, LoadError};
use crate::fingerprint::FingerprintOptions;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default name of the report produced by the engine under test.
pub const DEFAULT_FIRST_REPORT: &str = "report.ttl";
/// Default name of the reference report.
pub const DEFAULT_SECOND_REPORT: &str = "report_topbraid.ttl";

/// Names of the two report files expected in each test case directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub first: String,
    pub second: String,
}

impl ReportLayout {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_REPORT, DEFAULT_SECOND_REPORT)
    }
}

/// Verdict of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Both reports have the same results.
    Pass,
    /// The reports have different results.
    Fail,
    /// At least one report could not be loaded.
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct TestResult {
    pub test_dir: String,
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub outcome: Result<ComparisonOutcome, LoadError>,
}

impl TestResult {
    pub fn status(&self) -> Status {
        match &self.outcome {
            Ok(outcome) if outcome.is_equivalent => Status::Pass,
            Ok(_) => Status::Fail,
            Err(_) => Status::Error,
        }
    }
}

/// Progress notifications sent by [`BatchRunner::run`].
#[derive(Debug, Clone, Copy)]
pub enum BatchEvent<'a> {
    /// The comparison of a test case is starting.
    Checking { test_dir: &'a str },
    /// The comparison of a test case is done.
    Finished(&'a TestResult),
    /// The directory lacks one of the two report files.
    Skipped { test_dir: &'a str },
}

/// Runs the comparison of every test case directory, one after the other.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    layout: ReportLayout,
    options: FingerprintOptions,
}

impl BatchRunner {
    pub fn new(layout: ReportLayout) -> Self {
        Self {
            layout,
            options: FingerprintOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FingerprintOptions) -> Self {
        self.options = options;
        self
    }

    /// Compares the two reports of each subdirectory of `base_dir`, in name order.
    ///
    /// Directories missing one of the reports are skipped and not part of the output.
    /// A report that fails to load is recorded on its [`TestResult`] and does not stop the run.
    pub fn run(
        &self,
        base_dir: impl AsRef<Path>,
        mut on_event: impl FnMut(BatchEvent<'_>),
    ) -> Result<Vec<TestResult>, BatchError> {
        let base_dir = base_dir.as_ref();
        if !base_dir.exists() {
            return Err(BatchError::DirectoryNotFound {
                path: base_dir.to_owned(),
            });
        }
        let list_error = |source| BatchError::Io {
            path: base_dir.to_owned(),
            source,
        };
        let mut test_dirs = fs::read_dir(base_dir)
            .map_err(list_error)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(list_error)?;
        test_dirs.retain(|path| path.is_dir());
        test_dirs.sort();
        info!(
            base_dir = %base_dir.display(),
            candidates = test_dirs.len(),
            "comparing validation reports"
        );

        let mut results = Vec::new();
        for test_dir in test_dirs {
            let name = test_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let file1 = test_dir.join(&self.layout.first);
            let file2 = test_dir.join(&self.layout.second);
            if !file1.exists() || !file2.exists() {
                debug!(test_dir = %name, "skipping directory without both reports");
                on_event(BatchEvent::Skipped { test_dir: &name });
                continue;
            }

            on_event(BatchEvent::Checking { test_dir: &name });
            let outcome = compare_reports_with(&file1, &file2, &self.options);
            if let Err(error) = &outcome {
                warn!(test_dir = %name, %error, "could not compare reports");
            }
            let result = TestResult {
                test_dir: name,
                file1,
                file2,
                outcome,
            };
            on_event(BatchEvent::Finished(&result));
            results.push(result);
        }
        info!(tests = results.len(), "report comparison done");
        Ok(results)
    }
}
