//! Textual summary of a batch run.

use crate::batch::{Status, TestResult};
use std::fs;
use std::io;
use std::path::Path;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const RULE_WIDTH: usize = 80;

/// Title of the persisted summary file.
pub const REPORT_TITLE: &str = "SHACL-DS Test Comparison Report";

/// Pass/fail/error tally of a set of test results.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    results: &'a [TestResult],
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

impl<'a> Summary<'a> {
    pub fn new(results: &'a [TestResult]) -> Self {
        let count = |status| results.iter().filter(|r| r.status() == status).count();
        Self {
            results,
            total: results.len(),
            passed: count(Status::Pass),
            failed: count(Status::Fail),
            errors: count(Status::Error),
        }
    }

    /// Percentage of passed tests, `None` if there is no test.
    #[expect(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.passed as f64 / self.total as f64 * 100.)
    }

    /// No test failed and no test errored.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Renders the summary followed by the list of failing and erroring test cases.
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            "SHACL-DS Validation Report Comparison Summary".to_owned(),
            rule.clone(),
            format!("Total tests:    {}", self.total),
            format!("Passed:         {}", self.passed),
            format!("Failed:         {}", self.failed),
            format!("Errors:         {}", self.errors),
            match self.success_rate() {
                Some(rate) => format!("Success rate:   {rate:.1}%"),
                None => "Success rate:   N/A".to_owned(),
            },
            rule,
        ];

        if self.failed > 0 {
            lines.push("\nFailed tests (different validation results):".to_owned());
            for result in self.results {
                if let Ok(outcome) = &result.outcome {
                    if !outcome.is_equivalent {
                        lines.push(format!(
                            "  - {}: {} vs {} results",
                            result.test_dir, outcome.results1, outcome.results2
                        ));
                    }
                }
            }
        }

        if self.errors > 0 {
            lines.push("\nTests with errors:".to_owned());
            for result in self.results {
                if let Err(error) = &result.outcome {
                    lines.push(format!("  - {}: {error}", result.test_dir));
                }
            }
        }

        lines.join("\n")
    }

    /// Writes the summary to `path`, preceded by a title and the generation timestamp.
    pub fn write_to(&self, path: impl AsRef<Path>, generated: OffsetDateTime) -> io::Result<()> {
        let generated = generated.format(&Rfc3339).map_err(io::Error::other)?;
        fs::write(
            path,
            format!("{REPORT_TITLE}\nGenerated: {generated}\n{}", self.render()),
        )
    }
}
