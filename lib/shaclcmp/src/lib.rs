//! Comparison of SHACL validation reports produced by different engines.
//!
//! Each validation result is reduced to a [`Fingerprint`]: its properties sorted by predicate,
//! without `sh:resultMessage` and with every blank node replaced by `[]`.
//! Two reports are equivalent when they have the same set of fingerprints.
//!
//! ```no_run
//! use shaclcmp::compare_reports;
//!
//! let outcome = compare_reports("min-count/report.ttl", "min-count/report_topbraid.ttl")?;
//! if !outcome.is_equivalent {
//!     for fingerprint in &outcome.only_in_first {
//!         println!("unexpected result: {fingerprint}");
//!     }
//! }
//! # Result::<_, shaclcmp::LoadError>::Ok(())
//! ```
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod batch;
mod compare;
mod error;
mod fingerprint;
mod loader;
mod summary;
pub mod vocab;

pub use batch::{
    BatchEvent, BatchRunner, DEFAULT_FIRST_REPORT, DEFAULT_SECOND_REPORT, ReportLayout, Status,
    TestResult,
};
pub use compare::{ComparisonOutcome, compare_reports, compare_reports_with};
pub use error::{BatchError, LoadError};
pub use fingerprint::{
    BLANK_NODE_MARKER, Fingerprint, FingerprintOptions, FingerprintSet, GraphFingerprints,
    MultiValue, extract_results, fingerprint, fingerprint_graph, fingerprint_with,
};
pub use loader::{guess_format, load_graph};
pub use summary::{REPORT_TITLE, Summary};
