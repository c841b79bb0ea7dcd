//! Comparison of the validation results of two report files.

use crate::error::LoadError;
use crate::fingerprint::{Fingerprint, FingerprintOptions, GraphFingerprints, fingerprint_graph};
use crate::loader::load_graph;
use oxrdf::Graph;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The result of the comparison of two validation report files.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    /// Name of the directory containing the first file.
    pub test_dir: String,
    pub file1: PathBuf,
    pub file2: PathBuf,
    /// If both files have the same set of result fingerprints.
    pub is_equivalent: bool,
    pub triples1: usize,
    pub triples2: usize,
    /// Number of distinct result fingerprints in the first file.
    pub results1: usize,
    /// Number of distinct result fingerprints in the second file.
    pub results2: usize,
    /// Blank node objects with their own properties, in both files.
    pub nested_blank_nodes: usize,
    /// Fingerprints only found in the first file, sorted.
    pub only_in_first: Vec<Fingerprint>,
    /// Fingerprints only found in the second file, sorted.
    pub only_in_second: Vec<Fingerprint>,
}

/// Compares the validation results of two report files with the default options.
pub fn compare_reports(
    file1: impl AsRef<Path>,
    file2: impl AsRef<Path>,
) -> Result<ComparisonOutcome, LoadError> {
    compare_reports_with(file1, file2, &FingerprintOptions::default())
}

/// Compares the validation results of two report files.
///
/// The first file that fails to load aborts the comparison.
pub fn compare_reports_with(
    file1: impl AsRef<Path>,
    file2: impl AsRef<Path>,
    options: &FingerprintOptions,
) -> Result<ComparisonOutcome, LoadError> {
    let (file1, file2) = (file1.as_ref(), file2.as_ref());
    let graph1 = load_graph(file1)?;
    let graph2 = load_graph(file2)?;

    let results1 = fingerprints(file1, &graph1, options);
    let results2 = fingerprints(file2, &graph2, options);
    let only_in_first = results1
        .fingerprints
        .difference(&results2.fingerprints)
        .cloned()
        .collect::<Vec<_>>();
    let only_in_second = results2
        .fingerprints
        .difference(&results1.fingerprints)
        .cloned()
        .collect::<Vec<_>>();

    let outcome = ComparisonOutcome {
        test_dir: parent_name(file1),
        file1: file1.to_owned(),
        file2: file2.to_owned(),
        is_equivalent: only_in_first.is_empty() && only_in_second.is_empty(),
        triples1: graph1.len(),
        triples2: graph2.len(),
        results1: results1.fingerprints.len(),
        results2: results2.fingerprints.len(),
        nested_blank_nodes: results1.nested_blank_nodes + results2.nested_blank_nodes,
        only_in_first,
        only_in_second,
    };
    debug!(
        test_dir = %outcome.test_dir,
        equivalent = outcome.is_equivalent,
        results1 = outcome.results1,
        results2 = outcome.results2,
        "compared reports"
    );
    Ok(outcome)
}

fn fingerprints(
    path: &Path,
    graph: &Graph,
    options: &FingerprintOptions,
) -> GraphFingerprints {
    let fingerprints = fingerprint_graph(graph, options);
    if fingerprints.nested_blank_nodes > 0 {
        warn!(
            path = %path.display(),
            count = fingerprints.nested_blank_nodes,
            "nested blank node structures are reduced to [] in result fingerprints"
        );
    }
    fingerprints
}

fn parent_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_is_parent_name() {
        assert_eq!(parent_name(Path::new("cases/min-count/report.ttl")), "min-count");
        assert_eq!(parent_name(Path::new("report.ttl")), "");
    }
}
