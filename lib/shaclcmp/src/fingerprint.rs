//! Canonical fingerprints of validation results.
//!
//! A fingerprint is built from the outgoing properties of a result node:
//! `sh:resultMessage` is left out, blank node objects are replaced by `[]`
//! and the `predicate=value` pairs are sorted by predicate and joined with `|`.
//! Two results with the same fingerprint are considered equivalent.

use crate::vocab::sh;
use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedOrBlankNodeRef, TermRef};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

/// Placeholder used for every blank node object.
pub const BLANK_NODE_MARKER: &str = "[]";

/// The canonical string of a validation result.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The distinct fingerprints of a graph.
pub type FingerprintSet = BTreeSet<Fingerprint>;

/// How a predicate with several objects on the same result is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MultiValue {
    /// Only one value is kept, the last one in graph iteration order.
    ///
    /// This is the historical behavior of the comparison oracle.
    #[default]
    LastWins,
    /// All values are kept, sorted and joined with `,`.
    ///
    /// `\` and `,` inside a value are escaped with a `\`.
    JoinAll,
}

/// Options of the fingerprint computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerprintOptions {
    pub multi_value: MultiValue,
}

impl FingerprintOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the encoding of multi-valued predicates.
    #[inline]
    #[must_use]
    pub fn with_multi_value(mut self, multi_value: MultiValue) -> Self {
        self.multi_value = multi_value;
        self
    }
}

/// Fingerprints of all the results of a graph.
#[derive(Debug, Clone, Default)]
pub struct GraphFingerprints {
    pub fingerprints: FingerprintSet,
    /// Number of blank node objects that have their own properties.
    ///
    /// Their structure is not part of the fingerprint.
    pub nested_blank_nodes: usize,
}

/// Returns the `sh:result` objects of every `sh:ValidationReport` in the graph.
///
/// Results of different reports are pooled together and each term is returned once.
/// Literal results are kept: they have no property and get the empty fingerprint.
pub fn extract_results(graph: &Graph) -> Vec<TermRef<'_>> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for report in graph.subjects_for_predicate_object(rdf::TYPE, sh::VALIDATION_REPORT) {
        for result in graph.objects_for_subject_predicate(report, sh::RESULT) {
            if seen.insert(result) {
                results.push(result);
            }
        }
    }
    results
}

/// Computes the fingerprint of a result node with the default options.
///
/// ```
/// use oxrdf::{BlankNode, Graph, Literal, NamedNodeRef, Triple};
/// use shaclcmp::fingerprint;
///
/// let result = BlankNode::default();
/// let mut graph = Graph::new();
/// graph.insert(&Triple::new(
///     result.clone(),
///     NamedNodeRef::new("http://www.w3.org/ns/shacl#resultMessage")?,
///     Literal::from("too short"),
/// ));
/// graph.insert(&Triple::new(
///     result.clone(),
///     NamedNodeRef::new("http://www.w3.org/ns/shacl#sourceShape")?,
///     BlankNode::default(),
/// ));
/// assert_eq!(
///     fingerprint(&graph, result.as_ref()).as_str(),
///     "http://www.w3.org/ns/shacl#sourceShape=[]"
/// );
/// # Result::<_, oxrdf::IriParseError>::Ok(())
/// ```
pub fn fingerprint<'a>(graph: &Graph, node: impl Into<NamedOrBlankNodeRef<'a>>) -> Fingerprint {
    fingerprint_with(graph, node, &FingerprintOptions::default())
}

/// Computes the fingerprint of a result node.
pub fn fingerprint_with<'a>(
    graph: &Graph,
    node: impl Into<NamedOrBlankNodeRef<'a>>,
    options: &FingerprintOptions,
) -> Fingerprint {
    canonicalize(graph, node.into(), options).0
}

/// Computes the fingerprints of all the results of a graph.
pub fn fingerprint_graph(graph: &Graph, options: &FingerprintOptions) -> GraphFingerprints {
    let mut output = GraphFingerprints::default();
    for result in extract_results(graph) {
        let (fingerprint, nested) = match result {
            TermRef::NamedNode(node) => canonicalize(graph, node.into(), options),
            TermRef::BlankNode(node) => canonicalize(graph, node.into(), options),
            TermRef::Literal(_) => (Fingerprint(String::new()), 0),
            #[cfg(feature = "rdf-12")]
            TermRef::Triple(_) => (Fingerprint(String::new()), 0),
        };
        output.fingerprints.insert(fingerprint);
        output.nested_blank_nodes += nested;
    }
    output
}

fn canonicalize(
    graph: &Graph,
    node: NamedOrBlankNodeRef<'_>,
    options: &FingerprintOptions,
) -> (Fingerprint, usize) {
    let mut properties = BTreeMap::<&str, Vec<Cow<'_, str>>>::new();
    let mut nested = 0;
    for triple in graph.triples_for_subject(node) {
        if triple.predicate == sh::RESULT_MESSAGE {
            continue;
        }
        let value = match triple.object {
            TermRef::BlankNode(blank) => {
                if graph.triples_for_subject(blank).next().is_some() {
                    nested += 1;
                }
                Cow::Borrowed(BLANK_NODE_MARKER)
            }
            TermRef::NamedNode(named) => Cow::Borrowed(named.as_str()),
            TermRef::Literal(literal) => Cow::Borrowed(literal.value()),
            #[cfg(feature = "rdf-12")]
            TermRef::Triple(quoted) => Cow::Owned(quoted.to_string()),
        };
        properties
            .entry(triple.predicate.as_str())
            .or_default()
            .push(value);
    }
    let entries = properties
        .into_iter()
        .filter_map(|(predicate, mut values)| {
            let value = match options.multi_value {
                MultiValue::LastWins => values.pop()?,
                MultiValue::JoinAll => {
                    values.sort_unstable();
                    let escaped = values.iter().map(|value| escape_list_item(value));
                    Cow::Owned(escaped.collect::<Vec<_>>().join(","))
                }
            };
            Some(format!("{predicate}={value}"))
        })
        .collect::<Vec<_>>();
    (Fingerprint(entries.join("|")), nested)
}

fn escape_list_item(value: &str) -> Cow<'_, str> {
    if value.contains(['\\', ',']) {
        Cow::Owned(value.replace('\\', "\\\\").replace(',', "\\,"))
    } else {
        Cow::Borrowed(value)
    }
}
