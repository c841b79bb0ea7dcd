//! Loading of report files into in-memory graphs.

use crate::error::LoadError;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, absolute};
use tracing::debug;
use url::Url;

const EXTENSIONS: [(&str, RdfFormat); 4] = [
    ("n3", RdfFormat::N3),
    ("nt", RdfFormat::NTriples),
    ("rdf", RdfFormat::RdfXml),
    ("ttl", RdfFormat::Turtle),
];

/// Guesses the serialization of a report from its file extension.
///
/// The comparison is case-insensitive. Unknown or missing extensions are read as Turtle.
///
/// ```
/// use oxrdfio::RdfFormat;
/// use shaclcmp::guess_format;
/// use std::path::Path;
///
/// assert_eq!(guess_format(Path::new("report.RDF")), RdfFormat::RdfXml);
/// assert_eq!(guess_format(Path::new("report.txt")), RdfFormat::Turtle);
/// ```
pub fn guess_format(path: &Path) -> RdfFormat {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return RdfFormat::Turtle;
    };
    for (candidate_extension, candidate_format) in EXTENSIONS {
        if candidate_extension.eq_ignore_ascii_case(extension) {
            return candidate_format;
        }
    }
    RdfFormat::Turtle
}

/// Parses the file at `path` into a graph.
///
/// Relative IRIs are resolved against the file URL. Statements that are not in the default graph
/// (e.g. N3 formulas) are left out.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let format = guess_format(path);
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let mut graph = Graph::new();
    let mut skipped = 0_usize;
    for quad in parser(path, format).for_reader(BufReader::new(file)) {
        let quad = quad.map_err(|e| match e {
            RdfParseError::Io(e) => LoadError::io(path, e),
            RdfParseError::Syntax(e) => LoadError::syntax(path, format, e),
        })?;
        if quad.graph_name.is_default_graph() {
            graph.insert(&Triple::from(quad));
        } else {
            skipped += 1;
        }
    }
    debug!(
        path = %path.display(),
        format = format.name(),
        triples = graph.len(),
        skipped,
        "loaded report graph"
    );
    Ok(graph)
}

fn parser(path: &Path, format: RdfFormat) -> RdfParser {
    if let Some(base_iri) = file_url(path) {
        if let Ok(parser) = RdfParser::from_format(format).with_base_iri(base_iri) {
            return parser;
        }
    }
    RdfParser::from_format(format)
}

fn file_url(path: &Path) -> Option<String> {
    Url::from_file_path(absolute(path).ok()?)
        .ok()
        .map(String::from)
}
