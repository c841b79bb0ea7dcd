#![allow(clippy::panic_in_result_fn)]

use shaclcmp::{
    FingerprintOptions, LoadError, MultiValue, compare_reports, compare_reports_with,
};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ENGINE_REPORT: &str = r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
@prefix ex: <http://example.com/> .

[] a sh:ValidationReport ;
    sh:conforms false ;
    sh:result [
        a sh:ValidationResult ;
        sh:focusNode ex:alice ;
        sh:resultPath ex:name ;
        sh:resultSeverity sh:Violation ;
        sh:sourceConstraintComponent sh:MinLengthConstraintComponent ;
        sh:sourceShape _:shape1 ;
        sh:value "Al" ;
        sh:resultMessage "too short"
    ] , [
        a sh:ValidationResult ;
        sh:focusNode ex:bob ;
        sh:resultSeverity sh:Violation ;
        sh:sourceConstraintComponent sh:ClassConstraintComponent ;
        sh:sourceShape ex:PersonShape ;
        sh:resultMessage "Value does not have class ex:Person"
    ] .
"#;

const REFERENCE_REPORT: &str = r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
@prefix ex: <http://example.com/> .

_:report a sh:ValidationReport .
_:report sh:conforms false .
_:report sh:result _:r2 .
_:report sh:result _:r1 .

_:r2 a sh:ValidationResult ;
    sh:sourceShape ex:PersonShape ;
    sh:sourceConstraintComponent sh:ClassConstraintComponent ;
    sh:resultSeverity sh:Violation ;
    sh:focusNode ex:bob ;
    sh:resultMessage "Value must be an instance of ex:Person" .

_:r1 a sh:ValidationResult ;
    sh:value "Al" ;
    sh:sourceShape _:other ;
    sh:sourceConstraintComponent sh:MinLengthConstraintComponent ;
    sh:resultSeverity sh:Violation ;
    sh:resultPath ex:name ;
    sh:focusNode ex:alice ;
    sh:resultMessage "value too short" .
"#;

const DIFFERENT_REPORT: &str = r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
@prefix ex: <http://example.com/> .

[] a sh:ValidationReport ;
    sh:conforms false ;
    sh:result [
        a sh:ValidationResult ;
        sh:focusNode ex:bob ;
        sh:resultSeverity sh:Warning ;
        sh:sourceConstraintComponent sh:ClassConstraintComponent ;
        sh:sourceShape ex:PersonShape
    ] .
"#;

const CONFORMING_REPORT: &str = r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:conforms true .
"#;

struct Case {
    dir: TempDir,
}

impl Case {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    fn file(&self, name: &str, content: &str) -> Result<PathBuf, Box<dyn Error>> {
        let path = self.dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}

#[test]
fn identical_files_are_equivalent() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let first = case.file("report.ttl", ENGINE_REPORT)?;
    let second = case.file("copy.ttl", ENGINE_REPORT)?;
    let outcome = compare_reports(&first, &second)?;
    assert!(outcome.is_equivalent);
    assert_eq!(outcome.results1, 2);
    assert_eq!(outcome.results1, outcome.results2);
    assert_eq!(outcome.triples1, outcome.triples2);

    let outcome = compare_reports(&first, &first)?;
    assert!(outcome.is_equivalent);
    Ok(())
}

#[test]
fn messages_and_blank_nodes_do_not_matter() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let first = case.file("report.ttl", ENGINE_REPORT)?;
    let second = case.file("report_topbraid.ttl", REFERENCE_REPORT)?;
    let outcome = compare_reports(&first, &second)?;
    assert!(outcome.is_equivalent);
    assert!(outcome.only_in_first.is_empty());
    assert!(outcome.only_in_second.is_empty());
    assert_eq!(outcome.file1, first);
    assert_eq!(outcome.file2, second);
    Ok(())
}

#[test]
fn comparison_is_symmetric() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let engine = case.file("report.ttl", ENGINE_REPORT)?;
    let reference = case.file("report_topbraid.ttl", REFERENCE_REPORT)?;
    let different = case.file("different.ttl", DIFFERENT_REPORT)?;
    for (a, b) in [(&engine, &reference), (&engine, &different), (&reference, &different)] {
        assert_eq!(
            compare_reports(a, b)?.is_equivalent,
            compare_reports(b, a)?.is_equivalent
        );
    }
    Ok(())
}

#[test]
fn differences_are_listed() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let first = case.file("report.ttl", ENGINE_REPORT)?;
    let second = case.file("report_topbraid.ttl", DIFFERENT_REPORT)?;
    let outcome = compare_reports(&first, &second)?;
    assert!(!outcome.is_equivalent);
    assert_eq!(outcome.results1, 2);
    assert_eq!(outcome.results2, 1);
    assert_eq!(outcome.only_in_first.len(), 2);
    assert_eq!(outcome.only_in_second.len(), 1);
    assert!(
        outcome.only_in_second[0]
            .as_str()
            .contains("resultSeverity=http://www.w3.org/ns/shacl#Warning")
    );
    Ok(())
}

#[test]
fn reports_without_results_are_equivalent() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let conforming = case.file("report.ttl", CONFORMING_REPORT)?;
    let unrelated = case.file(
        "data.nt",
        "<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n",
    )?;
    let outcome = compare_reports(&conforming, &unrelated)?;
    assert!(outcome.is_equivalent);
    assert_eq!(outcome.results1, 0);
    assert_eq!(outcome.results2, 0);
    assert_eq!(outcome.triples2, 1);
    Ok(())
}

#[test]
fn load_errors_short_circuit() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let valid = case.file("report.ttl", ENGINE_REPORT)?;
    let broken = case.file("broken.ttl", "@prefix sh: <http://www.w3.org/ns/shacl#> \n[] a")?;
    let missing = case.dir.path().join("missing.ttl");

    let error = compare_reports(&valid, &broken).unwrap_err();
    assert!(matches!(error, LoadError::Syntax { .. }), "{error}");
    assert_eq!(error.path(), broken);

    let error = compare_reports(&missing, &broken).unwrap_err();
    assert!(matches!(error, LoadError::Io { .. }), "{error}");
    assert_eq!(error.path(), missing);
    Ok(())
}

#[test]
fn rdf_xml_and_turtle_reports_compare() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let turtle = case.file(
        "report.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:result [ sh:focusNode <http://example.com/a> ; sh:resultMessage "a" ] .
"#,
    )?;
    let xml = case.file(
        "report.rdf",
        r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:sh="http://www.w3.org/ns/shacl#">
  <sh:ValidationReport>
    <sh:result>
      <rdf:Description>
        <sh:focusNode rdf:resource="http://example.com/a"/>
        <sh:resultMessage>b</sh:resultMessage>
      </rdf:Description>
    </sh:result>
  </sh:ValidationReport>
</rdf:RDF>"#,
    )?;
    assert!(compare_reports(&turtle, &xml)?.is_equivalent);
    Ok(())
}

#[test]
fn joined_multi_values_detect_extra_values() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let single = case.file(
        "single.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:result [ sh:value "a" ] .
"#,
    )?;
    let double = case.file(
        "double.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:result [ sh:value "a" , "b" ] .
"#,
    )?;
    let join = FingerprintOptions::new().with_multi_value(MultiValue::JoinAll);
    assert!(!compare_reports_with(&single, &double, &join)?.is_equivalent);
    assert!(compare_reports_with(&double, &double, &join)?.is_equivalent);
    Ok(())
}

#[test]
fn joined_multi_values_keep_embedded_commas() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let one_value = case.file(
        "one.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:result [ sh:value "a,b" ] .
"#,
    )?;
    let two_values = case.file(
        "two.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:result [ sh:value "a" , "b" ] .
"#,
    )?;
    let join = FingerprintOptions::new().with_multi_value(MultiValue::JoinAll);
    let outcome = compare_reports_with(&one_value, &two_values, &join)?;
    assert!(!outcome.is_equivalent);
    assert_eq!(outcome.only_in_first.len(), 1);
    assert_eq!(outcome.only_in_second.len(), 1);
    Ok(())
}

#[test]
fn literal_results_are_not_dropped() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let literal = case.file(
        "literal.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
[] a sh:ValidationReport ; sh:result "x" .
"#,
    )?;
    let empty = case.file("empty.ttl", CONFORMING_REPORT)?;
    let outcome = compare_reports(&literal, &empty)?;
    assert!(!outcome.is_equivalent);
    assert_eq!(outcome.results1, 1);
    assert_eq!(outcome.results2, 0);
    assert_eq!(outcome.only_in_first.len(), 1);
    assert!(outcome.only_in_first[0].as_str().is_empty());
    Ok(())
}

#[test]
fn nested_blank_nodes_are_reported() -> Result<(), Box<dyn Error>> {
    let case = Case::new()?;
    let nested = case.file(
        "nested.ttl",
        r#"
@prefix sh: <http://www.w3.org/ns/shacl#> .
@prefix ex: <http://example.com/> .
[] a sh:ValidationReport ; sh:result [ sh:resultPath [ sh:inversePath ex:parent ] ] .
"#,
    )?;
    let outcome = compare_reports(&nested, &nested)?;
    assert!(outcome.is_equivalent);
    assert_eq!(outcome.nested_blank_nodes, 2);
    Ok(())
}
