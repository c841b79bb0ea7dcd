//! Ready to use [`NamedNodeRef`]s for the vocabularies found in validation reports.

pub mod sh {
    //! [SHACL](https://www.w3.org/TR/shacl/) validation report vocabulary.
    use oxrdf::NamedNodeRef;

    /// The SHACL namespace: `http://www.w3.org/ns/shacl#`
    pub const NAMESPACE: &str = "http://www.w3.org/ns/shacl#";

    /// The class of SHACL validation reports.
    pub const VALIDATION_REPORT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#ValidationReport");
    /// Links a validation report to its individual results.
    pub const RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#result");
    /// Human-readable message of a result. Its text differs between engines.
    pub const RESULT_MESSAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#resultMessage");
}

pub mod shds {
    //! SHACL-DS dataset-scoped vocabulary.

    /// The SHACL-DS namespace: `https://w3id.org/shacl-ds#`
    pub const NAMESPACE: &str = "https://w3id.org/shacl-ds#";
}
