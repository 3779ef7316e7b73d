use thiserror::Error;

/// Errors surfaced while serializing a document graph.
///
/// Construction-time misuse (wrong element type in a set, malformed
/// union-typed field) is ruled out by the type system, so what remains
/// are render-time invariant violations — an incompletely constructed
/// object graph — plus failures from the XML writer itself.
#[derive(Debug, Error)]
pub enum Error {
    /// A person name was rendered with neither structured parts nor a
    /// flat string
    #[error("person name has neither structured parts nor a flat string")]
    EmptyPersonName,

    /// A boolean value was rendered without its target attribute name
    #[error("boolean value has no target attribute name")]
    BooleanWithoutAttribute,

    /// A periodic interval was rendered from an all-zero period
    #[error("periodic interval has an all-zero period")]
    EmptyPeriod,

    /// XML tree serialization error
    #[error(transparent)]
    Xml(#[from] harbor_xml::Error),
}

/// Result type alias for document composition and serialization.
pub type Result<T> = std::result::Result<T, Error>;
