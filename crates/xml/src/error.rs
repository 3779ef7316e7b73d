use thiserror::Error;

/// Error raised while serializing an XML tree to text.
#[derive(Debug, Error)]
pub enum Error {
    /// XML writing error from quick-xml
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error while writing to the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The serialized bytes were not valid UTF-8
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for XML serialization operations.
pub type Result<T> = std::result::Result<T, Error>;
