//! In-memory XML tree construction and serialization.
//!
//! This crate is the document-builder primitive used by `harbor-cda`: a
//! plain tree of elements, attributes and character content that callers
//! assemble in memory, plus a [`quick_xml`] backed writer that turns the
//! tree into text. The tree is the API; quick-xml only ever appears at
//! the output boundary, where it takes care of escaping and encoding.

pub mod error;
pub mod tree;
pub mod writer;

pub use error::{Error, Result};
pub use tree::{XmlDocument, XmlElement, XmlNode};
pub use writer::{document_to_string, element_to_string};
