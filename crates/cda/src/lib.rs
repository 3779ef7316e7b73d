//! Typed building blocks for HL7 CDA clinical documents.
//!
//! A caller assembles a [`ClinicalDocument`] from typed domain objects
//! (header values, participations, structured sections, acts) and then
//! serializes the whole graph into a [`harbor_xml::XmlDocument`]. The
//! schema-mandated element order, attribute names and
//! omit-absent-optional-field rules live in the types themselves, so a
//! graph that constructs is a graph that serializes into well-shaped CDA
//! markup.
//!
//! The model splits into three layers:
//!
//! - **Value encoders** ([`data_type`]): scalar clinical values
//!   (identifiers, timestamps, coded values, quantities, intervals,
//!   names) that know how to render themselves onto an existing node as
//!   attributes and child content ([`RenderValue`]).
//! - **Element nodes** ([`element`]): wrappers binding a fixed tag name
//!   to one or more values, producing exactly one output element per
//!   render ([`ToXmlElement`]).
//! - **Composite nodes** ([`component`], [`rim`], [`document`]):
//!   structural aggregates with ordered optional children, each emitting
//!   its fixed class/mood/type codes.
//!
//! Cross-references between narrative text and structured entries go
//! through the per-document [`reference::ReferenceManager`], which hands
//! out paired anchor/pointer values for a logical name.
//!
//! # Example
//!
//! ```
//! use harbor_cda::ClinicalDocument;
//! use harbor_cda::data_type::InstanceIdentifier;
//!
//! let mut doc = ClinicalDocument::new();
//! doc.set_title("Good Health Clinic Consultation Note");
//! doc.set_id(InstanceIdentifier::new("1.2.3.4"));
//!
//! let xml = doc.to_xml_string().unwrap();
//! assert!(xml.contains("<title>Good Health Clinic Consultation Note</title>"));
//! ```
//!
//! The model is single-threaded: a document and its reference manager
//! belong to one thread, and serialization never mutates the source
//! graph.

pub mod component;
pub mod data_type;
pub mod document;
pub mod element;
pub mod error;
pub mod helper;
pub mod reference;
pub mod rim;

pub use document::ClinicalDocument;
pub use error::{Error, Result};

use harbor_xml::XmlElement;

/// A scalar value that renders itself onto an existing output node by
/// setting attributes and/or appending content. Implementations never
/// create the node they write to.
pub trait RenderValue {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()>;
}

/// A node that materializes as exactly one output element, with its tag
/// fixed by the implementing type.
pub trait ToXmlElement {
    fn to_xml_element(&self) -> Result<XmlElement>;
}
