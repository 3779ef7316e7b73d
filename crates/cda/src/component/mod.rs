//! Document bodies and their wrapping components.

mod section;

pub use section::{Entry, Section};

use crate::data_type::EncapsulatedData;
use crate::{Result, ToXmlElement};
use harbor_xml::XmlElement;

/// The `component` element joining the document header to its bodies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootComponent {
    bodies: Vec<Body>,
}

impl RootComponent {
    pub fn new() -> Self {
        RootComponent::default()
    }

    pub fn add_body(&mut self, body: impl Into<Body>) -> &mut Self {
        self.bodies.push(body.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

impl ToXmlElement for RootComponent {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("component");
        for body in &self.bodies {
            el.append_child(body.to_xml_element()?);
        }
        Ok(el)
    }
}

/// Either of the two body forms a document may carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    NonXml(NonXmlBody),
    Structured(StructuredBody),
}

impl ToXmlElement for Body {
    fn to_xml_element(&self) -> Result<XmlElement> {
        match self {
            Body::NonXml(body) => body.to_xml_element(),
            Body::Structured(body) => body.to_xml_element(),
        }
    }
}

impl From<NonXmlBody> for Body {
    fn from(body: NonXmlBody) -> Self {
        Body::NonXml(body)
    }
}

impl From<StructuredBody> for Body {
    fn from(body: StructuredBody) -> Self {
        Body::Structured(body)
    }
}

/// An opaque body (`nonXMLBody`) holding undecorated content in a
/// `text` child.
#[derive(Debug, Clone, PartialEq)]
pub struct NonXmlBody {
    text: EncapsulatedData,
}

impl NonXmlBody {
    pub const CLASS_CODE: &'static str = "DOCBODY";

    pub fn new(text: EncapsulatedData) -> Self {
        NonXmlBody { text }
    }
}

impl ToXmlElement for NonXmlBody {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("nonXMLBody");
        el.set_attribute("classCode", Self::CLASS_CODE);
        el.append_child(crate::element::Text(self.text.clone().into()).to_xml_element()?);
        Ok(el)
    }
}

/// A body (`structuredBody`) made of sections, each wrapped in its own
/// `component`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredBody {
    components: Vec<SectionComponent>,
}

impl StructuredBody {
    pub const CLASS_CODE: &'static str = "DOCBODY";

    pub fn new() -> Self {
        StructuredBody::default()
    }

    pub fn add_component(&mut self, component: SectionComponent) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Appends a fresh section component and hands it back for filling.
    pub fn create_component(&mut self) -> &mut SectionComponent {
        self.components.push(SectionComponent::new());
        let index = self.components.len() - 1;
        &mut self.components[index]
    }
}

impl ToXmlElement for StructuredBody {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("structuredBody");
        el.set_attribute("classCode", Self::CLASS_CODE);
        for component in &self.components {
            el.append_child(component.to_xml_element()?);
        }
        Ok(el)
    }
}

/// The `component` wrapper a structured body puts around its sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionComponent {
    sections: Vec<Section>,
}

impl SectionComponent {
    pub const TYPE_CODE: &'static str = "COMP";

    pub fn new() -> Self {
        SectionComponent::default()
    }

    pub fn add_section(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    /// Appends a fresh section and hands it back for filling.
    pub fn create_section(&mut self) -> &mut Section {
        self.sections.push(Section::new());
        let index = self.sections.len() - 1;
        &mut self.sections[index]
    }
}

impl ToXmlElement for SectionComponent {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("component");
        el.set_attribute("typeCode", Self::TYPE_CODE);
        for section in &self.sections {
            el.append_child(section.to_xml_element()?);
        }
        Ok(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_xml::element_to_string;

    #[test]
    fn non_xml_body_wraps_cdata_text() {
        let body = NonXmlBody::new(EncapsulatedData::new("This is a narrative text"));
        let xml = element_to_string(&body.to_xml_element().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<nonXMLBody classCode=\"DOCBODY\">\
             <text><![CDATA[This is a narrative text]]></text></nonXMLBody>"
        );
    }

    #[test]
    fn non_xml_body_text_may_contain_a_cdata_terminator() {
        let body = NonXmlBody::new(EncapsulatedData::new("markers like ]]> stay data"));
        let xml = element_to_string(&body.to_xml_element().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<nonXMLBody classCode=\"DOCBODY\">\
             <text><![CDATA[markers like ]]]]><![CDATA[> stay data]]></text></nonXMLBody>"
        );
    }

    #[test]
    fn empty_root_component_reports_empty() {
        let root = RootComponent::new();
        assert!(root.is_empty());
        let xml = element_to_string(&root.to_xml_element().unwrap()).unwrap();
        assert_eq!(xml, "<component/>");
    }

    #[test]
    fn structured_body_nests_section_components() {
        let mut body = StructuredBody::new();
        let component = body.create_component();
        component.create_section().set_title("Medications");

        let xml = element_to_string(&body.to_xml_element().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<structuredBody classCode=\"DOCBODY\"><component typeCode=\"COMP\">\
             <section classCode=\"DOCSECT\"><title>Medications</title></section>\
             </component></structuredBody>"
        );
    }
}
