//! The document root and its header.

use crate::component::RootComponent;
use crate::data_type::{CodedSimple, CodedValue, InstanceIdentifier, TimeStamp};
use crate::element::{
    Code, ConfidentialityCode, EffectiveTime, Id, LanguageCode, TemplateId, Title,
};
use crate::reference::ReferenceManager;
use crate::rim::{Author, Custodian, RecordTarget};
use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::{XmlDocument, XmlElement};

/// HL7 v3 namespace every document is rooted in.
pub const NAMESPACE: &str = "urn:hl7-org:v3";
/// XML Schema instance namespace, used for `xsi:type` assertions.
pub const NAMESPACE_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Schema location hint emitted on the root element.
pub const SCHEMA_LOCATION: &str = "urn:hl7-org:v3 CDA.xsd";

const TYPE_ID_ROOT: &str = "2.16.840.1.113883.1.3";
const TYPE_ID_EXTENSION: &str = "POCD_HD000040";

/// The root of the model: header values, participations and the body,
/// serialized in schema order with absent optionals omitted.
#[derive(Debug, Clone)]
pub struct ClinicalDocument {
    type_id: InstanceIdentifier,
    template_ids: Vec<InstanceIdentifier>,
    id: Option<InstanceIdentifier>,
    code: Option<CodedValue>,
    title: Option<String>,
    effective_time: Option<TimeStamp>,
    confidentiality_code: Option<CodedValue>,
    language_code: Option<CodedSimple>,
    record_target: Option<RecordTarget>,
    author: Option<Author>,
    custodian: Option<Custodian>,
    root_component: RootComponent,
    references: ReferenceManager,
}

impl ClinicalDocument {
    pub fn new() -> Self {
        ClinicalDocument {
            type_id: InstanceIdentifier::new(TYPE_ID_ROOT).with_extension(TYPE_ID_EXTENSION),
            template_ids: Vec::new(),
            id: None,
            code: None,
            title: None,
            effective_time: None,
            confidentiality_code: None,
            language_code: None,
            record_target: None,
            author: None,
            custodian: None,
            root_component: RootComponent::new(),
            references: ReferenceManager::new(),
        }
    }

    pub fn add_template_id(&mut self, template_id: InstanceIdentifier) -> &mut Self {
        self.template_ids.push(template_id);
        self
    }

    pub fn set_id(&mut self, id: InstanceIdentifier) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn set_code(&mut self, code: CodedValue) -> &mut Self {
        self.code = Some(code);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_effective_time(&mut self, time: impl Into<TimeStamp>) -> &mut Self {
        self.effective_time = Some(time.into());
        self
    }

    pub fn set_confidentiality_code(&mut self, code: CodedValue) -> &mut Self {
        self.confidentiality_code = Some(code);
        self
    }

    pub fn set_language_code(&mut self, code: CodedSimple) -> &mut Self {
        self.language_code = Some(code);
        self
    }

    pub fn set_record_target(&mut self, record_target: RecordTarget) -> &mut Self {
        self.record_target = Some(record_target);
        self
    }

    pub fn set_author(&mut self, author: Author) -> &mut Self {
        self.author = Some(author);
        self
    }

    pub fn set_custodian(&mut self, custodian: Custodian) -> &mut Self {
        self.custodian = Some(custodian);
        self
    }

    pub fn root_component(&self) -> &RootComponent {
        &self.root_component
    }

    pub fn root_component_mut(&mut self) -> &mut RootComponent {
        &mut self.root_component
    }

    /// The per-document anchor/pointer registry.
    pub fn references(&self) -> &ReferenceManager {
        &self.references
    }

    pub fn references_mut(&mut self) -> &mut ReferenceManager {
        &mut self.references
    }

    /// Serializes the full graph into an XML document.
    pub fn to_xml_document(&self) -> Result<XmlDocument> {
        tracing::debug!(title = self.title.as_deref(), "serializing clinical document");

        let mut root = XmlElement::new("ClinicalDocument");
        root.set_attribute("xmlns", NAMESPACE);
        root.set_attribute("xmlns:xsi", NAMESPACE_XSI);
        root.set_attribute("xsi:schemaLocation", SCHEMA_LOCATION);

        let mut type_id = XmlElement::new("typeId");
        self.type_id.render_onto(&mut type_id)?;
        root.append_child(type_id);

        for template_id in &self.template_ids {
            root.append_child(TemplateId(template_id.clone()).to_xml_element()?);
        }
        if let Some(id) = &self.id {
            root.append_child(Id(id.clone()).to_xml_element()?);
        }
        if let Some(code) = &self.code {
            root.append_child(Code(code.clone()).to_xml_element()?);
        }
        if let Some(title) = &self.title {
            root.append_child(Title(title.clone()).to_xml_element()?);
        }
        if let Some(effective_time) = &self.effective_time {
            root.append_child(EffectiveTime::new(effective_time.clone()).to_xml_element()?);
        }
        if let Some(code) = &self.confidentiality_code {
            root.append_child(ConfidentialityCode(code.clone()).to_xml_element()?);
        }
        if let Some(code) = &self.language_code {
            root.append_child(LanguageCode(code.clone()).to_xml_element()?);
        }
        if let Some(record_target) = &self.record_target {
            root.append_child(record_target.to_xml_element()?);
        }
        if let Some(author) = &self.author {
            root.append_child(author.to_xml_element()?);
        }
        if let Some(custodian) = &self.custodian {
            root.append_child(custodian.to_xml_element()?);
        }
        if !self.root_component.is_empty() {
            root.append_child(self.root_component.to_xml_element()?);
        }

        Ok(XmlDocument::new(root))
    }

    /// Serializes the full graph and returns the XML text, declaration
    /// included.
    pub fn to_xml_string(&self) -> Result<String> {
        let document = self.to_xml_document()?;
        Ok(harbor_xml::document_to_string(&document)?)
    }
}

impl Default for ClinicalDocument {
    fn default() -> Self {
        ClinicalDocument::new()
    }
}
