use crate::data_type::{CodedValue, InstanceIdentifier};
use crate::element::{Code, Id, TemplateId, Text, TextContent, Title};
use crate::rim::EntryAct;
use crate::{Result, ToXmlElement};
use harbor_xml::XmlElement;

/// One narrative section of a structured body: coded heading, human
/// readable text, and the machine readable entries that back it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    template_ids: Vec<InstanceIdentifier>,
    id: Option<InstanceIdentifier>,
    code: Option<CodedValue>,
    title: Option<String>,
    text: Option<TextContent>,
    entries: Vec<Entry>,
}

impl Section {
    pub const CLASS_CODE: &'static str = "DOCSECT";

    pub fn new() -> Self {
        Section::default()
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

    pub fn set_text(&mut self, text: impl Into<TextContent>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a fresh entry and hands it back for filling.
    pub fn create_entry(&mut self) -> &mut Entry {
        self.entries.push(Entry::new());
        let index = self.entries.len() - 1;
        &mut self.entries[index]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl ToXmlElement for Section {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("section");
        el.set_attribute("classCode", Self::CLASS_CODE);

        for template_id in &self.template_ids {
            el.append_child(TemplateId(template_id.clone()).to_xml_element()?);
        }
        if let Some(id) = &self.id {
            el.append_child(Id(id.clone()).to_xml_element()?);
        }
        if let Some(code) = &self.code {
            el.append_child(Code(code.clone()).to_xml_element()?);
        }
        if let Some(title) = &self.title {
            if !title.is_empty() {
                el.append_child(Title(title.clone()).to_xml_element()?);
            }
        }
        if let Some(text) = &self.text {
            if !text.is_empty() {
                el.append_child(Text(text.clone()).to_xml_element()?);
            }
        }
        for entry in &self.entries {
            el.append_child(entry.to_xml_element()?);
        }

        Ok(el)
    }
}

/// A machine readable entry holding the clinical statements of a
/// section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    acts: Vec<EntryAct>,
}

impl Entry {
    pub const TYPE_CODE: &'static str = "DRIV";

    pub fn new() -> Self {
        Entry::default()
    }

    pub fn add_act(&mut self, act: impl Into<EntryAct>) -> &mut Self {
        self.acts.push(act.into());
        self
    }

    pub fn acts(&self) -> &[EntryAct] {
        &self.acts
    }
}

impl ToXmlElement for Entry {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("entry");
        el.set_attribute("typeCode", Self::TYPE_CODE);
        for act in &self.acts {
            el.append_child(act.to_xml_element()?);
        }
        Ok(el)
    }
}
