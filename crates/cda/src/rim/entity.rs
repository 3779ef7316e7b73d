//! Entities: the real-world parties and materials acts involve.

use crate::data_type::{CodedValue, EntityName, InstanceIdentifier, PersonName, Set, TimeStamp};
use crate::element::{AdministrativeGenderCode, BirthTime, Code, Id};
use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::XmlElement;

/// A person acting in an assigned capacity (`assignedPerson`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    names: Set<PersonName>,
}

impl Person {
    pub const CLASS_CODE: &'static str = "PSN";

    pub fn new(names: Set<PersonName>) -> Self {
        Person { names }
    }

    pub fn names(&self) -> &Set<PersonName> {
        &self.names
    }
}

impl ToXmlElement for Person {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("assignedPerson");
        el.set_attribute("classCode", Self::CLASS_CODE);
        self.names.render_onto(&mut el)?;
        Ok(el)
    }
}

/// The subject of care (`patient`): names, administrative gender and
/// birth time, each optional and omitted when absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patient {
    names: Set<PersonName>,
    administrative_gender_code: Option<CodedValue>,
    birth_time: Option<TimeStamp>,
}

impl Patient {
    pub fn new(names: Set<PersonName>) -> Self {
        Patient {
            names,
            ..Default::default()
        }
    }

    pub fn set_administrative_gender_code(&mut self, code: CodedValue) -> &mut Self {
        self.administrative_gender_code = Some(code);
        self
    }

    pub fn set_birth_time(&mut self, birth_time: impl Into<TimeStamp>) -> &mut Self {
        self.birth_time = Some(birth_time.into());
        self
    }
}

impl ToXmlElement for Patient {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("patient");

        self.names.render_onto(&mut el)?;

        if let Some(gender) = &self.administrative_gender_code {
            el.append_child(AdministrativeGenderCode(gender.clone()).to_xml_element()?);
        }

        if let Some(birth_time) = &self.birth_time {
            el.append_child(BirthTime(birth_time.clone()).to_xml_element()?);
        }

        Ok(el)
    }
}

/// The organization maintaining the document
/// (`representedCustodianOrganization`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepresentedCustodianOrganization {
    names: Set<EntityName>,
    ids: Set<InstanceIdentifier>,
}

impl RepresentedCustodianOrganization {
    pub const CLASS_CODE: &'static str = "ORG";

    pub fn new(names: Set<EntityName>, ids: Set<InstanceIdentifier>) -> Self {
        RepresentedCustodianOrganization { names, ids }
    }
}

impl ToXmlElement for RepresentedCustodianOrganization {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("representedCustodianOrganization");
        el.set_attribute("classCode", Self::CLASS_CODE);

        for id in &self.ids {
            el.append_child(Id(id.clone()).to_xml_element()?);
        }

        self.names.render_onto(&mut el)?;

        Ok(el)
    }
}

/// A labeled drug identified by its code (`manufacturedLabeledDrug`).
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturedLabeledDrug {
    code: CodedValue,
}

impl ManufacturedLabeledDrug {
    pub const CLASS_CODE: &'static str = "MMAT";

    pub fn new(code: CodedValue) -> Self {
        ManufacturedLabeledDrug { code }
    }
}

impl ToXmlElement for ManufacturedLabeledDrug {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("manufacturedLabeledDrug");
        el.set_attribute("classCode", Self::CLASS_CODE);
        el.append_child(Code(self.code.clone()).to_xml_element()?);
        Ok(el)
    }
}
