//! Roles: the competencies under which entities take part in acts.

use crate::data_type::{InstanceIdentifier, Set};
use crate::element::Id;
use crate::rim::entity::{
    ManufacturedLabeledDrug, Patient, Person, RepresentedCustodianOrganization,
};
use crate::{Result, ToXmlElement};
use harbor_xml::XmlElement;

/// Binds a patient to the identifiers under which they are known
/// (`patientRole`).
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRole {
    ids: Set<InstanceIdentifier>,
    patient: Patient,
}

impl PatientRole {
    pub fn new(ids: Set<InstanceIdentifier>, patient: Patient) -> Self {
        PatientRole { ids, patient }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn patient_mut(&mut self) -> &mut Patient {
        &mut self.patient
    }
}

impl ToXmlElement for PatientRole {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("patientRole");
        for id in &self.ids {
            el.append_child(Id(id.clone()).to_xml_element()?);
        }
        el.append_child(self.patient.to_xml_element()?);
        Ok(el)
    }
}

/// The authoring role (`assignedAuthor`): identifiers plus the person
/// filling the role.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedAuthor {
    ids: Set<InstanceIdentifier>,
    person: Person,
}

impl AssignedAuthor {
    pub const CLASS_CODE: &'static str = "ASSIGNED";

    pub fn new(person: Person, ids: Set<InstanceIdentifier>) -> Self {
        AssignedAuthor { ids, person }
    }
}

impl ToXmlElement for AssignedAuthor {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("assignedAuthor");
        el.set_attribute("classCode", Self::CLASS_CODE);
        for id in &self.ids {
            el.append_child(Id(id.clone()).to_xml_element()?);
        }
        el.append_child(self.person.to_xml_element()?);
        Ok(el)
    }
}

/// The custodial role (`assignedCustodian`) wrapping the organization
/// that keeps the document.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedCustodian {
    organization: RepresentedCustodianOrganization,
}

impl AssignedCustodian {
    pub const CLASS_CODE: &'static str = "ASSIGNED";

    pub fn new(organization: RepresentedCustodianOrganization) -> Self {
        AssignedCustodian { organization }
    }
}

impl ToXmlElement for AssignedCustodian {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("assignedCustodian");
        el.set_attribute("classCode", Self::CLASS_CODE);
        el.append_child(self.organization.to_xml_element()?);
        Ok(el)
    }
}

/// A product as manufactured (`manufacturedProduct`).
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturedProduct {
    drug: ManufacturedLabeledDrug,
}

impl ManufacturedProduct {
    pub const CLASS_CODE: &'static str = "MANU";

    pub fn new(drug: ManufacturedLabeledDrug) -> Self {
        ManufacturedProduct { drug }
    }
}

impl ToXmlElement for ManufacturedProduct {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("manufacturedProduct");
        el.set_attribute("classCode", Self::CLASS_CODE);
        el.append_child(self.drug.to_xml_element()?);
        Ok(el)
    }
}
