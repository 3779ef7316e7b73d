//! Participations: how roles connect to acts, each carrying its
//! HL7 `typeCode`.

use crate::data_type::TimeStamp;
use crate::element::Time;
use crate::rim::role::{AssignedAuthor, AssignedCustodian, ManufacturedProduct, PatientRole};
use crate::{Result, ToXmlElement};
use harbor_xml::XmlElement;

/// The document author (`author`): when they authored, and in what
/// assigned capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    time: TimeStamp,
    assigned_authors: Vec<AssignedAuthor>,
}

impl Author {
    pub const TYPE_CODE: &'static str = "AUT";

    pub fn new(time: impl Into<TimeStamp>) -> Self {
        Author {
            time: time.into(),
            assigned_authors: Vec::new(),
        }
    }

    pub fn add_assigned_author(&mut self, assigned_author: AssignedAuthor) -> &mut Self {
        self.assigned_authors.push(assigned_author);
        self
    }

    pub fn time(&self) -> &TimeStamp {
        &self.time
    }
}

impl ToXmlElement for Author {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("author");
        el.set_attribute("typeCode", Self::TYPE_CODE);
        el.append_child(Time(self.time.clone()).to_xml_element()?);
        for assigned in &self.assigned_authors {
            el.append_child(assigned.to_xml_element()?);
        }
        Ok(el)
    }
}

/// The organization charged with keeping the document (`custodian`).
#[derive(Debug, Clone, PartialEq)]
pub struct Custodian {
    assigned_custodian: AssignedCustodian,
}

impl Custodian {
    pub const TYPE_CODE: &'static str = "CST";

    pub fn new(assigned_custodian: AssignedCustodian) -> Self {
        Custodian { assigned_custodian }
    }
}

impl ToXmlElement for Custodian {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("custodian");
        el.set_attribute("typeCode", Self::TYPE_CODE);
        el.append_child(self.assigned_custodian.to_xml_element()?);
        Ok(el)
    }
}

/// The patient the record is about (`recordTarget`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTarget {
    patient_role: PatientRole,
}

impl RecordTarget {
    pub const TYPE_CODE: &'static str = "RCT";

    pub fn new(patient_role: PatientRole) -> Self {
        RecordTarget { patient_role }
    }

    pub fn patient_role(&self) -> &PatientRole {
        &self.patient_role
    }
}

impl ToXmlElement for RecordTarget {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("recordTarget");
        el.set_attribute("typeCode", Self::TYPE_CODE);
        el.append_child(self.patient_role.to_xml_element()?);
        Ok(el)
    }
}

/// The product consumed by a substance administration (`consumable`).
#[derive(Debug, Clone, PartialEq)]
pub struct Consumable {
    manufactured_product: ManufacturedProduct,
}

impl Consumable {
    pub const TYPE_CODE: &'static str = "CSM";

    pub fn new(manufactured_product: ManufacturedProduct) -> Self {
        Consumable {
            manufactured_product,
        }
    }
}

impl ToXmlElement for Consumable {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("consumable");
        el.set_attribute("typeCode", Self::TYPE_CODE);
        el.append_child(self.manufactured_product.to_xml_element()?);
        Ok(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::{
        CodedValue, InstanceIdentifier, NamePartKind, PersonName, Set, TimeStamp,
    };
    use crate::rim::entity::{ManufacturedLabeledDrug, Person};
    use chrono::{FixedOffset, TimeZone};
    use harbor_xml::element_to_string;

    fn timestamp() -> TimeStamp {
        let offset = FixedOffset::east_opt(0).unwrap();
        TimeStamp::from(offset.with_ymd_and_hms(2014, 8, 27, 1, 43, 12).unwrap())
    }

    #[test]
    fn author_renders_time_before_assigned_author() {
        let name = PersonName::new()
            .add_part(NamePartKind::Given, "Robert")
            .add_part(NamePartKind::Family, "Dolin");
        let person = Person::new(Set::new().add(name));
        let ids = Set::new().add(InstanceIdentifier::new("2.16.840.1.113883.19.5"));
        let mut author = Author::new(timestamp());
        author.add_assigned_author(AssignedAuthor::new(person, ids));

        let xml = element_to_string(&author.to_xml_element().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<author typeCode=\"AUT\"><time value=\"20140827014312\"/>\
             <assignedAuthor classCode=\"ASSIGNED\">\
             <id root=\"2.16.840.1.113883.19.5\"/>\
             <assignedPerson classCode=\"PSN\">\
             <name><given>Robert</given><family>Dolin</family></name>\
             </assignedPerson></assignedAuthor></author>"
        );
    }

    #[test]
    fn consumable_wraps_manufactured_product() {
        let drug = ManufacturedLabeledDrug::new(
            CodedValue::new("66493003")
                .with_display_name("Theodur")
                .with_code_system("2.16.840.1.113883.6.96")
                .with_code_system_name("SNOMED CT"),
        );
        let consumable = Consumable::new(ManufacturedProduct::new(drug));

        let xml = element_to_string(&consumable.to_xml_element().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<consumable typeCode=\"CSM\"><manufacturedProduct classCode=\"MANU\">\
             <manufacturedLabeledDrug classCode=\"MMAT\">\
             <code code=\"66493003\" displayName=\"Theodur\" \
             codeSystem=\"2.16.840.1.113883.6.96\" codeSystemName=\"SNOMED CT\"/>\
             </manufacturedLabeledDrug></manufacturedProduct></consumable>"
        );
    }
}
