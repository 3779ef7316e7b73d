use chrono::{FixedOffset, TimeZone};
use harbor_cda::ClinicalDocument;
use harbor_cda::component::{Body, NonXmlBody};
use harbor_cda::data_type::{Confidentiality, EncapsulatedData, InstanceIdentifier, TimeStamp};

fn effective_time() -> TimeStamp {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let date = offset.with_ymd_and_hms(2014, 8, 27, 1, 43, 12).unwrap();
    TimeStamp::new(date).with_precision(TimeStamp::PRECISION_MINUTE)
}

#[test]
fn consultation_note_with_non_xml_body() {
    let mut doc = ClinicalDocument::new();
    doc.set_title("Good Health Clinic Consultation Note")
        .set_effective_time(effective_time())
        .set_id(InstanceIdentifier::new("1.2.3.4").with_extension("https://mass.chill.pro"))
        .set_confidentiality_code(Confidentiality::Normal.to_coded_value());

    doc.root_component_mut().add_body(Body::NonXml(NonXmlBody::new(
        EncapsulatedData::new("This is a narrative text"),
    )));

    let xml = doc.to_xml_string().unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <ClinicalDocument xmlns=\"urn:hl7-org:v3\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:schemaLocation=\"urn:hl7-org:v3 CDA.xsd\">\
         <typeId root=\"2.16.840.1.113883.1.3\" extension=\"POCD_HD000040\"/>\
         <id root=\"1.2.3.4\" extension=\"https://mass.chill.pro\"/>\
         <title>Good Health Clinic Consultation Note</title>\
         <effectiveTime value=\"201408270143\"/>\
         <confidentialityCode code=\"N\" displayName=\"Normal\" \
         codeSystem=\"2.16.840.1.113883.5.25\" codeSystemName=\"Confidentiality\"/>\
         <component><nonXMLBody classCode=\"DOCBODY\">\
         <text><![CDATA[This is a narrative text]]></text>\
         </nonXMLBody></component></ClinicalDocument>"
    );
}

#[test]
fn title_only_document_keeps_only_type_id_and_title() {
    let mut doc = ClinicalDocument::new();
    doc.set_title("Minimal");

    let xml = doc.to_xml_string().unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <ClinicalDocument xmlns=\"urn:hl7-org:v3\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:schemaLocation=\"urn:hl7-org:v3 CDA.xsd\">\
         <typeId root=\"2.16.840.1.113883.1.3\" extension=\"POCD_HD000040\"/>\
         <title>Minimal</title></ClinicalDocument>"
    );
}

#[test]
fn serialization_is_repeatable() {
    let mut doc = ClinicalDocument::new();
    doc.set_title("Twice");
    let first = doc.to_xml_string().unwrap();
    let second = doc.to_xml_string().unwrap();
    assert_eq!(first, second);
}
