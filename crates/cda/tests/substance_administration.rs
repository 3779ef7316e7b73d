use chrono::{FixedOffset, TimeZone};
use harbor_cda::ToXmlElement;
use harbor_cda::data_type::{
    CodedSimple, InstanceIdentifier, IntervalOfTime, Period, PeriodicIntervalOfTime, PhysicalQuantity,
    SnomedCtCode, TimeStamp,
};
use harbor_cda::rim::{
    Consumable, ManufacturedLabeledDrug, ManufacturedProduct, SubstanceAdministration,
};
use harbor_xml::element_to_string;
use rust_decimal_macros::dec;

fn day(year: i32, month: u32, day: u32) -> TimeStamp {
    let offset = FixedOffset::east_opt(0).unwrap();
    let date = offset.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap();
    TimeStamp::new(date).with_precision(TimeStamp::PRECISION_DAY)
}

fn theodur_consumable() -> Consumable {
    let drug = ManufacturedLabeledDrug::new(SnomedCtCode::new("66493003", "Theodur"));
    Consumable::new(ManufacturedProduct::new(drug))
}

#[test]
fn medication_statement_renders_in_schema_order() {
    let mut sbadm = SubstanceAdministration::new();
    sbadm
        .add_template_id(InstanceIdentifier::new("2.16.840.1.113883.10.20.1.24"))
        .set_text("Theodur 200mg BID")
        .set_status_code(CodedSimple::new("active"))
        .add_effective_time(
            IntervalOfTime::new()
                .with_low(day(2014, 3, 2))
                .with_high(day(2014, 4, 1)),
        )
        .add_effective_time(
            PeriodicIntervalOfTime::new(Period::hours(12)).with_institution_specified(true),
        )
        .set_route_code(SnomedCtCode::new("20053000", "Oral administration"))
        .set_dose_quantity(PhysicalQuantity::new("mg", dec!(200)))
        .set_consumable(theodur_consumable());

    let xml = element_to_string(&sbadm.to_xml_element().unwrap()).unwrap();
    assert_eq!(
        xml,
        "<substanceAdministration classCode=\"SBADM\" moodCode=\"EVN\">\
         <templateId root=\"2.16.840.1.113883.10.20.1.24\"/>\
         <text>Theodur 200mg BID</text>\
         <statusCode code=\"active\"/>\
         <effectiveTime xsi:type=\"IVL_TS\">\
         <low value=\"20140302\"/><high value=\"20140401\"/></effectiveTime>\
         <effectiveTime xsi:type=\"PIVL_TS\" institutionSpecified=\"true\" operator=\"A\">\
         <period value=\"12\" unit=\"h\"/></effectiveTime>\
         <routeCode code=\"20053000\" displayName=\"Oral administration\" \
         codeSystem=\"2.16.840.1.113883.6.96\" codeSystemName=\"SNOMED CT\"/>\
         <doseQuantity value=\"200\" unit=\"mg\"/>\
         <consumable typeCode=\"CSM\"><manufacturedProduct classCode=\"MANU\">\
         <manufacturedLabeledDrug classCode=\"MMAT\">\
         <code code=\"66493003\" displayName=\"Theodur\" \
         codeSystem=\"2.16.840.1.113883.6.96\" codeSystemName=\"SNOMED CT\"/>\
         </manufacturedLabeledDrug></manufacturedProduct></consumable>\
         </substanceAdministration>"
    );
}

#[test]
fn intent_mood_is_overridable() {
    let mut sbadm = SubstanceAdministration::new();
    sbadm.set_mood_code("INT");
    let xml = element_to_string(&sbadm.to_xml_element().unwrap()).unwrap();
    assert_eq!(
        xml,
        "<substanceAdministration classCode=\"SBADM\" moodCode=\"INT\"/>"
    );
}

#[test]
fn only_later_effective_times_carry_the_operator() {
    let mut sbadm = SubstanceAdministration::new();
    sbadm
        .add_effective_time(day(2014, 3, 2))
        .add_effective_time(PeriodicIntervalOfTime::new(Period::days(1)));

    let xml = element_to_string(&sbadm.to_xml_element().unwrap()).unwrap();
    assert_eq!(
        xml,
        "<substanceAdministration classCode=\"SBADM\" moodCode=\"EVN\">\
         <effectiveTime value=\"20140302\"/>\
         <effectiveTime xsi:type=\"PIVL_TS\" operator=\"A\">\
         <period value=\"1\" unit=\"d\"/></effectiveTime>\
         </substanceAdministration>"
    );
}
