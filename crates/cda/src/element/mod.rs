//! Element nodes: typed wrappers binding a fixed tag name to the values
//! they carry. Each produces exactly one output element per render.

pub mod table;

use crate::data_type::{
    CodedSimple, CodedValue, EncapsulatedData, InstanceIdentifier, IntervalOfTime,
    NarrativeString, PeriodicIntervalOfTime, PhysicalQuantity, TimeStamp,
};
use crate::reference::ReferencePointer;
use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::XmlElement;

pub use table::{Table, TableCell, TableRow, TableSection, TableSectionKind};

fn element_with(tag: &'static str, value: &impl RenderValue) -> Result<XmlElement> {
    let mut el = XmlElement::new(tag);
    value.render_onto(&mut el)?;
    Ok(el)
}

/// `<id>` wrapping an instance identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id(pub InstanceIdentifier);

impl ToXmlElement for Id {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("id", &self.0)
    }
}

/// `<templateId>` wrapping an instance identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateId(pub InstanceIdentifier);

impl ToXmlElement for TemplateId {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("templateId", &self.0)
    }
}

/// `<code>` wrapping a coded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(pub CodedValue);

impl ToXmlElement for Code {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("code", &self.0)
    }
}

/// `<confidentialityCode>` wrapping a coded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidentialityCode(pub CodedValue);

impl ToXmlElement for ConfidentialityCode {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("confidentialityCode", &self.0)
    }
}

/// `<languageCode>` carrying only the code itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(pub CodedSimple);

impl ToXmlElement for LanguageCode {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("languageCode", &self.0)
    }
}

/// `<statusCode>` carrying only the code itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCode(pub CodedSimple);

impl ToXmlElement for StatusCode {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("statusCode", &self.0)
    }
}

/// `<routeCode>` wrapping a coded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCode(pub CodedValue);

impl ToXmlElement for RouteCode {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("routeCode", &self.0)
    }
}

/// `<administrativeGenderCode>` wrapping a coded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministrativeGenderCode(pub CodedValue);

impl ToXmlElement for AdministrativeGenderCode {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("administrativeGenderCode", &self.0)
    }
}

/// `<title>` with text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(pub String);

impl ToXmlElement for Title {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("title");
        el.append_text(&self.0);
        Ok(el)
    }
}

/// `<time>` wrapping a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time(pub TimeStamp);

impl ToXmlElement for Time {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("time", &self.0)
    }
}

/// `<birthTime>` wrapping a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthTime(pub TimeStamp);

impl ToXmlElement for BirthTime {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("birthTime", &self.0)
    }
}

/// The value kinds an `<effectiveTime>` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveTimeValue {
    TimeStamp(TimeStamp),
    Interval(IntervalOfTime),
    Periodic(PeriodicIntervalOfTime),
}

impl RenderValue for EffectiveTimeValue {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        match self {
            EffectiveTimeValue::TimeStamp(value) => value.render_onto(el),
            EffectiveTimeValue::Interval(value) => value.render_onto(el),
            EffectiveTimeValue::Periodic(value) => value.render_onto(el),
        }
    }
}

impl From<TimeStamp> for EffectiveTimeValue {
    fn from(value: TimeStamp) -> Self {
        EffectiveTimeValue::TimeStamp(value)
    }
}

impl From<IntervalOfTime> for EffectiveTimeValue {
    fn from(value: IntervalOfTime) -> Self {
        EffectiveTimeValue::Interval(value)
    }
}

impl From<PeriodicIntervalOfTime> for EffectiveTimeValue {
    fn from(value: PeriodicIntervalOfTime) -> Self {
        EffectiveTimeValue::Periodic(value)
    }
}

/// `<effectiveTime>` wrapping a timestamp, interval or periodic
/// interval, plus the optional union operator.
///
/// When an act carries several effective times, every statement after
/// the first renders `operator="A"` to signal union semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveTime {
    value: EffectiveTimeValue,
    operator_append: bool,
}

impl EffectiveTime {
    pub fn new(value: impl Into<EffectiveTimeValue>) -> Self {
        EffectiveTime {
            value: value.into(),
            operator_append: false,
        }
    }

    pub fn set_operator_append(&mut self) {
        self.operator_append = true;
    }
}

impl ToXmlElement for EffectiveTime {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = element_with("effectiveTime", &self.value)?;

        if self.operator_append {
            el.set_attribute("operator", "A");
        }

        Ok(el)
    }
}

/// The value kinds a `<doseQuantity>` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityValue {
    Physical(PhysicalQuantity),
    Interval(IntervalOfTime),
}

impl RenderValue for QuantityValue {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        match self {
            QuantityValue::Physical(value) => value.render_onto(el),
            QuantityValue::Interval(value) => value.render_onto(el),
        }
    }
}

impl From<PhysicalQuantity> for QuantityValue {
    fn from(value: PhysicalQuantity) -> Self {
        QuantityValue::Physical(value)
    }
}

impl From<IntervalOfTime> for QuantityValue {
    fn from(value: IntervalOfTime) -> Self {
        QuantityValue::Interval(value)
    }
}

/// `<doseQuantity>` wrapping a physical quantity or interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseQuantity(pub QuantityValue);

impl ToXmlElement for DoseQuantity {
    fn to_xml_element(&self) -> Result<XmlElement> {
        element_with("doseQuantity", &self.0)
    }
}

/// The content kinds a `<text>` element accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    /// Plain character data
    Plain(String),
    /// Structured narrative (paragraphs, tables)
    Narrative(NarrativeString),
    /// Encapsulated data with a media type
    Encapsulated(EncapsulatedData),
    /// A pointer into the narrative of another node
    Pointer(ReferencePointer),
}

impl TextContent {
    pub fn is_empty(&self) -> bool {
        match self {
            TextContent::Plain(content) => content.is_empty(),
            TextContent::Narrative(narrative) => narrative.is_empty(),
            TextContent::Encapsulated(data) => data.content().is_empty(),
            TextContent::Pointer(_) => false,
        }
    }
}

impl From<&str> for TextContent {
    fn from(content: &str) -> Self {
        TextContent::Plain(content.to_string())
    }
}

impl From<String> for TextContent {
    fn from(content: String) -> Self {
        TextContent::Plain(content)
    }
}

impl From<NarrativeString> for TextContent {
    fn from(narrative: NarrativeString) -> Self {
        TextContent::Narrative(narrative)
    }
}

impl From<EncapsulatedData> for TextContent {
    fn from(data: EncapsulatedData) -> Self {
        TextContent::Encapsulated(data)
    }
}

impl From<ReferencePointer> for TextContent {
    fn from(pointer: ReferencePointer) -> Self {
        TextContent::Pointer(pointer)
    }
}

/// `<text>` wrapping any of the text content kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Text(pub TextContent);

impl ToXmlElement for Text {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("text");

        match &self.0 {
            TextContent::Plain(content) => el.append_text(content),
            TextContent::Narrative(narrative) => narrative.render_onto(&mut el)?,
            TextContent::Encapsulated(data) => data.render_onto(&mut el)?,
            TextContent::Pointer(pointer) => el.append_child(pointer.to_xml_element()?),
        }

        Ok(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn stamp() -> TimeStamp {
        TimeStamp::new(DateTime::parse_from_rfc3339("2014-08-27T01:43:12+02:00").unwrap())
    }

    #[test]
    fn test_effective_time_without_operator() {
        let et = EffectiveTime::new(stamp());
        let el = et.to_xml_element().unwrap();

        assert_eq!(el.tag(), "effectiveTime");
        assert_eq!(el.attribute("operator"), None);
    }

    #[test]
    fn test_effective_time_with_append_operator() {
        let mut et = EffectiveTime::new(stamp());
        et.set_operator_append();
        let el = et.to_xml_element().unwrap();

        assert_eq!(el.attribute("operator"), Some("A"));
    }

    #[test]
    fn test_text_with_pointer_content() {
        let mut manager = crate::reference::ReferenceManager::new();
        let text = Text(manager.pointer("Medication_6").into());
        let el = text.to_xml_element().unwrap();

        let reference = el.first_child("reference").unwrap();
        assert_eq!(reference.attribute("value"), Some("#Medication_6"));
    }
}
