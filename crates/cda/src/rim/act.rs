//! Clinical acts: things done or observed, recorded inside entries.

use crate::data_type::{BooleanValue, CodedSimple, CodedValue, InstanceIdentifier, Set};
use crate::element::{
    Code, DoseQuantity, EffectiveTime, EffectiveTimeValue, Id, QuantityValue, RouteCode,
    StatusCode, TemplateId, Text, TextContent,
};
use crate::rim::participation::Consumable;
use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::XmlElement;

fn append_effective_times(el: &mut XmlElement, times: &[EffectiveTimeValue]) -> Result<()> {
    for (index, time) in times.iter().enumerate() {
        let mut effective_time = EffectiveTime::new(time.clone());
        if index > 0 {
            effective_time.set_operator_append();
        }
        el.append_child(effective_time.to_xml_element()?);
    }
    Ok(())
}

/// A generic act (`classCode="ACT"`).
///
/// The mood code defaults to `EVN` (an event that happened) and may be
/// varied where the domain allows it; the class code is fixed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Act {
    template_ids: Vec<InstanceIdentifier>,
    ids: Set<InstanceIdentifier>,
    code: Option<CodedValue>,
    negation_ind: Option<BooleanValue>,
    text: Option<TextContent>,
    status_code: Option<CodedSimple>,
    effective_times: Vec<EffectiveTimeValue>,
    mood_code: Option<&'static str>,
}

impl Act {
    pub const CLASS_CODE: &'static str = "ACT";
    pub const DEFAULT_MOOD_CODE: &'static str = "EVN";

    pub fn new() -> Self {
        Act::default()
    }

    pub fn add_template_id(&mut self, id: InstanceIdentifier) -> &mut Self {
        self.template_ids.push(id);
        self
    }

    pub fn set_ids(&mut self, ids: Set<InstanceIdentifier>) -> &mut Self {
        self.ids = ids;
        self
    }

    pub fn set_code(&mut self, code: CodedValue) -> &mut Self {
        self.code = Some(code);
        self
    }

    pub fn set_negation_ind(&mut self, negation: bool) -> &mut Self {
        self.negation_ind = Some(BooleanValue::new(negation, "negationInd"));
        self
    }

    pub fn set_text(&mut self, text: impl Into<TextContent>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_status_code(&mut self, status: CodedSimple) -> &mut Self {
        self.status_code = Some(status);
        self
    }

    /// Appends an effective-time statement. The first renders without an
    /// operator; every later one renders `operator="A"`.
    pub fn add_effective_time(&mut self, time: impl Into<EffectiveTimeValue>) -> &mut Self {
        self.effective_times.push(time.into());
        self
    }

    /// Replaces all effective-time statements with a single one.
    pub fn set_effective_time(&mut self, time: impl Into<EffectiveTimeValue>) -> &mut Self {
        self.effective_times = vec![time.into()];
        self
    }

    pub fn set_mood_code(&mut self, mood_code: &'static str) -> &mut Self {
        self.mood_code = Some(mood_code);
        self
    }

    pub fn mood_code(&self) -> &'static str {
        self.mood_code.unwrap_or(Self::DEFAULT_MOOD_CODE)
    }

    pub fn effective_times(&self) -> &[EffectiveTimeValue] {
        &self.effective_times
    }
}

impl ToXmlElement for Act {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("act");
        el.set_attribute("classCode", Self::CLASS_CODE);
        el.set_attribute("moodCode", self.mood_code());

        if let Some(negation) = &self.negation_ind {
            negation.render_onto(&mut el)?;
        }

        for id in &self.template_ids {
            el.append_child(TemplateId(id.clone()).to_xml_element()?);
        }

        for id in &self.ids {
            el.append_child(Id(id.clone()).to_xml_element()?);
        }

        if let Some(code) = &self.code {
            el.append_child(Code(code.clone()).to_xml_element()?);
        }

        if let Some(text) = &self.text {
            el.append_child(Text(text.clone()).to_xml_element()?);
        }

        if let Some(status) = &self.status_code {
            el.append_child(StatusCode(status.clone()).to_xml_element()?);
        }

        append_effective_times(&mut el, &self.effective_times)?;

        Ok(el)
    }
}

/// Administration of a substance (`classCode="SBADM"`): a medication
/// statement with route, dose and the consumed product.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubstanceAdministration {
    template_ids: Vec<InstanceIdentifier>,
    ids: Set<InstanceIdentifier>,
    text: Option<TextContent>,
    status_code: Option<CodedSimple>,
    effective_times: Vec<EffectiveTimeValue>,
    route_code: Option<CodedValue>,
    dose_quantity: Option<QuantityValue>,
    consumable: Option<Consumable>,
    mood_code: Option<&'static str>,
}

impl SubstanceAdministration {
    pub const CLASS_CODE: &'static str = "SBADM";

    pub fn new() -> Self {
        SubstanceAdministration::default()
    }

    pub fn add_template_id(&mut self, id: InstanceIdentifier) -> &mut Self {
        self.template_ids.push(id);
        self
    }

    pub fn set_ids(&mut self, ids: Set<InstanceIdentifier>) -> &mut Self {
        self.ids = ids;
        self
    }

    pub fn set_text(&mut self, text: impl Into<TextContent>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_status_code(&mut self, status: CodedSimple) -> &mut Self {
        self.status_code = Some(status);
        self
    }

    pub fn add_effective_time(&mut self, time: impl Into<EffectiveTimeValue>) -> &mut Self {
        self.effective_times.push(time.into());
        self
    }

    pub fn set_route_code(&mut self, route: CodedValue) -> &mut Self {
        self.route_code = Some(route);
        self
    }

    pub fn set_dose_quantity(&mut self, dose: impl Into<QuantityValue>) -> &mut Self {
        self.dose_quantity = Some(dose.into());
        self
    }

    pub fn set_consumable(&mut self, consumable: Consumable) -> &mut Self {
        self.consumable = Some(consumable);
        self
    }

    pub fn set_mood_code(&mut self, mood_code: &'static str) -> &mut Self {
        self.mood_code = Some(mood_code);
        self
    }

    pub fn mood_code(&self) -> &'static str {
        self.mood_code.unwrap_or(Act::DEFAULT_MOOD_CODE)
    }
}

impl ToXmlElement for SubstanceAdministration {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("substanceAdministration");
        el.set_attribute("classCode", Self::CLASS_CODE);
        el.set_attribute("moodCode", self.mood_code());

        for id in &self.template_ids {
            el.append_child(TemplateId(id.clone()).to_xml_element()?);
        }

        for id in &self.ids {
            el.append_child(Id(id.clone()).to_xml_element()?);
        }

        if let Some(text) = &self.text {
            el.append_child(Text(text.clone()).to_xml_element()?);
        }

        if let Some(status) = &self.status_code {
            el.append_child(StatusCode(status.clone()).to_xml_element()?);
        }

        append_effective_times(&mut el, &self.effective_times)?;

        if let Some(route) = &self.route_code {
            el.append_child(RouteCode(route.clone()).to_xml_element()?);
        }

        if let Some(dose) = &self.dose_quantity {
            el.append_child(DoseQuantity(dose.clone()).to_xml_element()?);
        }

        if let Some(consumable) = &self.consumable {
            el.append_child(consumable.to_xml_element()?);
        }

        Ok(el)
    }
}

/// The act kinds an entry accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryAct {
    Act(Act),
    SubstanceAdministration(SubstanceAdministration),
}

impl ToXmlElement for EntryAct {
    fn to_xml_element(&self) -> Result<XmlElement> {
        match self {
            EntryAct::Act(act) => act.to_xml_element(),
            EntryAct::SubstanceAdministration(sbadm) => sbadm.to_xml_element(),
        }
    }
}

impl From<Act> for EntryAct {
    fn from(act: Act) -> Self {
        EntryAct::Act(act)
    }
}

impl From<SubstanceAdministration> for EntryAct {
    fn from(sbadm: SubstanceAdministration) -> Self {
        EntryAct::SubstanceAdministration(sbadm)
    }
}
