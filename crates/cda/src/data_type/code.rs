use crate::{RenderValue, Result};
use harbor_xml::XmlElement;

/// A coded value (HL7 `CV`/`CE`): a code with optional display name and
/// code-system metadata.
///
/// Only `code` is always emitted; the optional fields are written only
/// when present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodedValue {
    code: String,
    display_name: Option<String>,
    code_system: Option<String>,
    code_system_name: Option<String>,
}

impl CodedValue {
    pub fn new(code: impl Into<String>) -> Self {
        CodedValue {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_code_system(mut self, code_system: impl Into<String>) -> Self {
        self.code_system = Some(code_system.into());
        self
    }

    pub fn with_code_system_name(mut self, code_system_name: impl Into<String>) -> Self {
        self.code_system_name = Some(code_system_name.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl RenderValue for CodedValue {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("code", &self.code);

        if let Some(display_name) = present(&self.display_name) {
            el.set_attribute("displayName", display_name);
        }

        if let Some(code_system) = present(&self.code_system) {
            el.set_attribute("codeSystem", code_system);
        }

        if let Some(code_system_name) = present(&self.code_system_name) {
            el.set_attribute("codeSystemName", code_system_name);
        }

        Ok(())
    }
}

/// An ordinal coded value; encodes identically to [`CodedValue`].
pub type CodedOrdinal = CodedValue;

/// A coded value carrying nothing but the code itself, used for
/// `statusCode` and `languageCode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedSimple {
    code: String,
}

impl CodedSimple {
    pub fn new(code: impl Into<String>) -> Self {
        CodedSimple { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl RenderValue for CodedSimple {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("code", &self.code);
        Ok(())
    }
}

/// LOINC code-system constants.
pub struct LoincCode;

impl LoincCode {
    pub const CODE_SYSTEM: &'static str = "2.16.840.1.113883.6.1";
    pub const CODE_SYSTEM_NAME: &'static str = "LOINC";

    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> CodedValue {
        CodedValue::new(code)
            .with_display_name(display_name)
            .with_code_system(Self::CODE_SYSTEM)
            .with_code_system_name(Self::CODE_SYSTEM_NAME)
    }
}

/// SNOMED CT code-system constants.
pub struct SnomedCtCode;

impl SnomedCtCode {
    pub const CODE_SYSTEM: &'static str = "2.16.840.1.113883.6.96";
    pub const CODE_SYSTEM_NAME: &'static str = "SNOMED CT";

    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> CodedValue {
        CodedValue::new(code)
            .with_display_name(display_name)
            .with_code_system(Self::CODE_SYSTEM)
            .with_code_system_name(Self::CODE_SYSTEM_NAME)
    }
}

/// Document confidentiality codes (code system 2.16.840.1.113883.5.25).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidentiality {
    Normal,
    Restricted,
    VeryRestricted,
}

impl Confidentiality {
    pub const CODE_SYSTEM: &'static str = "2.16.840.1.113883.5.25";
    pub const CODE_SYSTEM_NAME: &'static str = "Confidentiality";

    pub fn key(self) -> &'static str {
        match self {
            Confidentiality::Normal => "N",
            Confidentiality::Restricted => "R",
            Confidentiality::VeryRestricted => "V",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Confidentiality::Normal => "Normal",
            Confidentiality::Restricted => "Restricted",
            Confidentiality::VeryRestricted => "Very Restricted",
        }
    }

    pub fn to_coded_value(self) -> CodedValue {
        CodedValue::new(self.key())
            .with_display_name(self.display_name())
            .with_code_system(Self::CODE_SYSTEM)
            .with_code_system_name(Self::CODE_SYSTEM_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_only() {
        let code = CodedValue::new("42349-1");
        let mut el = XmlElement::new("code");
        code.render_onto(&mut el).unwrap();

        assert_eq!(el.attributes().len(), 1);
        assert_eq!(el.attribute("code"), Some("42349-1"));
    }

    #[test]
    fn test_empty_optional_is_omitted() {
        let code = CodedValue::new("42349-1").with_display_name("");
        let mut el = XmlElement::new("code");
        code.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("displayName"), None);
    }

    #[test]
    fn test_loinc_constructor() {
        let code = LoincCode::new("57133-1", "REASON FOR REFERRAL");
        let mut el = XmlElement::new("code");
        code.render_onto(&mut el).unwrap();

        assert_eq!(
            harbor_xml::element_to_string(&el).unwrap(),
            r#"<code code="57133-1" displayName="REASON FOR REFERRAL" codeSystem="2.16.840.1.113883.6.1" codeSystemName="LOINC"/>"#
        );
    }

    #[test]
    fn test_confidentiality_table() {
        let code = Confidentiality::Restricted.to_coded_value();

        assert_eq!(code.code(), "R");
        assert_eq!(code.display_name(), Some("Restricted"));
    }
}
