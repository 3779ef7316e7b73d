use crate::{Error, RenderValue, Result};
use harbor_xml::XmlElement;

/// A boolean rendered as a named attribute, e.g. `negationInd="true"`.
///
/// The target attribute name must be configured before rendering; a
/// value without one indicates an incompletely constructed graph and
/// fails at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanValue {
    value: bool,
    attribute: Option<String>,
}

impl BooleanValue {
    pub fn new(value: bool, attribute: impl Into<String>) -> Self {
        BooleanValue {
            value,
            attribute: Some(attribute.into()),
        }
    }

    /// A value whose attribute name is supplied later via
    /// [`BooleanValue::set_attribute_name`].
    pub fn unnamed(value: bool) -> Self {
        BooleanValue {
            value,
            attribute: None,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    pub fn set_attribute_name(&mut self, attribute: impl Into<String>) {
        self.attribute = Some(attribute.into());
    }
}

impl RenderValue for BooleanValue {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        let attribute = self
            .attribute
            .as_deref()
            .ok_or(Error::BooleanWithoutAttribute)?;

        el.set_attribute(attribute, if self.value { "true" } else { "false" });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_named_attribute() {
        let value = BooleanValue::new(true, "negationInd");
        let mut el = XmlElement::new("act");
        value.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("negationInd"), Some("true"));
    }

    #[test]
    fn test_missing_attribute_name_fails() {
        let value = BooleanValue::unnamed(false);
        let mut el = XmlElement::new("act");

        assert!(matches!(
            value.render_onto(&mut el),
            Err(Error::BooleanWithoutAttribute)
        ));
    }
}
