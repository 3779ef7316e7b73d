use crate::{RenderValue, Result};
use harbor_xml::XmlElement;

/// An instance identifier (HL7 `II`): an OID/UUID root with an optional
/// extension and an optional assigning-authority name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentifier {
    root: String,
    extension: Option<String>,
    assigning_authority_name: Option<String>,
}

impl InstanceIdentifier {
    pub fn new(root: impl Into<String>) -> Self {
        InstanceIdentifier {
            root: root.into(),
            extension: None,
            assigning_authority_name: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_assigning_authority_name(mut self, name: impl Into<String>) -> Self {
        self.assigning_authority_name = Some(name.into());
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn assigning_authority_name(&self) -> Option<&str> {
        self.assigning_authority_name.as_deref()
    }

    pub fn set_root(&mut self, root: impl Into<String>) {
        self.root = root.into();
    }

    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = Some(extension.into());
    }
}

impl RenderValue for InstanceIdentifier {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("root", &self.root);

        if let Some(extension) = &self.extension {
            el.set_attribute("extension", extension);
        }

        if let Some(name) = &self.assigning_authority_name {
            el.set_attribute("assigningAuthorityName", name);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only() {
        let ii = InstanceIdentifier::new("1.2.3.4");
        let mut el = XmlElement::new("id");
        ii.render_onto(&mut el).unwrap();

        assert_eq!(
            harbor_xml::element_to_string(&el).unwrap(),
            r#"<id root="1.2.3.4"/>"#
        );
    }

    #[test]
    fn test_root_and_extension() {
        let ii = InstanceIdentifier::new("1.2.3.4").with_extension("chill/abrumet");
        let mut el = XmlElement::new("id");
        ii.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("root"), Some("1.2.3.4"));
        assert_eq!(el.attribute("extension"), Some("chill/abrumet"));
        assert_eq!(el.attribute("assigningAuthorityName"), None);
    }

    #[test]
    fn test_render_twice_is_idempotent() {
        let ii = InstanceIdentifier::new("1.2.3.4").with_assigning_authority_name("Good Health");
        let mut el = XmlElement::new("id");
        ii.render_onto(&mut el).unwrap();
        ii.render_onto(&mut el).unwrap();

        assert_eq!(el.attributes().len(), 2);
    }
}
