use crate::{Error, RenderValue, Result};
use harbor_xml::XmlElement;

/// A flat entity name, rendered as a `<name>` child with text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    string: String,
}

impl EntityName {
    pub fn new(string: impl Into<String>) -> Self {
        EntityName {
            string: string.into(),
        }
    }

    pub fn string(&self) -> &str {
        &self.string
    }
}

impl RenderValue for EntityName {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        let mut name = XmlElement::new("name");
        name.append_text(&self.string);
        el.append_child(name);
        Ok(())
    }
}

/// The structured part kinds a person name may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePartKind {
    Prefix,
    Given,
    Family,
    Suffix,
}

impl NamePartKind {
    fn tag(self) -> &'static str {
        match self {
            NamePartKind::Prefix => "prefix",
            NamePartKind::Given => "given",
            NamePartKind::Family => "family",
            NamePartKind::Suffix => "suffix",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NamePart {
    kind: NamePartKind,
    value: String,
    qualifier: Option<String>,
}

/// A person name: either an ordered list of structured parts or a flat
/// string. Parts win when both are present; a name with neither is a
/// render-time error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName {
    parts: Vec<NamePart>,
    string: Option<String>,
}

impl PersonName {
    pub fn new() -> Self {
        PersonName::default()
    }

    pub fn from_string(string: impl Into<String>) -> Self {
        PersonName {
            parts: Vec::new(),
            string: Some(string.into()),
        }
    }

    /// Appends a structured part. Parts render in insertion order.
    pub fn add_part(mut self, kind: NamePartKind, value: impl Into<String>) -> Self {
        self.parts.push(NamePart {
            kind,
            value: value.into(),
            qualifier: None,
        });
        self
    }

    pub fn add_part_with_qualifier(
        mut self,
        kind: NamePartKind,
        value: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        self.parts.push(NamePart {
            kind,
            value: value.into(),
            qualifier: Some(qualifier.into()),
        });
        self
    }

    pub fn is_structured(&self) -> bool {
        !self.parts.is_empty()
    }
}

impl RenderValue for PersonName {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        if !self.parts.is_empty() {
            let mut name = XmlElement::new("name");
            for part in &self.parts {
                let mut part_el = XmlElement::new(part.kind.tag());
                if let Some(qualifier) = &part.qualifier {
                    part_el.set_attribute("qualifier", qualifier);
                }
                part_el.append_text(&part.value);
                name.append_child(part_el);
            }
            el.append_child(name);
        } else if let Some(string) = &self.string {
            EntityName::new(string).render_onto(el)?;
        } else {
            return Err(Error::EmptyPersonName);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_parts_in_insertion_order() {
        let name = PersonName::new()
            .add_part(NamePartKind::Given, "Robert")
            .add_part(NamePartKind::Family, "Dolin")
            .add_part(NamePartKind::Suffix, "MD");
        let mut el = XmlElement::new("assignedPerson");
        name.render_onto(&mut el).unwrap();

        assert_eq!(
            harbor_xml::element_to_string(&el).unwrap(),
            "<assignedPerson><name><given>Robert</given><family>Dolin</family>\
             <suffix>MD</suffix></name></assignedPerson>"
        );
    }

    #[test]
    fn test_flat_string_fallback() {
        let name = PersonName::from_string("Robert Dolin");
        let mut el = XmlElement::new("assignedPerson");
        name.render_onto(&mut el).unwrap();

        assert_eq!(el.first_child("name").unwrap().text(), "Robert Dolin");
    }

    #[test]
    fn test_empty_name_fails() {
        let name = PersonName::new();
        let mut el = XmlElement::new("assignedPerson");

        assert!(matches!(
            name.render_onto(&mut el),
            Err(Error::EmptyPersonName)
        ));
    }

    #[test]
    fn test_part_qualifier_attribute() {
        let name = PersonName::new().add_part_with_qualifier(NamePartKind::Prefix, "Dr", "AC");
        let mut el = XmlElement::new("assignedPerson");
        name.render_onto(&mut el).unwrap();

        let prefix = el.first_child("name").unwrap().first_child("prefix").unwrap();
        assert_eq!(prefix.attribute("qualifier"), Some("AC"));
        assert_eq!(prefix.text(), "Dr");
    }
}
