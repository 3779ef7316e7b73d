//! Paired anchor/pointer references linking narrative and entries.
//!
//! A CDA document carries both a human-readable narrative and machine
//! readable entries; the two point at each other by identifier. The
//! per-document [`ReferenceManager`] hands out, for one logical name, an
//! anchor (an `ID` attribute on the host node) and a pointer (a
//! `<reference value="#name"/>` element placed inside another node).

use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::XmlElement;
use std::collections::HashMap;
use uuid::Uuid;

/// Renders as an `ID="name"` attribute identifying its host node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAnchor {
    name: String,
}

impl ReferenceAnchor {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl RenderValue for ReferenceAnchor {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("ID", &self.name);
        Ok(())
    }
}

/// Renders as a `<reference value="#name"/>` element pointing back at
/// the matching anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePointer {
    name: String,
}

impl ReferencePointer {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ToXmlElement for ReferencePointer {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("reference");
        el.set_attribute("value", format!("#{}", self.name));
        Ok(el)
    }
}

/// Per-document registry of paired references.
///
/// The first lookup of an unseen name creates the anchor and pointer
/// together; later lookups return values rendering the identical
/// identifier. One manager belongs to one document and shares its
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct ReferenceManager {
    pairs: HashMap<String, (ReferenceAnchor, ReferencePointer)>,
}

impl ReferenceManager {
    pub fn new() -> Self {
        ReferenceManager::default()
    }

    /// Registers a pair under a generated unique name and returns the
    /// name.
    pub fn create(&mut self) -> String {
        let name = Uuid::new_v4().simple().to_string();
        self.ensure(&name);
        name
    }

    /// The anchor half of the pair registered under `name`, creating the
    /// pair on first use.
    pub fn anchor(&mut self, name: &str) -> ReferenceAnchor {
        self.ensure(name);
        self.pairs[name].0.clone()
    }

    /// The pointer half of the pair registered under `name`, creating
    /// the pair on first use.
    pub fn pointer(&mut self, name: &str) -> ReferencePointer {
        self.ensure(name);
        self.pairs[name].1.clone()
    }

    fn ensure(&mut self, name: &str) {
        if !self.pairs.contains_key(name) {
            tracing::debug!(reference = name, "creating reference pair");
            self.pairs.insert(
                name.to_string(),
                (
                    ReferenceAnchor {
                        name: name.to_string(),
                    },
                    ReferencePointer {
                        name: name.to_string(),
                    },
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_and_pointer_share_the_name() {
        let mut manager = ReferenceManager::new();
        let anchor = manager.anchor("med1");
        let pointer = manager.pointer("med1");

        let mut host = XmlElement::new("td");
        anchor.render_onto(&mut host).unwrap();
        assert_eq!(host.attribute("ID"), Some("med1"));

        let el = pointer.to_xml_element().unwrap();
        assert_eq!(el.attribute("value"), Some("#med1"));
    }

    #[test]
    fn test_repeated_lookup_returns_the_same_pair() {
        let mut manager = ReferenceManager::new();
        let first = manager.anchor("row");
        let second = manager.anchor("row");

        assert_eq!(first, second);
        assert_eq!(manager.pointer("row").name(), "row");
    }

    #[test]
    fn test_generated_names_are_unique() {
        let mut manager = ReferenceManager::new();
        let a = manager.create();
        let b = manager.create();

        assert_ne!(a, b);
        assert_eq!(manager.anchor(&a).name(), a);
    }
}
