//! The element/attribute/content tree.

/// A node in the tree: an element, escaped character data, or a CDATA
/// section that is emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
}

/// A single element: a tag, ordered attributes and ordered children.
///
/// Attributes keep insertion order; setting an attribute that already
/// exists replaces its value in place, so repeated rendering of the same
/// value onto a node is idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        XmlElement {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn append_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::Text(text.into()));
    }

    pub fn append_cdata(&mut self, content: impl Into<String>) {
        self.children.push(XmlNode::CData(content.into()));
    }

    pub fn append_node(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Iterates over direct element children, skipping character content.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First direct child element with the given tag.
    pub fn first_child(&self, tag: &str) -> Option<&XmlElement> {
        self.child_elements().find(|el| el.tag() == tag)
    }

    /// Concatenated direct character content (text and CDATA children).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                XmlNode::Text(t) | XmlNode::CData(t) => out.push_str(t),
                XmlNode::Element(_) => {}
            }
        }
        out
    }
}

/// An XML document: a root element plus the XML declaration emitted in
/// front of it when serializing.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        XmlDocument { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.root
    }

    pub fn to_xml_string(&self) -> crate::Result<String> {
        crate::writer::document_to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces_existing() {
        let mut el = XmlElement::new("id");
        el.set_attribute("root", "1.2.3");
        el.set_attribute("root", "4.5.6");

        assert_eq!(el.attribute("root"), Some("4.5.6"));
        assert_eq!(el.attributes().len(), 1);
    }

    #[test]
    fn test_child_lookup() {
        let mut parent = XmlElement::new("section");
        parent.append_child(XmlElement::new("title"));
        parent.append_child(XmlElement::new("text"));
        parent.append_text("stray");

        assert_eq!(parent.child_elements().count(), 2);
        assert!(parent.first_child("title").is_some());
        assert!(parent.first_child("entry").is_none());
    }

    #[test]
    fn test_text_concatenates_character_content() {
        let mut el = XmlElement::new("text");
        el.append_text("one ");
        el.append_cdata("two");

        assert_eq!(el.text(), "one two");
    }
}
