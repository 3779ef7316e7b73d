use crate::{RenderValue, Result};
use harbor_xml::XmlElement;

/// A homogeneous, ordered collection of values.
///
/// The element type is fixed by the generic parameter, so inserting a
/// mismatched value is a compile error rather than a runtime rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T> {
    elements: Vec<T>,
}

impl<T> Set<T> {
    pub fn new() -> Self {
        Set {
            elements: Vec::new(),
        }
    }

    /// Chainable insertion for building a set in one expression.
    pub fn add(mut self, element: T) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Set { elements }
    }
}

impl<T> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: RenderValue> RenderValue for Set<T> {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        for element in &self.elements {
            element.render_onto(el)?;
        }
        Ok(())
    }
}
