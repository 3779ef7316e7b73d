//! Narrative table structure: `table` > `thead`/`tbody` > `tr` > `th`/`td`.

use crate::reference::ReferenceAnchor;
use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::XmlElement;

/// Which half of the table a section is. A cell created inside the head
/// renders as `th`, inside the body as `td`; the choice is taken from
/// the owning section at creation time and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSectionKind {
    Head,
    Body,
}

impl TableSectionKind {
    fn section_tag(self) -> &'static str {
        match self {
            TableSectionKind::Head => "thead",
            TableSectionKind::Body => "tbody",
        }
    }

    fn cell_tag(self) -> &'static str {
        match self {
            TableSectionKind::Head => "th",
            TableSectionKind::Body => "td",
        }
    }
}

/// A narrative table owning exactly one head and one body section.
/// Empty sections are omitted from the output entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    thead: TableSection,
    tbody: TableSection,
}

impl Table {
    pub fn new() -> Self {
        Table {
            thead: TableSection::new(TableSectionKind::Head),
            tbody: TableSection::new(TableSectionKind::Body),
        }
    }

    pub fn thead(&mut self) -> &mut TableSection {
        &mut self.thead
    }

    pub fn tbody(&mut self) -> &mut TableSection {
        &mut self.tbody
    }
}

impl ToXmlElement for Table {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("table");

        if !self.thead.is_empty() {
            el.append_child(self.thead.to_xml_element()?);
        }

        if !self.tbody.is_empty() {
            el.append_child(self.tbody.to_xml_element()?);
        }

        Ok(el)
    }
}

/// A `thead` or `tbody`: an ordered list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    kind: TableSectionKind,
    rows: Vec<TableRow>,
}

impl Default for TableSection {
    fn default() -> Self {
        TableSection::new(TableSectionKind::Body)
    }
}

impl TableSection {
    fn new(kind: TableSectionKind) -> Self {
        TableSection {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> TableSectionKind {
        self.kind
    }

    /// Appends an empty row and returns it for in-place building.
    pub fn create_row(&mut self) -> &mut TableRow {
        self.rows.push(TableRow::new(self.kind));
        let index = self.rows.len() - 1;
        &mut self.rows[index]
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ToXmlElement for TableSection {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new(self.kind.section_tag());

        for row in &self.rows {
            el.append_child(row.to_xml_element()?);
        }

        Ok(el)
    }
}

/// A `tr`: an ordered list of cells, with an optional anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    section_kind: TableSectionKind,
    cells: Vec<TableCell>,
    reference: Option<ReferenceAnchor>,
}

impl TableRow {
    fn new(section_kind: TableSectionKind) -> Self {
        TableRow {
            section_kind,
            cells: Vec::new(),
            reference: None,
        }
    }

    /// Appends a cell whose tag (`th`/`td`) follows the owning section,
    /// and returns it for in-place building.
    pub fn create_cell(&mut self, content: impl Into<String>) -> &mut TableCell {
        self.cells.push(TableCell::new(self.section_kind, content));
        let index = self.cells.len() - 1;
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn set_reference(&mut self, reference: ReferenceAnchor) -> &mut Self {
        self.reference = Some(reference);
        self
    }
}

impl ToXmlElement for TableRow {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new("tr");

        if let Some(reference) = &self.reference {
            reference.render_onto(&mut el)?;
        }

        for cell in &self.cells {
            el.append_child(cell.to_xml_element()?);
        }

        Ok(el)
    }
}

/// A `th` or `td` with plain text content and an optional anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    section_kind: TableSectionKind,
    content: String,
    reference: Option<ReferenceAnchor>,
}

impl TableCell {
    fn new(section_kind: TableSectionKind, content: impl Into<String>) -> Self {
        TableCell {
            section_kind,
            content: content.into(),
            reference: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub fn set_reference(&mut self, reference: ReferenceAnchor) -> &mut Self {
        self.reference = Some(reference);
        self
    }
}

impl ToXmlElement for TableCell {
    fn to_xml_element(&self) -> Result<XmlElement> {
        let mut el = XmlElement::new(self.section_kind.cell_tag());

        if let Some(reference) = &self.reference {
            reference.render_onto(&mut el)?;
        }

        el.append_text(&self.content);

        Ok(el)
    }
}
