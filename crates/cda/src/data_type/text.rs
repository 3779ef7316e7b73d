use crate::element::table::Table;
use crate::{RenderValue, Result, ToXmlElement};
use harbor_xml::XmlElement;

/// The default media type, whose content is wrapped as CDATA.
pub const MEDIA_TYPE_PLAIN: &str = "text/plain";

/// Encapsulated content (HL7 `ED`): character or binary data with a
/// media type.
///
/// Plain-text content is emitted as a CDATA section so that markup-like
/// characters inside it are never interpreted as markup; any other media
/// type is emitted as escaped text. The `mediaType` attribute appears
/// only when it differs from the `text/plain` default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncapsulatedData {
    content: String,
    media_type: String,
}

impl EncapsulatedData {
    pub fn new(content: impl Into<String>) -> Self {
        EncapsulatedData {
            content: content.into(),
            media_type: MEDIA_TYPE_PLAIN.to_string(),
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

impl RenderValue for EncapsulatedData {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        if self.media_type != MEDIA_TYPE_PLAIN {
            el.set_attribute("mediaType", &self.media_type);
            el.append_text(&self.content);
        } else {
            el.append_cdata(&self.content);
        }

        Ok(())
    }
}

/// One block of structured narrative.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeBlock {
    Paragraph(String),
    Table(Table),
}

/// Structured narrative for a section `<text>`: an ordered sequence of
/// paragraphs and tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NarrativeString {
    blocks: Vec<NarrativeBlock>,
}

impl NarrativeString {
    pub fn new() -> Self {
        NarrativeString::default()
    }

    pub fn add_paragraph(&mut self, content: impl Into<String>) -> &mut Self {
        self.blocks.push(NarrativeBlock::Paragraph(content.into()));
        self
    }

    /// Appends an empty table and returns it for in-place building.
    pub fn create_table(&mut self) -> &mut Table {
        self.blocks.push(NarrativeBlock::Table(Table::new()));
        match self.blocks.last_mut() {
            Some(NarrativeBlock::Table(table)) => table,
            _ => unreachable!("last block was just pushed as a table"),
        }
    }

    pub fn blocks(&self) -> &[NarrativeBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl RenderValue for NarrativeString {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        for block in &self.blocks {
            match block {
                NarrativeBlock::Paragraph(content) => {
                    let mut paragraph = XmlElement::new("paragraph");
                    paragraph.append_text(content);
                    el.append_child(paragraph);
                }
                NarrativeBlock::Table(table) => {
                    el.append_child(table.to_xml_element()?);
                }
            }
        }

        Ok(())
    }
}
