//! Serialization of the tree to text through quick-xml events.

use crate::error::Result;
use crate::tree::{XmlDocument, XmlElement, XmlNode};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Serialize a document to a string, including the XML declaration.
pub fn document_to_string(doc: &XmlDocument) -> Result<String> {
    let mut buffer = Vec::new();
    document_to_writer(doc, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serialize a single element subtree to a string, without a declaration.
pub fn element_to_string(el: &XmlElement) -> Result<String> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new(&mut buffer);
    write_element(&mut writer, el)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serialize a document to an arbitrary writer.
pub fn document_to_writer<W: Write>(doc: &XmlDocument, writer: W) -> Result<()> {
    let mut writer = Writer::new(writer);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, doc.root())
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(el.tag());
    for (name, value) in el.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if !el.has_children() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in el.children() {
        match child {
            XmlNode::Element(inner) => write_element(writer, inner)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            XmlNode::CData(content) => write_cdata(writer, content)?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(el.tag())))?;

    Ok(())
}

// A `]]>` inside the content would terminate the section early, so the
// content is emitted as adjacent sections split at each occurrence
// (`…]]` ends one section, `>…` starts the next).
fn write_cdata<W: Write>(writer: &mut Writer<W>, content: &str) -> Result<()> {
    let mut rest = content;
    while let Some(pos) = rest.find("]]>") {
        let (head, tail) = rest.split_at(pos + 2);
        writer.write_event(Event::CData(BytesCData::new(head)))?;
        rest = tail;
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))?;
    Ok(())
}
