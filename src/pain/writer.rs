use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::tree::{Element, Node};
use crate::core::SepaError;

fn xml_io(e: std::io::Error) -> SepaError {
    SepaError::Xml(format!("XML write error: {e}"))
}

/// XML prolog attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: String,
}

/// Serializes a [`Node`] tree through quick-xml.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Start a document with the given prolog; `indent` is the number of
    /// spaces per nesting level, `None` for compact output.
    pub fn new(declaration: &Declaration, indent: Option<usize>) -> Result<Self, SepaError> {
        let mut writer = match indent {
            Some(width) => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', width),
            None => Writer::new(Cursor::new(Vec::new())),
        };
        writer
            .write_event(Event::Decl(BytesDecl::new(
                declaration.version.as_str(),
                Some(declaration.encoding.as_str()),
                None,
            )))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, SepaError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| SepaError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn write_node(&mut self, tag: &str, node: &Node) -> Result<&mut Self, SepaError> {
        match node {
            Node::Text(text) => self.text_element(tag, text),
            Node::Element(element) => self.write_element(tag, element),
            Node::Repeated(entries) => {
                for entry in entries {
                    self.write_node(tag, entry)?;
                }
                Ok(self)
            }
        }
    }

    pub fn write_element(&mut self, tag: &str, element: &Element) -> Result<&mut Self, SepaError> {
        let mut start = BytesStart::new(tag);
        for (k, v) in element.attributes() {
            start.push_attribute((k.as_str(), v.as_str()));
        }
        if element.is_empty() {
            self.writer
                .write_event(Event::Empty(start))
                .map_err(xml_io)?;
            return Ok(self);
        }

        self.writer
            .write_event(Event::Start(start))
            .map_err(xml_io)?;
        if let Some(text) = element.text() {
            self.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_io)?;
        }
        for (child_tag, child) in element.children() {
            self.write_node(child_tag, child)?;
        }
        self.end_element(tag)
    }

    pub fn text_element(&mut self, tag: &str, text: &str) -> Result<&mut Self, SepaError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(xml_io)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(tag)
    }

    fn end_element(&mut self, tag: &str) -> Result<&mut Self, SepaError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(xml_io)?;
        Ok(self)
    }
}

/// Serialize `root` as the document element `root_tag`.
pub fn write_document(
    declaration: &Declaration,
    root_tag: &str,
    root: &Element,
    indent: Option<usize>,
) -> Result<String, SepaError> {
    let mut w = XmlWriter::new(declaration, indent)?;
    w.write_element(root_tag, root)?;
    w.into_string()
}
