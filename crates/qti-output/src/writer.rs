//! Thin wrapper over the quick-xml writer shared by the item renderers.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::BuildError;
use crate::escape::escape_xml;

pub(crate) struct QtiWriter {
    xml: Writer<Vec<u8>>,
}

impl QtiWriter {
    /// Starts a document with the UTF-8 declaration.
    pub(crate) fn new() -> Result<Self, BuildError> {
        let mut writer = Self {
            xml: Writer::new_with_indent(Vec::new(), b' ', 2),
        };
        writer.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(writer)
    }

    /// Opens `name` with the given attributes. Attribute values are escaped.
    pub(crate) fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), BuildError> {
        self.write(Event::Start(element(name, attrs)))
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<(), BuildError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Writes a self-closing element.
    pub(crate) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), BuildError> {
        self.write(Event::Empty(element(name, attrs)))
    }

    /// Writes `<name attrs>text</name>`, escaping `text`.
    pub(crate) fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<(), BuildError> {
        self.start(name, attrs)?;
        self.write(Event::Text(BytesText::from_escaped(escape_xml(text))))?;
        self.end(name)
    }

    pub(crate) fn finish(self) -> Result<String, BuildError> {
        String::from_utf8(self.xml.into_inner()).map_err(|e| BuildError::Write(e.to_string()))
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), BuildError> {
        self.xml
            .write_event(event)
            .map_err(|e| BuildError::Write(e.to_string()))
    }
}

fn element<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for attr in attrs {
        start.push_attribute(*attr);
    }
    start
}
