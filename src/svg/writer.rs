//! SVG serialization via `quick_xml::Writer`.

use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, Event},
};
use std::io::{self, Write};

use super::SvgElement;

/// Serialization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level. `0` writes the whole document on one line.
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Serialize `root` as UTF-8 without an XML declaration.
///
/// A trailing newline is appended when indenting.
pub fn write_document(root: &SvgElement, options: WriteOptions) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if options.indent == 0 {
        let mut writer = Writer::new(&mut buf);
        write_element(&mut writer, root)?;
    } else {
        let mut writer = Writer::new_with_indent(&mut buf, b' ', options.indent);
        write_element(&mut writer, root)?;
        buf.push(b'\n');
    }
    Ok(buf)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &SvgElement) -> io::Result<()> {
    let name = element.tag.name();
    let mut start = BytesStart::new(name);
    for (key, value) in element.attrs() {
        start.push_attribute((key, value));
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))
}
