use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::document::DocumentNode;

const INDENT_WIDTH: usize = 4;

/// Write a document as indented XML, returning the number of bytes written.
///
/// The file is created (or truncated) at `path`; the parent directory must
/// already exist. A failed write may leave a partial file behind.
pub fn write_document_xml(path: &Path, root: &DocumentNode) -> io::Result<u64> {
    let writer = BufWriter::new(File::create(path)?);
    let mut counting = CountingWriter::new(writer);
    render_xml(&mut counting, root)?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

/// Serialize a document with a declaration and four spaces per level.
///
/// Only `&`, `<` and `>` are escaped in text; quotes and apostrophes in
/// names such as `K'mpec` are written as-is.
pub fn render_xml<W: Write>(writer: &mut W, root: &DocumentNode) -> io::Result<()> {
    let mut xml = Writer::new_with_indent(&mut *writer, b' ', INDENT_WIDTH);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))?;
    write_node(&mut xml, root)?;
    writer.write_all(b"\n")
}

fn write_node<W: Write>(xml: &mut Writer<W>, node: &DocumentNode) -> io::Result<()> {
    let tag = node.tag();
    if node.text().is_none() && node.children().is_empty() {
        return xml.write_event(Event::Empty(BytesStart::new(tag)));
    }

    xml.write_event(Event::Start(BytesStart::new(tag)))?;
    if let Some(text) = node.text() {
        xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    }
    for child in node.children() {
        write_node(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(tag)))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
