pub mod xml;

pub use xml::{render_xml, write_document_xml};
