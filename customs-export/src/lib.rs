#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod address;
pub use address::{Address, split_address};

mod number;

mod settings;
pub use settings::{Declarant, ExportSettings};

mod xml;
pub use xml::{file_name, to_xml_string, write_declaration};

/// Everything that can stop a declaration from being rendered.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The declaration has no goods lines; the document requires at least one
    #[error("declaration {0} has no goods")]
    NoGoods(String),

    /// A date could not be formatted
    #[error("date formatting failed: {0}")]
    Date(#[from] time::error::Format),

    /// The XML writer failed
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The underlying sink failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered bytes were not UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
