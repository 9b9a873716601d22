//! Byte-level encoders for rendered trees.

mod docx;
mod pdf;

pub use docx::DocxEncoder;
pub use pdf::PdfEncoder;

use crate::error::EncodeError;
use crate::export::{ExportTarget, RenderedTree};
use std::io::{Seek, Write};

/// Serializes a [`RenderedTree`] into a concrete document format.
pub trait DocumentEncoder {
    /// Extension appended to the filename base, without the dot.
    fn extension(&self) -> &'static str;

    fn encode<W: Write + Seek>(&self, tree: &RenderedTree, writer: &mut W)
    -> Result<(), EncodeError>;
}

/// The default encoder for each target.
#[derive(Debug, Clone, Copy)]
pub enum DefaultEncoder {
    Docx(DocxEncoder),
    Pdf(PdfEncoder),
}

impl DefaultEncoder {
    pub fn for_target(target: ExportTarget) -> Self {
        match target {
            ExportTarget::Flow => DefaultEncoder::Docx(DocxEncoder),
            ExportTarget::Page => DefaultEncoder::Pdf(PdfEncoder::default()),
        }
    }
}

impl DocumentEncoder for DefaultEncoder {
    fn extension(&self) -> &'static str {
        match self {
            DefaultEncoder::Docx(e) => e.extension(),
            DefaultEncoder::Pdf(e) => e.extension(),
        }
    }

    fn encode<W: Write + Seek>(
        &self,
        tree: &RenderedTree,
        writer: &mut W,
    ) -> Result<(), EncodeError> {
        match self {
            DefaultEncoder::Docx(e) => e.encode(tree, writer),
            DefaultEncoder::Pdf(e) => e.encode(tree, writer),
        }
    }
}
