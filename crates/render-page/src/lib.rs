//! The "page" backend: lowers a lesson plan into a flat list of page content
//! blocks (tables, text, lists), the shape a print/PDF document takes.
//!
//! Batched plans are concatenated with an explicit [`PageBlock::PageBreak`]
//! before every plan except the first.

mod renderer;
mod tree;

pub use renderer::{PageRenderer, PageTheme, render_page, render_page_batch};
pub use tree::{
    BlockStyle, ListBlock, PageBlock, PageCell, PageDocument, PageTable, StyleAttributes,
    TableLayout, TextBlock, TextFragment,
};
