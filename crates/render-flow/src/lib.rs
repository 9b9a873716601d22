//! The "flow" backend: lowers a lesson plan into a tree of sections holding
//! paragraphs and tables, the shape a word-processor document takes.
//!
//! Batched plans become consecutive [`FlowSection`]s; every section after the
//! first starts with a forced page break.

mod renderer;
mod tree;

pub use renderer::{FlowRenderer, FlowTheme, render_flow, render_flow_batch};
pub use tree::{
    BorderLine, BorderStyle, CellBorders, FlowBlock, FlowDocument, FlowSection, Paragraph, Run,
    SectionProperties, Spacing, Table, TableCell, TableRow, VerticalAlign,
};
