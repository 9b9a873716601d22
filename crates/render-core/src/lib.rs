//! Core rendering abstractions shared by the document backends.
//!
//! This crate provides:
//! - [`RendersSections`], the capability every backend implements
//! - [`render_plan`] / [`render_batch`], which fix the canonical section order
//!   and the placement of breaks between batched plans
//! - [`RenderConfig`], the placeholder values printed in the header
//! - [`HeaderFields`], the nine header fields computed from a plan

mod config;
mod header;
mod sections;
mod traits;

pub use config::RenderConfig;
pub use header::{HeaderFields, LabeledField};
pub use sections::{Section, render_batch, render_fragment, render_plan};
pub use traits::{Fragment, RendersSections};
