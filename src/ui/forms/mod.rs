//! Form components

mod field_renderer;
pub mod wizard;
