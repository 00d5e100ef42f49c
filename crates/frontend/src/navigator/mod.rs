//! Tabbed navigation over the report sections.
//!
//! `state` holds the pure index machine, `tabs` the component around it.

pub mod state;
pub mod tabs;

pub use state::{Direction, TabStrip};
pub use tabs::{OccurrenceTabs, RenderError, TabDescriptor};
