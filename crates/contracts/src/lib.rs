//! Shared wire types for the error inspection page.
//!
//! The frontend consumes these read-only; the page host embeds them as JSON.

pub mod occurrence;
pub mod share;

pub use occurrence::{DebugDump, ErrorOccurrence, Glow, StackFrame};
pub use share::{SectionName, ShareRequest, ShareResponse};
