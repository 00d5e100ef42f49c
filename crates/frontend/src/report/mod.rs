//! Content providers for the report sections. Each module exposes a
//! descriptor builder; conditional sections return `None` when the
//! occurrence has nothing to show, and the page compacts those away before
//! handing the list to the navigator.

pub mod context;
pub mod debug;
pub mod stack;
