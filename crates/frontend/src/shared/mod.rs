pub mod clipboard;
pub mod components;
pub mod keyboard;
pub mod path;
