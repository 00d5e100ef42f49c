pub mod copyable_url;
pub mod ui;
