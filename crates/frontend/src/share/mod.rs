//! The share workflow: pick report sections, submit a snapshot to the
//! configured endpoint, surface the resulting links or a failure.

pub mod api;
pub mod dropdown;
pub mod share_button;
pub mod state;

pub use dropdown::ShareDropdown;
pub use share_button::ShareButton;
pub use state::{ShareMachine, ShareOutcome, ShareSelection};
