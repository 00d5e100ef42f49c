pub mod alert;
pub mod button;
pub mod checkbox;

pub use alert::Alert;
pub use button::Button;
pub use checkbox::Checkbox;
