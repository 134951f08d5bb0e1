//! Common reusable UI components
//!
//! Feedback widgets shared by both forms of the pane.

pub mod message;

pub use message::{ErrorMessage, FieldMessage, SuccessMessage};
