//! Application pages module
//!
//! - Logister page (sign in / sign up)
//! - Not found page

mod logister;
mod not_found;

pub use logister::LogisterPage;
pub use not_found::NotFoundPage;
