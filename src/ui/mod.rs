pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;

pub use auth::{AuthenticatorHandle, Logister, provide_authenticator};
pub use icon::{Icon, icons};
