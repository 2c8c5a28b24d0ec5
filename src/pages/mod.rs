//! Page modules for route-level screens.
//!
//! Pages render inside [`crate::router::components::Guarded`], so they can
//! assume the session already satisfies their route's policy.

pub mod admin;
pub mod dashboard;
pub(crate) mod format;
pub mod login;
pub mod not_found;
pub mod register;
pub mod student;
pub mod teacher;
