//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication state behind a small mutation API,
//! `credentials` abstracts the browser storage it persists to, and `notice`
//! holds transient toasts.

pub mod credentials;
pub mod notice;
pub mod session;
