//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport and envelope decoding, `api` is the auth surface the
//! session store depends on, `course_api` covers the course pages, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod course_api;
pub mod error;
pub mod http;
pub mod types;
