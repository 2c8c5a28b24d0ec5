//! Route table and navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `routes` is the static declaration of every page (path, title, access
//! policy, menu placement). `guard` is the pure decision function evaluated
//! for every navigation; `components` wires both into the Leptos router.

pub mod components;
pub mod guard;
pub mod routes;
