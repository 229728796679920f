//! Billed Core
//!
//! Layered architecture:
//! - domain: Core entities and display projections
//! - store: Remote data service contract
//! - session: Local session store contract and session lifecycle
//! - flows: Event-driven logic for login, bill submission and bill listing
//!
//! This crate is framework-free: the browser UI wires DOM events and
//! localStorage into the traits defined here, and tests drive the same
//! flows with in-memory implementations.

pub mod domain;
pub mod flows;
pub mod format;
pub mod session;
pub mod store;
