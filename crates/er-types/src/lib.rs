//! Shared type definitions for the event registration web client.
//!
//! This crate holds the pieces of the UI that do not need a browser: wire
//! DTOs, form validation, the session gate and the admin roster reducer. It
//! compiles for both native targets and wasm.

pub mod auth;
pub mod config;
pub mod roster;
pub mod session;
pub mod users;
pub mod validation;
