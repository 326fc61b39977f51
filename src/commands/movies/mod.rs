//! The command modules for the movie watch list.
//!
//! `intent` holds the pure parsing and paging logic, `run` the per-command
//! entry points dispatched from the message handler, and `ui` the response
//! content builders.

pub mod intent;
pub mod run;
pub mod ui;
