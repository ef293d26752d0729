//! Anteroom — admin-side client for the studio site backend.
//!
//! Talks to the REST backend that serves the public site: lists contact
//! submissions, digs phone numbers out of their loosely-shaped records,
//! and manages the project portfolio. One binary, no local state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod config;
pub mod extractors;
pub mod inbox;
pub mod logging;
