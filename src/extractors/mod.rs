//! Deterministic field extractors for loosely-shaped backend records.
//!
//! The backend stores contact submissions as open documents: beyond a
//! handful of conventional fields, keys and nesting vary per submission.
//! Extractors locate a specific field heuristically instead of assuming a
//! schema. They are pure functions with no I/O, safe to run once per record
//! on every render pass.

pub mod phone;

pub use phone::{dial_uri, extract_phone, PhoneField};
