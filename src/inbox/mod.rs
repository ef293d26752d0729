//! Contact inbox: submission views, rendering, and polling watch.
//!
//! Submissions arrive from the backend as schema-less JSON documents.
//! [`message::MessageRecord`] keeps the raw document and reads it through
//! accessors; [`render`] turns records into terminal text; [`watch`] polls
//! the listing endpoint and forwards unseen records.

pub mod message;
pub mod render;
pub mod watch;

pub use message::MessageRecord;
