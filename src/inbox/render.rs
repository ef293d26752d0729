//! Plain-text rendering for inbox listings.
//!
//! Kept free of I/O so the formatting is testable; the CLI just prints the
//! returned strings.

use crate::extractors::dial_uri;

use super::message::MessageRecord;

/// Shown in place of a phone number when a record carries none.
pub const PHONE_UNAVAILABLE: &str = "not available";

/// One-line summary: unread marker, id, date, sender, phone.
pub fn summary_line(record: &MessageRecord) -> String {
    let marker = if record.is_read() { ' ' } else { '*' };
    let id = record.id().unwrap_or("-");
    let name = record.name().unwrap_or("(unknown)");
    let date = record
        .created_at()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_owned());
    let phone = record
        .phone()
        .map(|field| field.value)
        .unwrap_or_else(|| PHONE_UNAVAILABLE.to_owned());
    format!("{marker} {id}  {date}  {name}  {phone}")
}

/// Multi-line detail block for one submission.
///
/// The phone line carries the `tel:` URI when one can be derived; a value
/// with nothing dialable in it is shown as plain text.
pub fn detail_block(record: &MessageRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(id) = record.id() {
        lines.push(format!("Id:    {id}"));
    }

    let from = match (record.name(), record.email()) {
        (Some(name), Some(email)) => format!("{name} <{email}>"),
        (Some(name), None) => name.to_owned(),
        (None, Some(email)) => format!("<{email}>"),
        (None, None) => "(unknown)".to_owned(),
    };
    lines.push(format!("From:  {from}"));

    if let Some(dt) = record.created_at() {
        lines.push(format!("Date:  {}", dt.to_rfc3339()));
    }

    match record.phone() {
        Some(field) => match dial_uri(&field.value) {
            Some(uri) => lines.push(format!("Phone: {} ({uri})", field.value)),
            None => lines.push(format!("Phone: {}", field.value)),
        },
        None => lines.push(format!("Phone: {PHONE_UNAVAILABLE}")),
    }

    lines.push(String::new());
    lines.push(record.body().unwrap_or("(no message)").to_owned());

    lines.join("\n")
}
