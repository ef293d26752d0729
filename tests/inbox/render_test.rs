//! Rendering tests: phone fallback and dial links.

use anteroom::inbox::render::{detail_block, summary_line, PHONE_UNAVAILABLE};
use anteroom::inbox::MessageRecord;
use serde_json::json;

#[test]
fn summary_marks_unread_and_shows_phone() {
    let record = MessageRecord::new(json!({
        "_id": "m1",
        "name": "Jane",
        "phone": "555-0100",
        "read": false
    }));
    let line = summary_line(&record);
    assert!(line.starts_with('*'), "unread marker missing: {line}");
    assert!(line.contains("Jane"));
    assert!(line.contains("555-0100"));
}

#[test]
fn summary_falls_back_when_no_phone() {
    let record = MessageRecord::new(json!({
        "_id": "m2",
        "name": "Bob",
        "read": true
    }));
    let line = summary_line(&record);
    assert!(line.starts_with(' '), "read record should have no marker");
    assert!(line.contains(PHONE_UNAVAILABLE));
}

#[test]
fn detail_carries_dial_link() {
    let record = MessageRecord::new(json!({
        "_id": "m1",
        "name": "Jane",
        "email": "jane@x.com",
        "phone": "+1 (555) 123-4567",
        "message": "Call me"
    }));
    let block = detail_block(&record);
    assert!(block.contains("From:  Jane <jane@x.com>"));
    assert!(block.contains("+1 (555) 123-4567"));
    assert!(block.contains("tel:+15551234567"));
    assert!(block.contains("Call me"));
}

#[test]
fn detail_shows_unavailable_without_phone_link() {
    let record = MessageRecord::new(json!({ "_id": "m3", "name": "Ada" }));
    let block = detail_block(&record);
    assert!(block.contains(PHONE_UNAVAILABLE));
    assert!(!block.contains("tel:"));
}
