//! Heuristic phone-number discovery in contact submissions.
//!
//! Submissions are open documents: the phone number, when present at all,
//! may sit at the top level under any of a dozen key spellings or be tucked
//! inside a nested `contactInfo`-style object. This extractor walks the
//! record breadth-first and returns the first value that sits under a
//! recognized phone key and is shaped like a phone number. Uses exact key
//! matching and character-class checks rather than a phone-parsing library
//! for deterministic, false-positive-averse extraction.

use std::collections::{HashSet, VecDeque};

use serde_json::Value;

/// Keys that plausibly hold a phone number, matched exactly against the
/// lowercased key. Membership is exact, not substring: `telephoneExtension`
/// stays out.
const PHONE_KEYS: [&str; 11] = [
    "phone",
    "phonenumber",
    "phone_number",
    "phoneno",
    "phone_no",
    "mobile",
    "mobilenumber",
    "tel",
    "contactnumber",
    "whatsapp",
    "whatsappnumber",
];

/// Minimum digits for a dialable number (ITU E.164 practical bound).
const MIN_DIGITS: usize = 7;

/// Maximum digits for a dialable number (ITU E.164 practical bound).
const MAX_DIGITS: usize = 15;

/// A phone-shaped value located inside a submission record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneField {
    /// The value as found, trimmed but otherwise unreformatted.
    pub value: String,
    /// Dot-separated location of the field, e.g. `contactInfo.whatsappNumber`;
    /// array elements contribute their index as a segment.
    pub path: String,
}

/// Find the most plausible phone-number field in a submission record.
///
/// Breadth-first, so shallower fields win over nested ones and, within a
/// level, earlier-declared fields win. Returns `None` when nothing in the
/// record qualifies — an expected outcome, most submissions carry no phone.
///
/// Entries under ID-like keys (`_id`, `id`, any `…id` suffix, case
/// insensitive) are skipped without descending: database identifiers are
/// digit-heavy enough to pass the shape check otherwise.
///
/// Pure and total: any JSON value is accepted, non-objects simply yield
/// `None`, and each container is visited at most once so traversal is
/// bounded by the size of the record.
pub fn extract_phone(record: &Value) -> Option<PhoneField> {
    let mut queue: VecDeque<(&Value, String)> = VecDeque::new();
    let mut visited: HashSet<*const Value> = HashSet::new();
    queue.push_back((record, String::new()));

    while let Some((node, prefix)) = queue.pop_front() {
        if !visited.insert(std::ptr::from_ref(node)) {
            continue;
        }
        match node {
            Value::Object(map) => {
                for (key, value) in map {
                    if let Some(found) = visit_entry(key, value, &prefix, &mut queue) {
                        return Some(found);
                    }
                }
            }
            Value::Array(items) => {
                for (index, value) in items.iter().enumerate() {
                    let key = index.to_string();
                    if let Some(found) = visit_entry(&key, value, &prefix, &mut queue) {
                        return Some(found);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Build a `tel:` URI from a phone value by keeping digits and a leading
/// `+` only. Returns `None` when nothing remains after stripping; callers
/// then show the value as plain text without a link.
pub fn dial_uri(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    let mut dialable = String::new();
    for (index, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || (ch == '+' && index == 0) {
            dialable.push(ch);
        }
    }
    if dialable.is_empty() {
        return None;
    }
    Some(format!("tel:{dialable}"))
}

/// Process one `(key, value)` entry: yield a match, enqueue a nested
/// container, or skip.
fn visit_entry<'a>(
    key: &str,
    value: &'a Value,
    prefix: &str,
    queue: &mut VecDeque<(&'a Value, String)>,
) -> Option<PhoneField> {
    if is_id_like_key(key) {
        return None;
    }
    let path = join_path(prefix, key);
    match value {
        Value::String(s) => phone_match(key, s, path),
        Value::Number(n) => phone_match(key, &n.to_string(), path),
        Value::Object(_) | Value::Array(_) => {
            queue.push_back((value, path));
            None
        }
        Value::Null | Value::Bool(_) => None,
    }
}

/// A recognized phone key holding a phone-shaped value is a match.
fn phone_match(key: &str, raw: &str, path: String) -> Option<PhoneField> {
    if !PHONE_KEYS.contains(&key.to_lowercase().as_str()) {
        return None;
    }
    if !is_phone_shaped(raw) {
        return None;
    }
    Some(PhoneField {
        value: raw.trim().to_owned(),
        path,
    })
}

/// Keys that name database identifiers rather than user data: `_id`, `id`
/// in any casing, and any key ending in `id` (`userId`, `msgID`).
fn is_id_like_key(key: &str) -> bool {
    key.to_lowercase().ends_with("id")
}

/// Character-class and digit-count check for a candidate value.
///
/// Only digits, whitespace, and `( ) + -` are allowed — any letter rejects,
/// which rules out hex object ids — and the digit count must land in
/// `7..=15`. Position is not interpreted, so a stray non-leading `+` passes.
fn is_phone_shaped(raw: &str) -> bool {
    let mut digits: usize = 0;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => digits = digits.saturating_add(1),
            '(' | ')' | '+' | '-' => {}
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

/// Join a path prefix and key with a dot; the root prefix is empty.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}
