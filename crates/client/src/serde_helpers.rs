//! Serde helpers for the remote API's loose JSON typing.
//!
//! Responsibilities:
//! - Accept identifiers that arrive either as JSON strings or as numbers.
//!
//! Invariants / assumptions:
//! - Form ids are documented as strings but large numeric ids have been seen
//!   as bare numbers; both map to the same `String`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
}

pub fn string_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::U64(v) => v.to_string(),
        StringOrNumber::I64(v) => v.to_string(),
    })
}
