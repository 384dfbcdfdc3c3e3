//! Percent-encoding for values interpolated into API paths.
//!
//! Form ids come from page records edited by people, so they are encoded
//! before being placed in `/form/{id}/properties`. Without encoding, a `/` in
//! an id would address a different resource and a `?` or `#` would truncate
//! the path.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986
/// section 3.3), plus `%` to prevent double-decoding and `/` to prevent
/// path traversal.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use jotform_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("202722038345045"), "202722038345045");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_form_id_unchanged() {
        assert_eq!(encode_path_segment("202721468649058"), "202721468649058");
    }

    #[test]
    fn test_encode_slash() {
        assert_eq!(encode_path_segment("../user"), "..%2Fuser");
    }

    #[test]
    fn test_encode_query_and_fragment() {
        assert_eq!(encode_path_segment("1?apiKey=x"), "1%3FapiKey=x");
        assert_eq!(encode_path_segment("1#top"), "1%23top");
    }

    #[test]
    fn test_encode_percent_and_space() {
        assert_eq!(encode_path_segment("form 1"), "form%201");
        assert_eq!(encode_path_segment("100%"), "100%25");
    }
}
