//! Percent-encoding for URL path segments built from tokens and usernames.
//!
//! Tokens are opaque to the client. Anything interpolated into a path is
//! encoded so a stray `/`, `?` or `#` cannot change which resource is hit.
//!
//! # Example
//!
//! ```
//! use mode_client::transport::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("a/b");
//! assert_eq!(encoded, "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 §3.3
/// plus the reserved characters that would split or re-route a path).
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
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// ```
/// use mode_client::transport::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("0a1b2c3d"), "0a1b2c3d");
/// assert_eq!(encode_path_segment("jane doe"), "jane%20doe");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
