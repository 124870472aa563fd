//! Percent-encoding of link paths.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is when encoding a path: ASCII alphanumerics, `_.-~` and `/`.
const PATH_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Decode `%XX` escapes; invalid UTF-8 is replaced with U+FFFD.
pub fn decode_path(value: &str) -> Cow<'_, str> {
    percent_decode_str(value).decode_utf8_lossy()
}

/// Encode a decoded path for use in an `href` or `src` attribute.
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SAFE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("My%20Page.html"), "My Page.html");
        assert_eq!(decode_path("caf%C3%A9/x.png"), "café/x.png");
        assert_eq!(decode_path("plain/path.html"), "plain/path.html");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("My Page.html"), "My%20Page.html");
        assert_eq!(encode_path("Notes/My Page.html"), "Notes/My%20Page.html");
        assert_eq!(encode_path("a_b-c~d.e"), "a_b-c~d.e");
        assert_eq!(encode_path("café"), "caf%C3%A9");
        assert_eq!(encode_path("Q&A (draft)"), "Q%26A%20%28draft%29");
    }

    #[test]
    fn test_encoding_is_stable() {
        for path in [
            "My Page.html",
            "Notes/Sub Folder/image 1.png",
            "Résumé & notes/plan.html",
            "already_safe/index.html",
        ] {
            let encoded = encode_path(path);
            assert_eq!(encode_path(&decode_path(&encoded)), encoded);
        }
    }
}
