//! Percent-escape validation and output escaping for URL components.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::ParseError;

/// Bytes that may not appear literally in a serialized path or fragment.
///
/// `%` is absent so existing escapes pass through verbatim.
/// Non-ASCII bytes are always encoded by `percent_encoding`.
const COMPONENT_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Checks that every `%` in `s` starts a two-hex-digit escape.
pub(crate) fn validate_escapes(s: &str) -> Result<(), ParseError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() >= i + 3
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                let end = (i + 3).min(bytes.len());
                // The escape may cut a multi-byte char; report lossily.
                let bad = String::from_utf8_lossy(&bytes[i..end]).into_owned();
                return Err(ParseError::InvalidEscape(bad));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Escapes a raw path or fragment for output, keeping existing escapes as-is.
pub(crate) fn escape_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_escapes() {
        assert!(validate_escapes("/a%20b%2Fc%2b").is_ok());
        assert!(validate_escapes("no-escapes-here").is_ok());
        assert!(validate_escapes("").is_ok());
    }

    #[test]
    fn rejects_truncated_or_non_hex_escapes() {
        assert_eq!(
            validate_escapes("/a%zzb"),
            Err(ParseError::InvalidEscape("%zz".to_string()))
        );
        assert_eq!(
            validate_escapes("/tail%4"),
            Err(ParseError::InvalidEscape("%4".to_string()))
        );
        assert_eq!(
            validate_escapes("%"),
            Err(ParseError::InvalidEscape("%".to_string()))
        );
    }

    #[test]
    fn escape_keeps_existing_escapes_and_case() {
        assert_eq!(escape_component("/food%2Bdrink/X"), "/food%2Bdrink/X");
    }

    #[test]
    fn escape_encodes_space_and_unsafe_ascii() {
        assert_eq!(escape_component("/a b"), "/a%20b");
        assert_eq!(escape_component("/{x}|^"), "/%7Bx%7D%7C%5E");
    }

    #[test]
    fn escape_encodes_non_ascii_as_utf8() {
        assert_eq!(escape_component("/café"), "/caf%C3%A9");
    }

    #[test]
    fn escape_leaves_sub_delims_alone() {
        assert_eq!(escape_component("/a;b=c&d+e:f@g!$'()*,"), "/a;b=c&d+e:f@g!$'()*,");
    }
}
