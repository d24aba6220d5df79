//! Case-preserving URL decomposition and serialization.

use std::fmt;

use super::escape::{escape_component, validate_escapes};
use super::host::{parse_authority, Authority};
use super::ParseError;

/// A URL split into its structural parts.
///
/// Unlike a WHATWG parser this keeps every component as written: no case
/// folding of scheme or host, no default-port removal, no path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    scheme: Option<String>,
    /// Set for rootless URLs with a scheme, e.g. `mailto:someone@example.com`.
    opaque: Option<String>,
    authority: Option<Authority>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl ParsedUrl {
    /// Parses `raw` into components, rejecting structurally invalid input.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.bytes().any(|b| b < 0x20 || b == 0x7f) {
            return Err(ParseError::ControlCharacter);
        }

        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, frag)) => {
                validate_escapes(frag)?;
                (rest, Some(frag.to_string()))
            }
            None => (raw, None),
        };

        let (scheme, rest) = split_scheme(rest)?;
        let (rest, query) = match rest.split_once('?') {
            Some((rest, q)) => (rest, Some(q.to_string())),
            None => (rest, None),
        };

        let mut url = ParsedUrl {
            scheme: scheme.map(str::to_string),
            query,
            fragment,
            ..Default::default()
        };

        if !rest.starts_with('/') {
            if url.scheme.is_some() {
                url.opaque = Some(rest.to_string());
                return Ok(url);
            }
            let first_segment = rest.split('/').next().unwrap_or_default();
            if first_segment.contains(':') {
                return Err(ParseError::ColonInFirstSegment);
            }
        }

        let has_authority =
            rest.starts_with("//") && (url.scheme.is_some() || !rest.starts_with("///"));
        let path = if has_authority {
            let after = &rest[2..];
            let (authority, path) = match after.find('/') {
                Some(i) => after.split_at(i),
                None => (after, ""),
            };
            url.authority = Some(parse_authority(authority)?);
            path
        } else {
            rest
        };

        validate_escapes(path)?;
        url.path = path.to_string();
        Ok(url)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque.is_some()
    }

    /// Host as written, or `None` when the URL has no authority.
    pub fn host(&self) -> Option<&str> {
        self.authority.as_ref().map(|a| a.host.as_str())
    }

    pub fn port(&self) -> Option<&str> {
        self.authority.as_ref().and_then(|a| a.port.as_deref())
    }

    pub fn userinfo(&self) -> Option<&str> {
        self.authority.as_ref().and_then(|a| a.userinfo.as_deref())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Replaces `host[:port]` wholesale; userinfo is kept.
    ///
    /// A URL without an authority gains one. Opaque URLs have nowhere to
    /// carry a host, so the new host is not rendered for them.
    pub fn replace_host(&mut self, host: &str) {
        let userinfo = self.authority.take().and_then(|a| a.userinfo);
        self.authority = Some(Authority {
            userinfo,
            ..Authority::from_host(host)
        });
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }

        if let Some(opaque) = &self.opaque {
            f.write_str(opaque)?;
        } else {
            let path = escape_component(&self.path);
            if let Some(auth) = &self.authority {
                // A scheme-less empty authority renders as a bare path, so
                // `//` canonicalizes to `/` and not to `///`.
                let writes_authority = self.scheme.is_some() || !auth.is_empty();
                if writes_authority && (!auth.is_empty() || !path.is_empty()) {
                    f.write_str("//")?;
                }
                if let Some(userinfo) = &auth.userinfo {
                    write!(f, "{userinfo}@")?;
                }
                f.write_str(&auth.host)?;
                if let Some(port) = &auth.port {
                    write!(f, ":{port}")?;
                }
                if !auth.host.is_empty() && !path.is_empty() && !path.starts_with('/') {
                    f.write_str("/")?;
                }
            }
            f.write_str(&path)?;
        }

        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = self.fragment.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "#{}", escape_component(fragment))?;
        }
        Ok(())
    }
}

/// Splits a leading `scheme:` off `raw`.
///
/// Input that does not start with a well-formed scheme is treated as
/// scheme-less; only a `:` in first position is an error.
fn split_scheme(raw: &str) -> Result<(Option<&str>, &str), ParseError> {
    for (i, b) in raw.bytes().enumerate() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' if i > 0 => {}
            b':' if i == 0 => return Err(ParseError::MissingScheme),
            b':' => return Ok((Some(&raw[..i]), &raw[i + 1..])),
            _ => return Ok((None, raw)),
        }
    }
    Ok((None, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(raw: &str) -> String {
        ParsedUrl::parse(raw).unwrap().to_string()
    }

    #[test]
    fn splits_all_components() {
        let u = ParsedUrl::parse("https://me@BYFOOD.com:8080/food-EXPeriences?query=abc/#section")
            .unwrap();
        assert_eq!(u.scheme(), Some("https"));
        assert_eq!(u.userinfo(), Some("me"));
        assert_eq!(u.host(), Some("BYFOOD.com"));
        assert_eq!(u.port(), Some("8080"));
        assert_eq!(u.path(), "/food-EXPeriences");
        assert_eq!(u.query(), Some("query=abc/"));
        assert_eq!(u.fragment(), Some("section"));
        assert!(!u.is_opaque());
    }

    #[test]
    fn preserves_case_on_output() {
        assert_eq!(
            roundtrip("HTTPS://BYFOOD.com/Food?Q=A#Frag"),
            "HTTPS://BYFOOD.com/Food?Q=A#Frag"
        );
    }

    #[test]
    fn host_without_path() {
        let u = ParsedUrl::parse("https://example.com").unwrap();
        assert_eq!(u.path(), "");
        assert_eq!(u.to_string(), "https://example.com");
    }

    #[test]
    fn empty_query_is_kept() {
        let u = ParsedUrl::parse("https://example.com/x?").unwrap();
        assert_eq!(u.query(), Some(""));
        assert_eq!(u.to_string(), "https://example.com/x?");
    }

    #[test]
    fn empty_fragment_is_dropped_on_output() {
        assert_eq!(roundtrip("https://example.com/x#"), "https://example.com/x");
    }

    #[test]
    fn question_mark_inside_fragment_is_not_a_query() {
        let u = ParsedUrl::parse("https://example.com/x#a?b").unwrap();
        assert_eq!(u.query(), None);
        assert_eq!(u.fragment(), Some("a?b"));
    }

    #[test]
    fn opaque_url() {
        let u = ParsedUrl::parse("mailto:Someone@Example.com?subject=Hi").unwrap();
        assert!(u.is_opaque());
        assert_eq!(u.host(), None);
        assert_eq!(u.query(), Some("subject=Hi"));
        assert_eq!(u.to_string(), "mailto:Someone@Example.com?subject=Hi");
    }

    #[test]
    fn scheme_with_rooted_path_has_no_authority() {
        let u = ParsedUrl::parse("file:/etc/hosts").unwrap();
        assert_eq!(u.host(), None);
        assert_eq!(u.to_string(), "file:/etc/hosts");
    }

    #[test]
    fn empty_authority_with_path() {
        let u = ParsedUrl::parse("file:///etc/hosts").unwrap();
        assert_eq!(u.host(), Some(""));
        assert_eq!(u.path(), "/etc/hosts");
        assert_eq!(u.to_string(), "file:///etc/hosts");
    }

    #[test]
    fn scheme_less_empty_authority_renders_as_path() {
        let mut u = ParsedUrl::parse("//?q=1").unwrap();
        assert_eq!(u.host(), Some(""));
        assert_eq!(u.to_string(), "?q=1");
        u.set_path("/");
        assert_eq!(u.to_string(), "/?q=1");
    }

    #[test]
    fn schemed_empty_authority_keeps_slashes() {
        let mut u = ParsedUrl::parse("https://").unwrap();
        u.set_path("/");
        assert_eq!(u.to_string(), "https:///");
        let again = ParsedUrl::parse(&u.to_string()).unwrap();
        assert_eq!(again.to_string(), "https:///");
    }

    #[test]
    fn scheme_relative_reference() {
        let u = ParsedUrl::parse("//cdn.example.com/a").unwrap();
        assert_eq!(u.scheme(), None);
        assert_eq!(u.host(), Some("cdn.example.com"));
    }

    #[test]
    fn relative_path_reference() {
        let u = ParsedUrl::parse("food/experiences").unwrap();
        assert_eq!(u.scheme(), None);
        assert_eq!(u.host(), None);
        assert_eq!(u.path(), "food/experiences");
    }

    #[test]
    fn digit_first_is_not_a_scheme() {
        let u = ParsedUrl::parse("1http/x").unwrap();
        assert_eq!(u.scheme(), None);
        assert_eq!(u.path(), "1http/x");
    }

    #[test]
    fn leading_colon_is_missing_scheme() {
        assert_eq!(
            ParsedUrl::parse("://invalid-url"),
            Err(ParseError::MissingScheme)
        );
    }

    #[test]
    fn colon_in_first_relative_segment() {
        assert_eq!(
            ParsedUrl::parse("a b:c/d"),
            Err(ParseError::ColonInFirstSegment)
        );
    }

    #[test]
    fn control_characters_rejected() {
        assert_eq!(
            ParsedUrl::parse("https://example.com/\n"),
            Err(ParseError::ControlCharacter)
        );
        assert_eq!(
            ParsedUrl::parse("https://example.com/\x7f"),
            Err(ParseError::ControlCharacter)
        );
    }

    #[test]
    fn bad_escape_in_path_or_fragment() {
        assert!(matches!(
            ParsedUrl::parse("https://example.com/%zz"),
            Err(ParseError::InvalidEscape(_))
        ));
        assert!(matches!(
            ParsedUrl::parse("https://example.com/#%g1"),
            Err(ParseError::InvalidEscape(_))
        ));
    }

    #[test]
    fn bad_escape_in_query_is_tolerated() {
        assert!(ParsedUrl::parse("https://example.com/?q=%zz").is_ok());
    }

    #[test]
    fn authority_errors_propagate() {
        assert!(matches!(
            ParsedUrl::parse("https://example.com:abc/"),
            Err(ParseError::InvalidPort(_))
        ));
        assert_eq!(
            ParsedUrl::parse("http://[::1/"),
            Err(ParseError::MissingBracket)
        );
    }

    #[test]
    fn unsafe_path_bytes_are_escaped_on_output() {
        assert_eq!(
            roundtrip("https://example.com/a b/café"),
            "https://example.com/a%20b/caf%C3%A9"
        );
    }

    #[test]
    fn replace_host_drops_port_and_keeps_userinfo() {
        let mut u = ParsedUrl::parse("https://me@BYFOOD.com:8080/x").unwrap();
        u.replace_host("www.byfood.com");
        assert_eq!(u.to_string(), "https://me@www.byfood.com/x");
    }

    #[test]
    fn replace_host_on_relative_path_adds_authority() {
        let mut u = ParsedUrl::parse("food/x").unwrap();
        u.replace_host("www.byfood.com");
        assert_eq!(u.to_string(), "//www.byfood.com/food/x");
    }
}
