//! Authority parsing: userinfo, host and port.

use super::escape::validate_escapes;
use super::ParseError;

/// Punctuation allowed literally in a host name, besides ASCII alphanumerics.
const HOST_PUNCT: &str = "-._~!$&'()*+,;=:[]<>\"%";

/// Punctuation allowed literally in userinfo, besides ASCII alphanumerics.
const USERINFO_PUNCT: &str = "-._:~!$&'()*+,;=%@";

/// The `[userinfo@]host[:port]` part of a hierarchical URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Authority {
    pub userinfo: Option<String>,
    /// Host exactly as written; bracketed IPv6 literals keep their brackets.
    pub host: String,
    /// Port digits without the colon. `Some("")` for a bare trailing `:`.
    pub port: Option<String>,
}

impl Authority {
    /// Authority consisting of a bare host.
    pub fn from_host(host: impl Into<String>) -> Self {
        Self {
            userinfo: None,
            host: host.into(),
            port: None,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.userinfo.is_none() && self.host.is_empty() && self.port.is_none()
    }
}

/// Parses the text between `//` and the first `/` (or the end).
///
/// Userinfo is split off at the last `@`, so `@` may appear inside it.
pub(crate) fn parse_authority(authority: &str) -> Result<Authority, ParseError> {
    let (userinfo, hostport) = match authority.rfind('@') {
        Some(i) => (Some(&authority[..i]), &authority[i + 1..]),
        None => (None, authority),
    };

    if let Some(ui) = userinfo {
        validate_userinfo(ui)?;
    }
    let (host, port) = split_host_port(hostport)?;

    Ok(Authority {
        userinfo: userinfo.map(str::to_string),
        host,
        port,
    })
}

/// Checks that `host` is a bare host name or IP literal with no port.
pub fn validate_host(host: &str) -> Result<(), ParseError> {
    match split_host_port(host)? {
        (_, Some(port)) => Err(ParseError::InvalidPort(format!(":{port}"))),
        (_, None) => Ok(()),
    }
}

fn split_host_port(hostport: &str) -> Result<(String, Option<String>), ParseError> {
    if hostport.starts_with('[') {
        let close = hostport.rfind(']').ok_or(ParseError::MissingBracket)?;
        let port = parse_optional_port(&hostport[close + 1..])?;
        validate_ipv6_literal(&hostport[1..close])?;
        return Ok((hostport[..=close].to_string(), port));
    }

    let (host, port) = match hostport.rfind(':') {
        Some(i) => (&hostport[..i], parse_optional_port(&hostport[i..])?),
        None => (hostport, None),
    };
    if let Some(bad) = host
        .chars()
        .find(|c| c.is_ascii() && !c.is_ascii_alphanumeric() && !HOST_PUNCT.contains(*c))
    {
        return Err(ParseError::InvalidHostCharacter(bad));
    }
    validate_escapes(host)?;
    Ok((host.to_string(), port))
}

/// Accepts `""` or `:` followed by digits only.
fn parse_optional_port(colon_port: &str) -> Result<Option<String>, ParseError> {
    if colon_port.is_empty() {
        return Ok(None);
    }
    match colon_port.strip_prefix(':') {
        Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => Ok(Some(digits.to_string())),
        _ => Err(ParseError::InvalidPort(colon_port.to_string())),
    }
}

/// Validates the inside of `[...]`, allowing an RFC 6874 `%25` zone suffix.
fn validate_ipv6_literal(literal: &str) -> Result<(), ParseError> {
    let (addr, zone) = match literal.split_once("%25") {
        Some((addr, zone)) => (addr, Some(zone)),
        None => (literal, None),
    };
    match url::Host::parse(&format!("[{addr}]")) {
        Ok(url::Host::Ipv6(_)) => {}
        _ => return Err(ParseError::InvalidIpv6(literal.to_string())),
    }
    if let Some(zone) = zone {
        if zone.is_empty() {
            return Err(ParseError::InvalidIpv6(literal.to_string()));
        }
        validate_escapes(zone)?;
    }
    Ok(())
}

fn validate_userinfo(userinfo: &str) -> Result<(), ParseError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || USERINFO_PUNCT.contains(c);
    if !userinfo.chars().all(allowed) {
        return Err(ParseError::InvalidUserinfo);
    }
    validate_escapes(userinfo)
}
