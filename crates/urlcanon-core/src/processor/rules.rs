//! The two rewrite rules applied by the processor.

use crate::url_model::ParsedUrl;

/// Drops the query and trailing path slashes; everything else is kept as written.
pub(crate) fn canonicalize(url: &mut ParsedUrl) {
    url.clear_query();
    if url.is_opaque() {
        return;
    }
    let trimmed = url.path().trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed }.to_string();
    url.set_path(path);
}

/// Forces `host` as the authority and lower-cases the whole serialized URL.
///
/// Query, fragment and trailing slashes survive (lower-cased).
pub(crate) fn redirect(mut url: ParsedUrl, host: &str) -> String {
    url.replace_host(host);
    url.to_string().to_lowercase()
}
