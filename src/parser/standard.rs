use super::cursor::{Cursor, match_authority, match_fragment, match_path, match_query};
use crate::checkers::scheme_len;
use crate::compat::String;
use crate::helpers::room_offset;
use crate::parsed_uri::ParsedUri;
use crate::uri_components::UriComponents;

/// Parse a URI string into the well-known `Location`/`URL` properties.
///
/// The input is consumed left to right in fixed stages: scheme, authority,
/// path, query, fragment. Every stage is optional, so parsing never fails;
/// missing pieces are absent or defaulted (`pathname` to `"/"`, `search` and
/// `hash` to `""`). Nothing is percent-decoded or re-encoded. Userinfo is
/// dropped and the port is whatever follows the last `:` of the host.
///
/// Apply no scheme or deployment fix-ups; see
/// [`parse_location_uri`](crate::parse_location_uri) for that.
///
/// # Examples
///
/// ```
/// use meet_uri::parse_standard_uri;
///
/// let uri = parse_standard_uri("HTTPS://user@example.com:8443/a/b?x=1#y");
/// assert_eq!(uri.protocol(), Some("https:"));
/// assert_eq!(uri.host(), Some("example.com:8443"));
/// assert_eq!(uri.hostname(), Some("example.com"));
/// assert_eq!(uri.port(), Some("8443"));
/// assert_eq!(uri.pathname(), "/a/b");
/// assert_eq!(uri.search(), "?x=1");
/// assert_eq!(uri.hash(), "#y");
/// ```
pub fn parse_standard_uri(input: &str) -> ParsedUri {
    let mut cursor = Cursor::new(input);
    // +1 for a '/' that may have to be prepended to the path
    let mut buffer = String::with_capacity(input.len() + 1);
    let mut components = UriComponents::new();

    // protocol
    if let Some(scheme) = cursor.eat(scheme_len) {
        buffer.extend(scheme.chars().map(|c| c.to_ascii_lowercase()));
    }
    components.protocol_end = buffer.len() as u32;

    // authority
    if let Some(authority) = cursor.eat(match_authority) {
        let authority = &authority[2..];

        // userinfo
        let host = memchr::memrchr(b'@', authority.as_bytes())
            .map_or(authority, |pos| &authority[pos + 1..]);

        buffer.push_str("//");
        components.host_start = buffer.len() as u32;

        // port
        let hostname_len = memchr::memrchr(b':', host.as_bytes()).unwrap_or(host.len());
        components.hostname_end = components.host_start + hostname_len as u32;

        buffer.push_str(host);
    } else {
        components.host_start = components.protocol_end;
        components.hostname_end = components.protocol_end;
    }
    components.host_end = buffer.len() as u32;

    // pathname
    let path = cursor.eat(match_path).unwrap_or_default();
    if !path.starts_with('/') {
        buffer.push('/');
    }
    buffer.push_str(path);
    let pathname = &buffer[components.host_end as usize..];
    components.room_start = components.host_end + room_offset(pathname) as u32;
    components.search_start = buffer.len() as u32;

    // query
    if let Some(search) = cursor.eat(match_query) {
        buffer.push_str(search);
    }
    components.hash_start = buffer.len() as u32;

    // fragment
    if let Some(hash) = cursor.eat(match_fragment) {
        buffer.push_str(hash);
    }

    ParsedUri::from_buffer(buffer, components)
}
