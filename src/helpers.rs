/// Get the (web application) context root of a pathname: everything up to
/// and including the last `/`, or `"/"` when the pathname has no `/`.
///
/// # Examples
///
/// ```
/// use meet_uri::get_context_root;
///
/// assert_eq!(get_context_root("/deployment/Room123"), "/deployment/");
/// assert_eq!(get_context_root("/Room123"), "/");
/// assert_eq!(get_context_root("Room123"), "/");
/// ```
pub fn get_context_root(pathname: &str) -> &str {
    memchr::memrchr(b'/', pathname.as_bytes()).map_or("/", |pos| &pathname[..=pos])
}

/// Offset of the room (the last path segment) within a pathname.
pub fn room_offset(pathname: &str) -> usize {
    memchr::memrchr(b'/', pathname.as_bytes()).map_or(0, |pos| pos + 1)
}

/// ASCII case-insensitive `strip_prefix`
pub fn strip_prefix_ignore_ascii_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &input[prefix.len()..])
}
