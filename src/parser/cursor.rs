/// A position in the input that only ever moves forward.
///
/// Each stage tries a matcher at the current position and, on success,
/// consumes exactly the matched prefix.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The unconsumed input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Run `matcher` on the unconsumed input and consume what it matched.
    /// The matcher returns the match length, which must fall on a char boundary.
    pub fn eat(&mut self, matcher: impl FnOnce(&str) -> Option<usize>) -> Option<&'a str> {
        let rest = self.rest();
        let len = matcher(rest)?;
        let matched = rest.get(..len)?;
        self.pos += len;
        Some(matched)
    }
}

/// `//[^/?#]+`
pub fn match_authority(rest: &str) -> Option<usize> {
    let authority = rest.strip_prefix("//")?.as_bytes();
    let len = memchr::memchr3(b'/', b'?', b'#', authority).unwrap_or(authority.len());
    (len > 0).then_some(len + 2)
}

/// `[^?#]*`, always matches
pub fn match_path(rest: &str) -> Option<usize> {
    Some(memchr::memchr2(b'?', b'#', rest.as_bytes()).unwrap_or(rest.len()))
}

/// `?` up to the next `#` or the end
pub fn match_query(rest: &str) -> Option<usize> {
    let query = rest.strip_prefix('?')?.as_bytes();
    Some(memchr::memchr(b'#', query).map_or(rest.len(), |pos| pos + 1))
}

/// `#` and everything after it
pub fn match_fragment(rest: &str) -> Option<usize> {
    rest.starts_with('#').then_some(rest.len())
}
