use crate::character_sets::{is_scheme_char, is_scheme_start};
use crate::error::{ParseError, Result};

/// Length of the scheme token `[a-z][a-z0-9.+-]*:` (ASCII case-insensitive)
/// at the start of `input`, including the trailing `:`.
/// Returns None if `input` does not start with a scheme token.
pub fn scheme_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();

    if !is_scheme_start(*bytes.first()?) {
        return None;
    }

    let end = bytes[1..]
        .iter()
        .position(|&b| !is_scheme_char(b))
        .map_or(bytes.len(), |pos| pos + 1);

    (bytes.get(end) == Some(&b':')).then_some(end + 1)
}

/// Parse a port string to u16.
/// Unlike the parser, which keeps whatever follows the last `:`, this rejects
/// empty and non-digit ports.
pub fn parse_port(port: &str) -> Result<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPort);
    }
    port.parse::<u16>().map_err(|_| ParseError::PortOutOfRange)
}
