/// Errors returned by the typed accessors of a parsed location.
///
/// Parsing itself never fails; these only surface when a textual field is
/// converted into a stricter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Port is empty or contains a non-digit character
    InvalidPort,
    /// Port is numeric but does not fit in 16 bits
    PortOutOfRange,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPort => "Invalid port",
            Self::PortOutOfRange => "Port out of range",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for the typed accessors
pub type Result<T> = core::result::Result<T, ParseError>;
