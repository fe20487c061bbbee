/// The well-known schemes a location is canonicalized to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Http,
    #[default]
    Https,
}

impl SchemeType {
    /// Classify a protocol such as `"http:"` (ASCII case-insensitive).
    /// Returns `None` for anything other than HTTP(S).
    pub fn from_protocol(protocol: &str) -> Option<Self> {
        let bytes = protocol.as_bytes();

        match (bytes.len(), bytes.first()) {
            (5, Some(b'h' | b'H')) if protocol.eq_ignore_ascii_case("http:") => Some(Self::Http),
            (6, Some(b'h' | b'H')) if protocol.eq_ignore_ascii_case("https:") => Some(Self::Https),
            _ => None,
        }
    }

    /// Pick the canonical scheme for an arbitrary scheme token.
    /// App-specific and unknown schemes become HTTPS.
    pub fn from_token(token: &str) -> Self {
        Self::from_protocol(token).unwrap_or_default()
    }

    /// The protocol string, including the trailing `:`
    pub fn protocol(self) -> &'static str {
        match self {
            Self::Http => "http:",
            Self::Https => "https:",
        }
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}
