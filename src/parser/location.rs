use super::standard::parse_standard_uri;
use crate::hier_part::{LEGACY_REWRITES, RewriteRule, fix_uri_hier_part_with};
use crate::log::trace;
use crate::parsed_uri::ParsedUri;
use crate::scheme::{SchemeSelection, fix_uri_scheme_with};

/// Options for [`LocationParser`].
///
/// The defaults are what [`parse_location_uri`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions<'r> {
    /// Which token of a stacked scheme run picks the canonical scheme
    pub scheme_selection: SchemeSelection,
    /// Deployment rewrites, tried in order until one matches
    pub rewrites: &'r [RewriteRule<'r>],
}

impl Default for ParseOptions<'static> {
    fn default() -> Self {
        Self {
            scheme_selection: SchemeSelection::Last,
            rewrites: LEGACY_REWRITES,
        }
    }
}

/// Parses locations (URIs) which reference a room.
///
/// Runs the scheme fix-up, then the deployment rewrites, then the standard
/// parser, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationParser<'r> {
    options: ParseOptions<'r>,
}

impl Default for LocationParser<'static> {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl<'r> LocationParser<'r> {
    pub const fn new(options: ParseOptions<'r>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions<'r> {
        &self.options
    }

    /// Parse an optional location. `None` in means "no location" out.
    pub fn parse(&self, input: Option<&str>) -> Option<ParsedUri> {
        let Some(input) = input else {
            trace!("no location to parse");
            return None;
        };
        Some(self.parse_str(input))
    }

    /// Parse a location string. Never fails.
    pub fn parse_str(&self, input: &str) -> ParsedUri {
        let uri = fix_uri_scheme_with(input, self.options.scheme_selection);
        let uri = fix_uri_hier_part_with(&uri, self.options.rewrites);
        parse_standard_uri(&uri)
    }
}

/// Parse a location (URI) which supposedly references a room.
///
/// Returns `None` only when there is no input. Otherwise the scheme is
/// canonicalized to HTTP(S), legacy deployment URLs are rewritten, and the
/// result is parsed with [`parse_standard_uri`](crate::parse_standard_uri).
/// The room is the last segment of the pathname and the context root is
/// everything before it.
///
/// # Examples
///
/// ```
/// use meet_uri::parse_location_uri;
///
/// let uri = parse_location_uri(Some("org.jitsi.meet://meet.example.com/team/Room123")).unwrap();
/// assert_eq!(uri.protocol(), Some("https:"));
/// assert_eq!(uri.hostname(), Some("meet.example.com"));
/// assert_eq!(uri.context_root(), "/team/");
/// assert_eq!(uri.room(), Some("Room123"));
///
/// assert!(parse_location_uri(None).is_none());
/// ```
pub fn parse_location_uri(input: Option<&str>) -> Option<ParsedUri> {
    LocationParser::default().parse(input)
}
