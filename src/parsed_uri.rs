use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::checkers::parse_port;
use crate::compat::String;
use crate::error::Result;
use crate::types::SchemeType;
use crate::uri_components::UriComponents;

/// A location split into the well-known `Location`/`URL` properties plus the
/// room it references.
///
/// All components live in one buffer; getters are zero-copy slices of it.
/// A `ParsedUri` is never modified after parsing.
///
/// Example buffer: "https://meet.example.com:8443/team/room?x=1#h"
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ParsedUri {
    pub(crate) buffer: String,
    pub(crate) components: UriComponents,
}

impl ParsedUri {
    /// Create from buffer and components (internal use)
    pub(crate) fn from_buffer(buffer: String, components: UriComponents) -> Self {
        Self { buffer, components }
    }

    /// Get a component by range (zero-copy)
    fn get_component(&self, start: u32, end: u32) -> &str {
        let start = start as usize;
        let end = end as usize;
        self.buffer.get(start..end).unwrap_or_default()
    }

    /// The lowercase protocol, including the trailing `:` (e.g. `"https:"`)
    pub fn protocol(&self) -> Option<&str> {
        let end = self.components.protocol_end;
        (end > 0).then(|| self.get_component(0, end))
    }

    /// The authority without userinfo: hostname plus the optional `:port`
    pub fn host(&self) -> Option<&str> {
        let c = &self.components;
        c.has_authority().then(|| self.get_component(c.host_start, c.host_end))
    }

    /// The authority without userinfo and without the port
    pub fn hostname(&self) -> Option<&str> {
        let c = &self.components;
        c.has_authority().then(|| self.get_component(c.host_start, c.hostname_end))
    }

    /// Whatever follows the last `:` of the host; not validated
    pub fn port(&self) -> Option<&str> {
        let c = &self.components;
        (c.has_authority() && c.has_port()).then(|| self.get_component(c.port_start(), c.host_end))
    }

    /// The path; always starts with `/`
    pub fn pathname(&self) -> &str {
        let c = &self.components;
        self.get_component(c.pathname_start(), c.search_start)
    }

    /// The query including the leading `?`, or `""`
    pub fn search(&self) -> &str {
        let c = &self.components;
        self.get_component(c.search_start, c.hash_start)
    }

    /// The fragment including the leading `#`, or `""`
    pub fn hash(&self) -> &str {
        self.get_component(self.components.hash_start, self.buffer.len() as u32)
    }

    /// The pathname up to and including its last `/`
    pub fn context_root(&self) -> &str {
        let c = &self.components;
        self.get_component(c.pathname_start(), c.room_start)
    }

    /// The last path segment, `None` when it is empty
    pub fn room(&self) -> Option<&str> {
        let c = &self.components;
        let room = self.get_component(c.room_start, c.search_start);
        (!room.is_empty()).then_some(room)
    }

    /// The canonical string form of this location.
    ///
    /// `protocol + "//" + host + pathname + search + hash` when there is an
    /// authority, otherwise `pathname + search + hash`.
    pub fn href(&self) -> &str {
        if self.components.has_authority() {
            &self.buffer
        } else {
            self.get_component(self.components.pathname_start(), self.buffer.len() as u32)
        }
    }

    /// The scheme if the protocol is HTTP(S)
    pub fn scheme_type(&self) -> Option<SchemeType> {
        self.protocol().and_then(SchemeType::from_protocol)
    }

    /// The port as a number.
    ///
    /// # Errors
    ///
    /// Returns an error if a port is present but is empty, non-numeric or
    /// larger than 65535.
    pub fn port_number(&self) -> Result<Option<u16>> {
        self.port().map(parse_port).transpose()
    }

    /// Check if the location has an authority
    pub fn has_host(&self) -> bool {
        self.components.has_authority()
    }

    /// Check if the location has a non-empty search string
    pub fn has_search(&self) -> bool {
        !self.search().is_empty()
    }

    /// Check if the location has a non-empty hash
    pub fn has_hash(&self) -> bool {
        !self.hash().is_empty()
    }
}

impl FromStr for ParsedUri {
    type Err = Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(crate::parser::parse_standard_uri(s))
    }
}

impl fmt::Debug for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedUri")
            .field("protocol", &self.protocol())
            .field("host", &self.host())
            .field("hostname", &self.hostname())
            .field("port", &self.port())
            .field("pathname", &self.pathname())
            .field("search", &self.search())
            .field("hash", &self.hash())
            .field("context_root", &self.context_root())
            .field("room", &self.room())
            .finish()
    }
}

impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedUri {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        fn optional<T: SerializeStruct>(
            state: &mut T,
            key: &'static str,
            value: Option<&str>,
        ) -> core::result::Result<(), T::Error> {
            match value {
                Some(value) => state.serialize_field(key, value),
                None => state.skip_field(key),
            }
        }

        let mut state = serializer.serialize_struct("ParsedUri", 9)?;
        optional(&mut state, "protocol", self.protocol())?;
        optional(&mut state, "host", self.host())?;
        optional(&mut state, "hostname", self.hostname())?;
        optional(&mut state, "port", self.port())?;
        state.serialize_field("pathname", self.pathname())?;
        state.serialize_field("search", self.search())?;
        state.serialize_field("hash", self.hash())?;
        state.serialize_field("contextRoot", self.context_root())?;
        optional(&mut state, "room", self.room())?;
        state.end()
    }
}
