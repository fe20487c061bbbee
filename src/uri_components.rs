/// Component offsets for a parsed location stored in a single buffer.
///
/// Buffer layout: "https://meet.example.com:8443/team/room?x=1#h"
/// - `protocol_end`: 6 (end of "https:", 0 without a protocol)
/// - `host_start`: 8 (after "//"; equals `protocol_end` without an authority)
/// - `hostname_end`: 24 (end of "meet.example.com", before ":")
/// - `host_end`: 29 (end of "8443", also the start of the pathname)
/// - `room_start`: 35 (after the last "/" of the pathname)
/// - `search_start`: 39 (start of "?x=1")
/// - `hash_start`: 43 (start of "#h")
///
/// Userinfo is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriComponents {
    pub protocol_end: u32,
    pub host_start: u32,
    pub hostname_end: u32,
    pub host_end: u32,
    pub room_start: u32,
    pub search_start: u32,
    pub hash_start: u32,
}

impl UriComponents {
    /// Create a new `UriComponents` with all offsets at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there is a "//" authority marker after the protocol
    pub fn has_authority(&self) -> bool {
        self.host_start > self.protocol_end
    }

    /// Check if the host carries a ":" port separator
    pub fn has_port(&self) -> bool {
        self.hostname_end < self.host_end
    }

    /// Get the pathname start position (directly after the authority)
    pub fn pathname_start(&self) -> u32 {
        self.host_end
    }

    /// Get the port start position (after ":")
    pub fn port_start(&self) -> u32 {
        if self.has_port() {
            self.hostname_end + 1
        } else {
            self.host_end
        }
    }
}
