#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;
mod log;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod hier_part;
mod parsed_uri;
mod parser;
mod scheme;
mod types;
mod uri_components;
mod url_string;

// Public API
pub use error::ParseError;
pub use helpers::get_context_root;
pub use hier_part::{LEGACY_REWRITES, RewriteRule, fix_uri_hier_part, fix_uri_hier_part_with};
pub use parsed_uri::ParsedUri;
pub use parser::{LocationParser, ParseOptions, parse_location_uri, parse_standard_uri};
pub use scheme::{SchemeSelection, fix_uri_scheme, fix_uri_scheme_with};
pub use types::SchemeType;
pub use url_string::{ToUrlString, UrlObject, to_url_string};

pub type Result<T> = core::result::Result<T, ParseError>;
