mod cursor;
mod location;
mod standard;

pub use location::{LocationParser, ParseOptions, parse_location_uri};
pub use standard::parse_standard_uri;
