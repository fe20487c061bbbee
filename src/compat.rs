/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{
    borrow::Cow,
    format,
    string::{String, ToString},
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::Cow,
    format,
    string::{String, ToString},
};
