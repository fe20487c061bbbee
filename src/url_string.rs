use crate::compat::{Cow, String, ToString};
use crate::parsed_uri::ParsedUri;

/// The object form of a location accepted by embedding APIs,
/// e.g. `{ "url": "https://meet.example.com/room" }`.
///
/// Only `url` is read; other properties are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UrlObject {
    pub url: Option<String>,
}

impl UrlObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Values that may stand for a URL.
pub trait ToUrlString {
    /// A string representation of the URL, if this value carries one.
    fn to_url_string(&self) -> Option<String>;
}

impl ToUrlString for str {
    fn to_url_string(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToUrlString for String {
    fn to_url_string(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ToUrlString for Cow<'_, str> {
    fn to_url_string(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToUrlString for UrlObject {
    fn to_url_string(&self) -> Option<String> {
        self.url.clone()
    }
}

impl ToUrlString for ParsedUri {
    fn to_url_string(&self) -> Option<String> {
        Some(self.href().to_string())
    }
}

#[cfg(feature = "url")]
impl ToUrlString for url::Url {
    fn to_url_string(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

impl<T: ToUrlString + ?Sized> ToUrlString for &T {
    fn to_url_string(&self) -> Option<String> {
        (**self).to_url_string()
    }
}

impl<T: ToUrlString> ToUrlString for Option<T> {
    fn to_url_string(&self) -> Option<String> {
        self.as_ref().and_then(ToUrlString::to_url_string)
    }
}

/// Coerce a URL-like value to a string before it is parsed.
///
/// Strings pass through, URL types yield their href, and a [`UrlObject`]
/// yields its `url`. Anything else, including no input, is `None`.
///
/// # Examples
///
/// ```
/// use meet_uri::{UrlObject, to_url_string};
///
/// assert_eq!(to_url_string(Some("room")).as_deref(), Some("room"));
/// assert_eq!(
///     to_url_string(Some(&UrlObject::new("https://example.com/room"))).as_deref(),
///     Some("https://example.com/room")
/// );
/// assert_eq!(to_url_string(Some(&UrlObject::default())), None);
/// assert_eq!(to_url_string::<str>(None), None);
/// ```
pub fn to_url_string<T: ToUrlString + ?Sized>(input: Option<&T>) -> Option<String> {
    input.and_then(ToUrlString::to_url_string)
}
