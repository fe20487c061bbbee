use crate::checkers::scheme_len;
use crate::compat::{Cow, format};
use crate::log::debug;
use crate::types::SchemeType;

/// Which token of a stacked scheme run decides the canonical scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeSelection {
    /// The last token wins, e.g. `org.jitsi.meet:http://` resolves to `http:`
    #[default]
    Last,
    /// The first token wins, e.g. `org.jitsi.meet:http://` resolves to `https:`
    First,
}

/// Length of a stacked scheme token reached through `//`.
///
/// `org.jitsi.meet://https://host` stacks `https:` behind the app scheme.
/// The nested token only counts when it is `http:` or `https:` and is itself
/// followed by `//`, so that `https://host:443` and `https://host://path`
/// keep `host` as their authority.
fn nested_scheme_len(rest: &str) -> Option<usize> {
    let after_slashes = rest.strip_prefix("//")?;
    let len = scheme_len(after_slashes)?;
    SchemeType::from_protocol(&after_slashes[..len])?;
    after_slashes[len..].starts_with("//").then_some(len + 2)
}

/// Find the run of consecutive scheme tokens at the start of `uri`.
/// Returns the selected token and the length of the whole run.
fn scheme_run(uri: &str, selection: SchemeSelection) -> Option<(&str, usize)> {
    let mut end = scheme_len(uri)?;
    let first = &uri[..end];
    let mut last = first;

    loop {
        let rest = &uri[end..];
        if let Some(len) = scheme_len(rest) {
            last = &rest[..len];
            end += len;
        } else if let Some(len) = nested_scheme_len(rest) {
            last = &rest[2..len];
            end += len;
        } else {
            break;
        }
    }

    let token = match selection {
        SchemeSelection::Last => last,
        SchemeSelection::First => first,
    };
    Some((token, end))
}

/// Collapse a leading run of scheme tokens into one well-known scheme.
///
/// The mobile app registers a custom scheme which may precede or replace
/// HTTP(S). The whole run is removed and, when an authority follows, exactly
/// one `http:` or `https:` is put back. A bare room name keeps no scheme.
///
/// # Examples
///
/// ```
/// use meet_uri::fix_uri_scheme;
///
/// assert_eq!(fix_uri_scheme("org.jitsi.meet:http://example.com/a"), "http://example.com/a");
/// assert_eq!(fix_uri_scheme("org.jitsi.meet://example.com/a"), "https://example.com/a");
/// assert_eq!(fix_uri_scheme("org.jitsi.meet:Room123"), "Room123");
/// assert_eq!(fix_uri_scheme("Room123"), "Room123");
/// ```
pub fn fix_uri_scheme(uri: &str) -> Cow<'_, str> {
    fix_uri_scheme_with(uri, SchemeSelection::Last)
}

/// [`fix_uri_scheme`] with an explicit choice of the deciding token.
pub fn fix_uri_scheme_with(uri: &str, selection: SchemeSelection) -> Cow<'_, str> {
    let Some((token, run_len)) = scheme_run(uri, selection) else {
        return Cow::Borrowed(uri);
    };

    let scheme = SchemeType::from_token(token);
    let rest = &uri[run_len..];

    if rest.starts_with("//") {
        // Fast path: already canonical
        if &uri[..run_len] == scheme.protocol() {
            return Cow::Borrowed(uri);
        }
        debug!("rewrote scheme {:?} to {}", &uri[..run_len], scheme.protocol());
        Cow::Owned(format!("{}{rest}", scheme.protocol()))
    } else {
        debug!("dropped scheme {:?} without authority", &uri[..run_len]);
        Cow::Borrowed(rest)
    }
}
