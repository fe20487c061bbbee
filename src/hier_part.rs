use crate::checkers::scheme_len;
use crate::compat::{Cow, String};
use crate::helpers::strip_prefix_ignore_ascii_case;
use crate::log::debug;

/// A deployment whose URLs do not follow the `<host>/<room>` layout.
///
/// A location matches when it is `<scheme>//<authority>/<prefix><rest>` for
/// one of `path_prefixes` (ASCII case-insensitive). It is rewritten to
/// `<scheme>//<target>/<rest>`, keeping the scheme token verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule<'a> {
    /// Authority the rule applies to, e.g. `hipchat.com`
    pub authority: &'a str,
    /// Path prefixes (each ending in `/`) that precede the room name
    pub path_prefixes: &'a [&'a str],
    /// Authority to rewrite to
    pub target: &'a str,
}

/// The legacy deployments known to need a rewrite, in match order.
pub const LEGACY_REWRITES: &[RewriteRule<'static>] = &[
    RewriteRule {
        authority: "hipchat.com",
        path_prefixes: &["video/call/"],
        target: "enso.hipchat.me",
    },
    RewriteRule {
        authority: "enso.me",
        path_prefixes: &["call/", "meeting/"],
        target: "enso.hipchat.me",
    },
];

impl RewriteRule<'_> {
    /// Match this rule against the part of a location after its scheme.
    /// Returns the remainder following the matched path prefix.
    fn strip<'u>(&self, hier_part: &'u str) -> Option<&'u str> {
        let authority = hier_part.strip_prefix("//")?;
        let path = strip_prefix_ignore_ascii_case(authority, self.authority)?.strip_prefix('/')?;

        self.path_prefixes
            .iter()
            .find_map(|prefix| strip_prefix_ignore_ascii_case(path, prefix))
    }
}

/// Rewrite the hier-part of locations on the [`LEGACY_REWRITES`] deployments.
///
/// # Examples
///
/// ```
/// use meet_uri::fix_uri_hier_part;
///
/// assert_eq!(
///     fix_uri_hier_part("https://hipchat.com/video/call/myroom"),
///     "https://enso.hipchat.me/myroom"
/// );
/// assert_eq!(
///     fix_uri_hier_part("https://meet.example.com/myroom"),
///     "https://meet.example.com/myroom"
/// );
/// ```
pub fn fix_uri_hier_part(uri: &str) -> Cow<'_, str> {
    fix_uri_hier_part_with(uri, LEGACY_REWRITES)
}

/// Rewrite the hier-part of `uri` with the first matching rule of `rules`.
/// Returns the input unchanged if no rule matches.
pub fn fix_uri_hier_part_with<'u>(uri: &'u str, rules: &[RewriteRule<'_>]) -> Cow<'u, str> {
    let Some(scheme_end) = scheme_len(uri) else {
        return Cow::Borrowed(uri);
    };
    let (scheme, hier_part) = uri.split_at(scheme_end);

    let Some((rule, rest)) = rules
        .iter()
        .find_map(|rule| rule.strip(hier_part).map(|rest| (rule, rest)))
    else {
        return Cow::Borrowed(uri);
    };

    debug!("rewrote {} location to {}", rule.authority, rule.target);

    let mut fixed = String::with_capacity(scheme.len() + rule.target.len() + rest.len() + 3);
    fixed.push_str(scheme);
    fixed.push_str("//");
    fixed.push_str(rule.target);
    fixed.push('/');
    fixed.push_str(rest);
    Cow::Owned(fixed)
}
