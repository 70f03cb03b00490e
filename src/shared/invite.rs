//! Invite code validation
//!
//! Turns a configured invite (bare code or full invite link) into an
//! [`InviteCode`]. Links are matched with a broad, case-insensitive pattern
//! first and the captured segment is then checked against the strict code
//! pattern, so both checks must pass.
//!
//! ```rust
//! use community_join::shared::invite::validate_invite;
//!
//! let code = validate_invite("https://discord.com/invite/Ab3-XY").unwrap();
//! assert_eq!(code.as_str(), "Ab3-XY");
//! assert!(validate_invite("https://discord.gg/a!b").is_none());
//! ```

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use url::Url;

use crate::shared::error::JoinError;

/// Prefix every join link starts with
pub const INVITE_BASE_URL: &str = "https://discord.gg/";

/// Substrings that mark an input as an invite link rather than a bare code
const INVITE_DOMAINS: [&str; 2] = ["discord.gg/", "discord.com/invite/"];

/// Letters, digits and hyphens, 2 to 32 characters
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]{2,32}$").expect("valid regex"));

static INVITE_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:discord\.gg|discord\.com/invite)/([a-zA-Z0-9-]+)").expect("valid regex")
});

/// Characters left untouched by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A validated invite code
///
/// Only obtainable through [`validate_invite`] or [`InviteCode::parse_strict`],
/// so the inner string always matches the strict code pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InviteCode(String);

impl InviteCode {
    /// Accept `candidate` only if it is a complete strict match
    pub fn parse_strict(candidate: &str) -> Option<Self> {
        CODE_PATTERN
            .is_match(candidate)
            .then(|| Self(candidate.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join link for this code: the invite prefix plus the percent-encoded code
    pub fn join_url(&self) -> Result<Url, JoinError> {
        let encoded = utf8_percent_encode(&self.0, URI_COMPONENT);
        Ok(Url::parse(&format!("{INVITE_BASE_URL}{encoded}"))?)
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InviteCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<InviteCode> for String {
    fn from(code: InviteCode) -> Self {
        code.0
    }
}

/// Validate a bare invite code or an invite link
pub fn validate_invite(input: &str) -> Option<InviteCode> {
    let trimmed = trim_input(input);

    if INVITE_DOMAINS.iter().any(|domain| trimmed.contains(domain)) {
        let captured = INVITE_LINK_PATTERN.captures(trimmed)?.get(1)?.as_str();
        // The link pattern is case-insensitive and Unicode-aware; the strict
        // pattern is neither.
        return InviteCode::parse_strict(captured);
    }

    InviteCode::parse_strict(trimmed)
}

/// Validate a loosely typed configuration value
///
/// Absent values and anything that is not a string are rejected.
pub fn validate_invite_value(input: Option<&serde_json::Value>) -> Option<InviteCode> {
    input?.as_str().and_then(validate_invite)
}

// ECMAScript WhiteSpace and LineTerminator, the set String.prototype.trim
// strips. U+0085 is not in it.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn trim_input(input: &str) -> &str {
    input.trim_matches(is_js_whitespace)
}
