//! HTTP Basic Authentication header encoding.
//!
//! # Design
//! Pure functions over borrowed text — nothing here touches the network or
//! stores credentials. Callers build a [`Credentials`] pair (or call
//! [`encode_basic_auth`] directly) right before configuring a request and
//! drop it once the header value exists.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A username/password pair awaiting encoding.
///
/// Borrowed so the pair never outlives the call site that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }

    /// Encode this pair as an `Authorization` header value.
    pub fn header_value(&self) -> String {
        encode_basic_auth(self.username, self.password)
    }
}

/// Encode a username/password pair as `Basic <base64(username:password)>`.
///
/// Uses the standard Base64 alphabet with `=` padding and no line breaks.
/// Total over all inputs — empty strings are legal and there is no failure
/// path.
///
/// The first `:` in the decoded token delimits username from password, so a
/// username containing `:` decodes ambiguously. This routine does not reject
/// such usernames; avoiding them is the caller's responsibility.
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
