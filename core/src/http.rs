//! Plain-data request and outcome types.
//!
//! # Design
//! A [`RequestSpec`] describes one POST as data — URL, pre-serialized JSON
//! payload, header set — and is fixed for the life of the client built from
//! it. A [`RequestOutcome`] is produced exactly once per performed request.
//! All fields use owned types so a spec can be built anywhere and handed to
//! the client by value.

/// Everything needed to issue one JSON POST.
///
/// `Content-Type: application/json` is installed at construction; header
/// keys stay unique.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub payload: String,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(url: &str, payload: &str) -> Self {
        Self {
            url: url.to_string(),
            payload: payload.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Add an `Authorization` header value, replacing any existing one.
    ///
    /// Typically fed by [`crate::auth::encode_basic_auth`].
    pub fn with_authorization(mut self, value: &str) -> Self {
        self.headers.retain(|(name, _)| !name.eq_ignore_ascii_case("Authorization"));
        self.headers.push(("Authorization".to_string(), value.to_string()));
        self
    }
}

/// The result of one performed request: status code plus the full response
/// body, accumulated in arrival order.
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    pub status: u16,
    pub body: Vec<u8>,
}
