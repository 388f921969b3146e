//! HTTP status code helpers for failure classification.

/// HTTP status code reported by the completion service.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const FORBIDDEN: HttpStatusCode = HttpStatusCode(403);
    pub const TOO_MANY_REQUESTS: HttpStatusCode = HttpStatusCode(429);

    /// The caller exhausted the quota of their plan.
    pub fn is_rate_limited(&self) -> bool {
        *self == Self::TOO_MANY_REQUESTS
    }

    /// The gateway refused the caller, typically because no subscription exists.
    pub fn is_forbidden(&self) -> bool {
        *self == Self::FORBIDDEN
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
