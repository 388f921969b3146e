use crate::HttpStatusCode;

/// **VALUE**: Verifies the two statuses that carry meaning for the completion service.
///
/// **WHY THIS MATTERS**: 429 means the plan quota is exhausted and 403 means the user is
/// not subscribed. Any other code must not be mistaken for either.
///
/// **BUG THIS CATCHES**: Would catch swapped or widened status predicates.
#[test]
fn given_status_codes_when_checked_then_only_exact_codes_match() {
    assert!(HttpStatusCode(429).is_rate_limited());
    assert!(!HttpStatusCode(429).is_forbidden());
    assert!(HttpStatusCode(403).is_forbidden());
    assert!(!HttpStatusCode(403).is_rate_limited());

    for code in [400, 401, 404, 500, 503] {
        let status = HttpStatusCode::from(code);
        assert!(!status.is_rate_limited(), "{code} is not rate limiting");
        assert!(!status.is_forbidden(), "{code} is not forbidden");
    }
}

/// **VALUE**: Verifies the status prints as the bare code.
///
/// **BUG THIS CATCHES**: Would catch error messages rendering the tuple struct
/// (`HttpStatusCode(418)`) instead of the number.
#[test]
fn given_status_when_displayed_then_bare_code() {
    assert_eq!(HttpStatusCode(418).to_string(), "418");
}
