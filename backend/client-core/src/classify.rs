//! Mapping of transport failures onto [`ResultStatus`].

use crate::error::TransportErrorKind;

use models::ResultStatus;

/// Map a failure kind to a status.
///
/// `fallback` is what an unrecognized failure means to the caller:
/// [`ResultStatus::UnknownError`] for a completion,
/// [`ResultStatus::InvalidApiKey`] for a key check.
pub fn classify_failure(kind: TransportErrorKind, fallback: ResultStatus) -> ResultStatus {
    match kind {
        TransportErrorKind::NetworkUnreachable => ResultStatus::InternetDisconnected,
        TransportErrorKind::RateLimited => ResultStatus::ExceededQuota,
        TransportErrorKind::Forbidden => ResultStatus::UserUnsubscribed,
        TransportErrorKind::Other => fallback,
    }
}
