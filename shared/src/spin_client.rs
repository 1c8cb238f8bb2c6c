//! Contract between the wheel and the remote outcome authority.

use thiserror::Error;

use crate::constants::ALREADY_SPUN_MESSAGE;
use crate::wheel::{ConflictBody, SpinOutcome, SpinResponse, StatusResponse};

const HTTP_CONFLICT: u16 = 409;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinRequestError {
    /// The authority has already recorded a spin for this session.
    #[error("{0}")]
    AlreadySpun(String),
    #[error("spin service unavailable")]
    Unavailable,
}

/// Anything that can ask the authority for an outcome.
///
/// Implementations send at most one request per call and never retry.
#[allow(async_fn_in_trait)]
pub trait SpinClient {
    async fn request_spin(&self) -> Result<SpinOutcome, SpinRequestError>;

    async fn fetch_status(&self) -> Result<StatusResponse, SpinRequestError>;
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify a raw `POST /api/spin` response.
pub fn classify_spin_response(status: u16, body: &[u8]) -> Result<SpinOutcome, SpinRequestError> {
    if status == HTTP_CONFLICT {
        let message = serde_json::from_slice::<ConflictBody>(body)
            .map(|conflict| conflict.message)
            .unwrap_or_else(|_| ALREADY_SPUN_MESSAGE.to_string());
        return Err(SpinRequestError::AlreadySpun(message));
    }

    if !is_success(status) {
        log::warn!("spin request failed with status {}", status);
        return Err(SpinRequestError::Unavailable);
    }

    match serde_json::from_slice::<SpinResponse>(body) {
        Ok(response) => Ok(response.into()),
        Err(e) => {
            log::warn!("unreadable spin response: {}", e);
            Err(SpinRequestError::Unavailable)
        }
    }
}

/// Classify a raw `GET /api/status` response.
pub fn classify_status_response(
    status: u16,
    body: &[u8],
) -> Result<StatusResponse, SpinRequestError> {
    if !is_success(status) {
        return Err(SpinRequestError::Unavailable);
    }
    serde_json::from_slice(body).map_err(|_| SpinRequestError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_parsed() {
        let body = br#"{"sliceIndex":1,"label":"USB Flash","prize":true,"allPrizesGone":true}"#;
        let outcome = classify_spin_response(200, body).unwrap();
        assert_eq!(outcome.slice_index, 1);
        assert!(outcome.is_prize);
        assert!(outcome.all_prizes_gone);
    }

    #[test]
    fn test_conflict_carries_server_message() {
        let result = classify_spin_response(409, br#"{"message":"You Have Already Spun"}"#);
        assert_eq!(
            result,
            Err(SpinRequestError::AlreadySpun("You Have Already Spun".to_string()))
        );
    }

    #[test]
    fn test_conflict_without_body_uses_default_message() {
        let result = classify_spin_response(409, b"");
        assert_eq!(
            result,
            Err(SpinRequestError::AlreadySpun(ALREADY_SPUN_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_other_statuses_are_unavailable() {
        for status in [400, 401, 404, 429, 500, 502, 503] {
            assert_eq!(
                classify_spin_response(status, br#"{"message":"nope"}"#),
                Err(SpinRequestError::Unavailable)
            );
        }
    }

    #[test]
    fn test_malformed_success_is_unavailable() {
        assert_eq!(
            classify_spin_response(200, b"<html>"),
            Err(SpinRequestError::Unavailable)
        );
    }

    #[test]
    fn test_status_response() {
        let status = classify_status_response(200, br#"{"allPrizesGone":true}"#).unwrap();
        assert!(status.all_prizes_gone);
        assert_eq!(
            classify_status_response(503, b""),
            Err(SpinRequestError::Unavailable)
        );
    }
}
