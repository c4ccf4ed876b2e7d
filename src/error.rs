use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Longest slice of a response body carried into an error message
const MAX_BODY_PREVIEW: usize = 200;

/// Client-side rejections the Tembo API answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BadRequest,
    Unauthorized,
    Forbidden,
    Conflict,
}

impl Rejection {
    /// Classify a status code, `None` when it is not a known rejection
    #[must_use]
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::BAD_REQUEST => Some(Self::BadRequest),
            StatusCode::UNAUTHORIZED => Some(Self::Unauthorized),
            StatusCode::FORBIDDEN => Some(Self::Forbidden),
            StatusCode::CONFLICT => Some(Self::Conflict),
            _ => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::Conflict => "Conflict",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Tembo API {kind}: {message}")]
    Rejected { kind: Rejection, message: String },

    #[error("Tembo API request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Tembo API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed Tembo API response: {0}")]
    Malformed(String),

    #[error("Tembo token contains characters that are not allowed in an HTTP header")]
    InvalidToken,

    #[error("Failed to delete instance {instance_id}. Status code: {status}")]
    DeleteFailed { instance_id: String, status: u16 },

    #[error("Instance encountered an error.")]
    InstanceFailed,

    #[error("Instance did not reach the \"Up\" state within the expected time.")]
    Timeout { attempts: u32 },
}

impl Error {
    /// Build the error for an unsuccessful response
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = preview(status, body);
        match Rejection::from_status(status) {
            Some(kind) => Self::Rejected { kind, message },
            None => Self::Status {
                status: status.as_u16(),
                message,
            },
        }
    }
}

fn preview(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string();
    }

    if body.chars().count() > MAX_BODY_PREVIEW {
        let truncated: String = body.chars().take(MAX_BODY_PREVIEW).collect();
        format!("{truncated}... (truncated)")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_rejection_from_status() {
        assert_eq!(
            Rejection::from_status(StatusCode::BAD_REQUEST),
            Some(Rejection::BadRequest)
        );
        assert_eq!(
            Rejection::from_status(StatusCode::UNAUTHORIZED),
            Some(Rejection::Unauthorized)
        );
        assert_eq!(
            Rejection::from_status(StatusCode::FORBIDDEN),
            Some(Rejection::Forbidden)
        );
        assert_eq!(
            Rejection::from_status(StatusCode::CONFLICT),
            Some(Rejection::Conflict)
        );
        assert_eq!(Rejection::from_status(StatusCode::NOT_FOUND), None);
        assert_eq!(Rejection::from_status(StatusCode::BAD_GATEWAY), None);
    }

    #[test]
    fn test_from_response_known_rejection() {
        let err = Error::from_response(StatusCode::UNAUTHORIZED, "invalid token");
        assert!(matches!(
            err,
            Error::Rejected {
                kind: Rejection::Unauthorized,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Tembo API Unauthorized: invalid token");
    }

    #[test]
    fn test_from_response_other_status() {
        let err = Error::from_response(StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(matches!(err, Error::Status { status: 503, .. }));
        assert_eq!(
            err.to_string(),
            "Tembo API request failed with status 503: Service Unavailable"
        );
    }

    #[test]
    fn test_from_response_truncates_body() {
        let body = "x".repeat(1000);
        let err = Error::from_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let msg = err.to_string();
        assert!(msg.ends_with("... (truncated)"));
        assert!(msg.len() < 300);
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            Error::InstanceFailed.to_string(),
            "Instance encountered an error."
        );
        assert_eq!(
            Error::Timeout { attempts: 3 }.to_string(),
            "Instance did not reach the \"Up\" state within the expected time."
        );
        assert_eq!(
            Error::DeleteFailed {
                instance_id: "inst-1".to_string(),
                status: 404,
            }
            .to_string(),
            "Failed to delete instance inst-1. Status code: 404"
        );
    }
}
