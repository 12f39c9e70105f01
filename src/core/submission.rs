//! Registration submission against an ordered list of candidate endpoints
//!
//! Each candidate yields an [`AttemptOutcome`]. Candidates are tried left to
//! right and the first one that responds at all, successfully or not, decides
//! the result. Only connection-level failures move on to the next candidate.

use serde::Deserialize;

use super::validation::RegistrationInput;

/// Fallback text when a failed response carries no usable message
pub const GENERIC_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// What a single POST to one candidate produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// No HTTP response at all (DNS, refused connection, CORS, ...)
    Unreachable(String),
    /// Any HTTP response, whatever its status
    Responded { status: u16, body: String },
}

/// Sends one JSON POST. Implemented over `fetch` in the browser.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &str) -> AttemptOutcome;
}

/// Body shape the registration backend answers with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply {
    /// Lenient parse, a non-JSON body reads as "no message"
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Candidate that accepted the registration
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Network error. Please check your connection and try again.")]
    Unreachable,
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("Could not encode registration: {0}")]
    Encode(String),
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Submit `input` to the first reachable candidate.
///
/// `on_unreachable` is told about every candidate that gave no response,
/// so the caller can log it.
pub async fn submit_registration<T: Transport>(
    transport: &T,
    endpoints: &[String],
    input: &RegistrationInput,
    mut on_unreachable: impl FnMut(&str, &str),
) -> Result<SubmissionReceipt, SubmitError> {
    let body = serde_json::to_string(input).map_err(|e| SubmitError::Encode(e.to_string()))?;

    for endpoint in endpoints {
        match transport.post_json(endpoint, &body).await {
            AttemptOutcome::Unreachable(reason) => {
                on_unreachable(endpoint, &reason);
            }
            AttemptOutcome::Responded { status, body } => {
                return if is_success(status) {
                    Ok(SubmissionReceipt {
                        endpoint: endpoint.clone(),
                    })
                } else {
                    let message = ServerReply::parse(&body)
                        .message
                        .filter(|m| !m.trim().is_empty());
                    Err(SubmitError::Rejected { status, message })
                };
            }
        }
    }

    Err(SubmitError::Unreachable)
}
