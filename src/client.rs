use crate::app::DEMO_REQUEST_PATH;
use crate::errors::AppError;
use crate::models::DemoRequest;
use serde::Deserialize;

/// Result of one call to the intake endpoint, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// 2xx response, with the server's confirmation if it sent one.
    Accepted { message: Option<String> },
    /// Non-2xx response, with the server's `error` text if it sent one.
    Rejected { status: u16, error: Option<String> },
    /// The request never produced an answer we could read.
    Unreachable { reason: String },
}

#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    message: Option<String>,
    error: Option<String>,
}

/// HTTP client for `POST /api/demo-request`.
#[derive(Clone)]
pub struct IntakeClient {
    client: reqwest::Client,
    base_url: String,
}

impl IntakeClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// No timeout is set; the call lasts as long as the server takes.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            AppError::InternalError(format!("Failed to create intake client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Posts one demo request and classifies the answer.
    pub async fn post_demo_request(&self, request: &DemoRequest) -> IntakeOutcome {
        let url = format!("{}{}", self.base_url, DEMO_REQUEST_PATH);
        tracing::debug!("Submitting demo request to {}", url);

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Demo request did not reach {}: {}", url, e);
                return IntakeOutcome::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = match response.json::<ResponseBody>().await {
            Ok(body) => body,
            // Same as the browser form: an unreadable body aborts the attempt.
            Err(e) => {
                return IntakeOutcome::Unreachable {
                    reason: format!("unreadable response ({}): {}", status, e),
                }
            }
        };

        if status.is_success() {
            IntakeOutcome::Accepted {
                message: body.message,
            }
        } else {
            IntakeOutcome::Rejected {
                status: status.as_u16(),
                error: body.error,
            }
        }
    }
}
