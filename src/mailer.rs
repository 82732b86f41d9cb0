use crate::errors::AppError;
use crate::models::OutboundEmail;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Transactional-email delivery provider.
///
/// `send` succeeds with the provider's message id or fails with
/// `AppError::DeliveryError` carrying the provider's reason.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<String, AppError>;
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Client for a Resend-compatible REST API (`POST /emails`).
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResendMailer {
    /// Creates a new `ResendMailer`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the provider API.
    /// * `api_key` - The API key sent as a bearer token.
    /// * `timeout` - Upper bound on one send call.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create mail client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    /// Sends one email.
    ///
    /// # Returns
    ///
    /// * `Result<String, AppError>` - The provider's message id.
    async fn send(&self, email: &OutboundEmail) -> Result<String, AppError> {
        let url = format!("{}/emails", self.base_url);
        tracing::info!("Sending lead notification to {} via {}", email.to, url);

        let body = json!({
            "from": email.from,
            "to": [email.to],
            "reply_to": email.reply_to,
            "subject": email.subject,
            "html": email.html,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::DeliveryError(format!("Mail API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::DeliveryError(format!(
                "Mail API returned {}: {}",
                status, error_text
            )));
        }

        let sent: SendEmailResponse = response.json().await.map_err(|e| {
            AppError::DeliveryError(format!("Failed to parse Mail API response: {}", e))
        })?;

        tracing::info!("✓ Lead notification sent: {}", sent.id);
        Ok(sent.id)
    }
}
