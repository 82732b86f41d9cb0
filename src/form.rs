//! Demo request form state machine.
//!
//! ```text
//! idle ──submit──> loading ──accepted──> success
//!                     │
//!                     └──rejected / unreachable──> error
//! success | error ──submit──> loading
//! ```
//!
//! Nothing returns to idle on its own; a new submit is required.

use crate::client::{IntakeClient, IntakeOutcome};
use crate::models::DemoRequest;

/// Shown when the server rejects a request without an `error` text.
pub const FALLBACK_ERROR_MESSAGE: &str = "خطایی رخ داد";
/// Shown when the request fails before an answer arrives.
pub const NETWORK_ERROR_MESSAGE: &str = "خطا در ارسال درخواست";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Values typed into the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Mirrors the inputs' `required` attribute: every field non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }

    fn to_request(&self) -> DemoRequest {
        DemoRequest::new(&self.name, &self.email, &self.phone)
    }
}

#[derive(Debug, Clone)]
pub struct DemoRequestForm {
    pub fields: FormFields,
    status: FormStatus,
    error_message: String,
}

impl Default for DemoRequestForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoRequestForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            status: FormStatus::Idle,
            error_message: String::new(),
        }
    }

    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            ..Self::new()
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Message of the last failure. Kept until the next failure replaces it.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Enters `Loading`. Returns `false` and leaves the state untouched
    /// while a submission is in flight (disabled button) or while a
    /// required field is empty.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == FormStatus::Loading || !self.fields.is_complete() {
            return false;
        }
        self.status = FormStatus::Loading;
        true
    }

    /// Leaves `Loading` according to the endpoint's answer.
    ///
    /// Outcomes that arrive outside `Loading` are ignored.
    pub fn apply_outcome(&mut self, outcome: IntakeOutcome) {
        if self.status != FormStatus::Loading {
            tracing::debug!("Ignoring outcome outside of loading: {:?}", outcome);
            return;
        }

        match outcome {
            IntakeOutcome::Accepted { .. } => {
                self.status = FormStatus::Success;
                self.fields = FormFields::default();
            }
            IntakeOutcome::Rejected { error, .. } => {
                self.status = FormStatus::Error;
                self.error_message = error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            }
            IntakeOutcome::Unreachable { .. } => {
                self.status = FormStatus::Error;
                self.error_message = NETWORK_ERROR_MESSAGE.to_string();
            }
        }
    }

    /// Runs one full submission: loading, one request, final state.
    ///
    /// Returns the resulting status; a refused submit sends nothing and
    /// returns the current status.
    pub async fn submit(&mut self, client: &IntakeClient) -> FormStatus {
        if !self.begin_submit() {
            return self.status;
        }
        let outcome = client.post_demo_request(&self.fields.to_request()).await;
        self.apply_outcome(outcome);
        self.status
    }
}
