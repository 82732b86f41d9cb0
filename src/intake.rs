//! Lead intake pipeline: validate, compose, deliver.
//!
//! Each call is independent. Nothing is stored, retried or deduplicated, so
//! submitting the same lead twice sends two emails.

use crate::config::MailSettings;
use crate::email_template::{render_lead_html, tehran_date};
use crate::errors::{AppError, ResultExt};
use crate::mailer::Mailer;
use crate::models::{DemoRequest, LeadSubmission, OutboundEmail};
use chrono::{DateTime, Utc};

pub const MISSING_FIELDS_MESSAGE: &str = "تمام فیلدها الزامی هستند";
pub const SUCCESS_MESSAGE: &str = "درخواست شما با موفقیت ارسال شد";

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Checks that name, email and phone are all present and non-empty.
///
/// No format checks are made on email or phone.
pub fn validate(request: DemoRequest) -> Result<LeadSubmission, AppError> {
    match (
        present(request.name),
        present(request.email),
        present(request.phone),
    ) {
        (Some(name), Some(email), Some(phone)) => Ok(LeadSubmission { name, email, phone }),
        _ => Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())),
    }
}

/// Subject line of the notification; embeds the lead's name.
pub fn subject_for(lead: &LeadSubmission) -> String {
    format!("🎯 درخواست دمو جدید از {}", lead.name)
}

/// Builds the notification email for a lead.
///
/// Sender and recipient are fixed by configuration; replies go to the lead.
pub fn compose(
    lead: &LeadSubmission,
    settings: &MailSettings,
    now: DateTime<Utc>,
) -> OutboundEmail {
    OutboundEmail {
        from: settings.from_header(),
        to: settings.to_address.clone(),
        reply_to: lead.email.clone(),
        subject: subject_for(lead),
        html: render_lead_html(lead, tehran_date(now)),
    }
}

/// Validates a demo request and relays it through the mailer.
///
/// The mailer is called exactly once when validation passes and never when
/// it fails.
///
/// # Returns
///
/// * `Result<String, AppError>` - The provider's message id.
pub async fn submit(
    mailer: &dyn Mailer,
    settings: &MailSettings,
    request: DemoRequest,
) -> Result<String, AppError> {
    let lead = validate(request)?;
    let email = compose(&lead, settings, Utc::now());

    tracing::debug!("Composed notification '{}' for {}", email.subject, lead.email);

    mailer
        .send(&email)
        .await
        .with_context(|| format!("delivering demo request from {}", lead.email))
}
