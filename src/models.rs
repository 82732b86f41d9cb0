use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/demo-request` as it arrives on the wire.
///
/// Every key is optional so that a missing field becomes a validation
/// error instead of a deserialization failure. `null` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DemoRequest {
    #[serde(default)]
    #[schema(example = "علی")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "ali@example.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "09123456789")]
    pub phone: Option<String>,
}

impl DemoRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }
}

/// A lead whose three fields are all present.
///
/// Lives for one request only and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Notification email handed to the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = "درخواست شما با موفقیت ارسال شد")]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "تمام فیلدها الزامی هستند")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_keys_deserialize_as_absent() {
        let request: DemoRequest =
            serde_json::from_str(r#"{"name": "علی", "email": null}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("علی"));
        assert_eq!(request.email, None);
        assert_eq!(request.phone, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let request: DemoRequest = serde_json::from_str(
            r#"{"name": "a", "email": "b@c.d", "phone": "1", "company": "x"}"#,
        )
        .unwrap();
        assert_eq!(request, DemoRequest::new("a", "b@c.d", "1"));
    }
}
