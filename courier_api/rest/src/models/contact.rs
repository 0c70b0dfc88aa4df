use courier_models::contact::{SubmissionErrors, SubmissionFields};
use serde::{Deserialize, Serialize};

/// Raw payload of the contact endpoint.
///
/// Every field is optional at this layer so that missing or invalid fields can
/// be reported per field instead of failing deserialization of the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub captcha: Option<String>,
}

impl From<ApiContactRequest> for SubmissionFields {
    fn from(value: ApiContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
            captcha: value.captcha,
        }
    }
}

#[derive(Serialize)]
pub struct ApiContactSuccess {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInvalidSubmission {
    pub error: &'static str,
    pub field_errors: SubmissionErrors,
}

#[derive(Serialize)]
pub struct ApiCaptchaRejected {
    pub error: &'static str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
