use std::future::Future;

use courier_models::contact::{CaptchaVerdict, SubmissionErrors, SubmissionFields};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates the submitted fields, verifies the captcha response and
    /// forwards the message to the notification webhook.
    fn submit(
        &self,
        fields: SubmissionFields,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission contains invalid fields.")]
    InvalidFields(SubmissionErrors),
    #[error("The captcha response was rejected.")]
    CaptchaRejected(CaptchaVerdict),
    #[error("Failed to verify the captcha response.")]
    CaptchaVerification(#[source] anyhow::Error),
    #[error("Failed to deliver the message.")]
    Delivery(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        fields: SubmissionFields,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
