use std::future::Future;

use courier_models::contact::CaptchaVerdict;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CaptchaService: Send + Sync + 'static {
    /// Verifies a captcha response token and applies the acceptance policy.
    fn check(&self, response: &str) -> impl Future<Output = Result<(), CaptchaCheckError>> + Send;
}

#[derive(Debug, Error)]
pub enum CaptchaCheckError {
    #[error("The response is invalid or the sender is probably not human.")]
    Rejected(CaptchaVerdict),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockCaptchaService {
    pub fn with_check(mut self, response: String, result: Result<(), CaptchaCheckError>) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(response))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
