use std::sync::Arc;

use courier_extern_contracts::recaptcha::RecaptchaApiService;
use courier_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};

#[derive(Debug, Clone)]
pub struct CaptchaServiceImpl<RecaptchaApi> {
    recaptcha_api: RecaptchaApi,
    config: CaptchaServiceConfig,
}

#[derive(Debug, Clone)]
pub struct CaptchaServiceConfig {
    pub secret: Arc<str>,
    pub min_score: f64,
}

impl<RecaptchaApi> CaptchaServiceImpl<RecaptchaApi> {
    pub fn new(config: CaptchaServiceConfig, recaptcha_api: RecaptchaApi) -> Self {
        Self {
            recaptcha_api,
            config,
        }
    }
}

impl<RecaptchaApi> CaptchaService for CaptchaServiceImpl<RecaptchaApi>
where
    RecaptchaApi: RecaptchaApiService,
{
    async fn check(&self, response: &str) -> Result<(), CaptchaCheckError> {
        let verdict = self
            .recaptcha_api
            .siteverify(response, &self.config.secret)
            .await?;
        let ok = verdict.success && verdict.score.unwrap_or(0.0) >= self.config.min_score;
        ok.then_some(()).ok_or(CaptchaCheckError::Rejected(verdict))
    }
}
