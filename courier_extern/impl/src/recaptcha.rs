use std::sync::Arc;

use courier_extern_contracts::recaptcha::RecaptchaApiService;
use courier_models::contact::CaptchaVerdict;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

/// https://developers.google.com/recaptcha/docs/verify
const SITEVERIFY_ENDPOINT: &str = "https://www.google.com/recaptcha/api/siteverify";

#[derive(Debug, Clone)]
pub struct RecaptchaApiServiceImpl {
    config: RecaptchaApiServiceConfig,
    client: HttpClient,
}

impl RecaptchaApiServiceImpl {
    pub fn new(config: RecaptchaApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct RecaptchaApiServiceConfig {
    siteverify_endpoint: Arc<Url>,
}

impl RecaptchaApiServiceConfig {
    pub fn new(siteverify_endpoint_override: Option<Url>) -> Self {
        Self {
            siteverify_endpoint: siteverify_endpoint_override
                .unwrap_or_else(|| SITEVERIFY_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl RecaptchaApiService for RecaptchaApiServiceImpl {
    async fn siteverify(&self, response: &str, secret: &str) -> anyhow::Result<CaptchaVerdict> {
        let verdict = self
            .client
            .post((*self.config.siteverify_endpoint).clone())
            .form(&SiteverifyRequest { secret, response })
            .send()
            .await?
            .error_for_status()?
            .json::<SiteverifyResponse>()
            .await?;
        Ok(verdict.into())
    }
}

#[derive(Serialize)]
struct SiteverifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
}

#[derive(Deserialize)]
struct SiteverifyResponse {
    success: bool,
    score: Option<f64>,
}

impl From<SiteverifyResponse> for CaptchaVerdict {
    fn from(value: SiteverifyResponse) -> Self {
        Self {
            success: value.success,
            score: value.score,
        }
    }
}
