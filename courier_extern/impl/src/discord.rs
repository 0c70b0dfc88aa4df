use std::sync::Arc;

use anyhow::Context;
use courier_extern_contracts::discord::DiscordApiService;
use serde::Serialize;
use url::Url;

use crate::http::HttpClient;

/// Client for the "Execute Webhook" endpoint:
/// https://discord.com/developers/docs/resources/webhook#execute-webhook
#[derive(Debug, Clone)]
pub struct DiscordApiServiceImpl {
    config: DiscordApiServiceConfig,
    client: HttpClient,
}

impl DiscordApiServiceImpl {
    pub fn new(config: DiscordApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct DiscordApiServiceConfig {
    webhook_url: Arc<Url>,
}

impl DiscordApiServiceConfig {
    pub fn new(webhook_url: Url) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }
}

impl DiscordApiService for DiscordApiServiceImpl {
    async fn execute_webhook(&self, content: &str) -> anyhow::Result<()> {
        self.client
            .post((*self.config.webhook_url).clone())
            .json(&ExecuteWebhookRequest { content })
            .send()
            .await
            .context("Failed to send webhook request")?
            .error_for_status()
            .context("Webhook request returned an error")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ExecuteWebhookRequest<'a> {
    content: &'a str,
}
