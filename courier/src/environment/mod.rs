use std::sync::Arc;

use courier_api_rest::{RestServerConfig, RestServerCorsConfig};
use courier_config::Config;
use courier_extern_impl::{
    discord::DiscordApiServiceConfig, http::HttpClient, recaptcha::RecaptchaApiServiceConfig,
};
use courier_shared_impl::captcha::CaptchaServiceConfig;
use types::{Captcha, ContactFeature, DiscordApi, RecaptchaApi, RestServer};

pub mod types;

pub fn build_rest_server(config: &Config) -> anyhow::Result<RestServer> {
    // API
    let rest_server_config = RestServerConfig {
        cors: Arc::new(RestServerCorsConfig::new(
            &config.http.cors.allowed_origins,
            &config.http.cors.fallback_origin,
        )?),
    };

    // Extern
    // One HTTP client for all outbound calls; clones share the connection pool.
    let http = HttpClient::default();
    let recaptcha_api = RecaptchaApi::new(
        RecaptchaApiServiceConfig::new(config.recaptcha.siteverify_endpoint_override.clone()),
        http.clone(),
    );
    let discord_api = DiscordApi::new(
        DiscordApiServiceConfig::new(config.discord.webhook_url.clone()),
        http,
    );

    // Shared
    let captcha = Captcha::new(
        CaptchaServiceConfig {
            secret: config.recaptcha.secret.clone().into(),
            min_score: config.recaptcha.min_score,
        },
        recaptcha_api,
    );

    // Core
    let contact = ContactFeature::new(captcha, discord_api);

    Ok(RestServer::new(rest_server_config, contact))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[tokio::test]
    async fn builds_service_graph_from_default_config() {
        let config = courier_config::load(&[Path::new(courier_config::DEFAULT_CONFIG_PATH)])
            .unwrap();

        build_rest_server(&config).unwrap();
    }
}
