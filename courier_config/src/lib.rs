use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        // Secrets may be supplied via the environment instead of the config file.
        .set_override_option("recaptcha.secret", std::env::var("RECAPTCHA_SECRET").ok())?
        .set_override_option(
            "discord.webhook_url",
            std::env::var("DISCORD_WEBHOOK_URL").ok(),
        )?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub recaptcha: RecaptchaConfig,
    pub discord: DiscordConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub fallback_origin: String,
}

#[derive(Debug, Deserialize)]
pub struct RecaptchaConfig {
    pub siteverify_endpoint_override: Option<Url>,
    pub secret: String,
    pub min_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct DiscordConfig {
    pub webhook_url: Url,
}
