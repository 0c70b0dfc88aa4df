use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{http::HeaderValue, Router};
use courier_core_contact_contracts::ContactFeatureService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    config: RestServerConfig,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub cors: Arc<RestServerCorsConfig>,
}

impl<Contact: ContactFeatureService> RestServer<Contact> {
    pub fn new(config: RestServerConfig, contact: Contact) -> Self {
        Self { config, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(self.contact.into()));
        let router = middlewares::cors::add(router, self.config.cors);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}

/// Precomputed header values for the cross-origin response policy.
#[derive(Debug)]
pub struct RestServerCorsConfig {
    allowed_origins: Vec<HeaderValue>,
    fallback_origin: HeaderValue,
}

impl RestServerCorsConfig {
    pub fn new(allowed_origins: &[String], fallback_origin: &str) -> anyhow::Result<Self> {
        Ok(Self {
            allowed_origins: allowed_origins
                .iter()
                .map(|origin| {
                    origin
                        .parse()
                        .with_context(|| format!("Invalid allowed origin {origin:?}"))
                })
                .collect::<anyhow::Result<_>>()?,
            fallback_origin: fallback_origin
                .parse()
                .with_context(|| format!("Invalid fallback origin {fallback_origin:?}"))?,
        })
    }

    /// Returns the origin to reflect in `Access-Control-Allow-Origin`.
    ///
    /// Origins not on the allowlist (or absent entirely) are answered with the
    /// fallback origin instead of suppressing the header.
    pub(crate) fn allow_origin(&self, origin: Option<&HeaderValue>) -> HeaderValue {
        match origin {
            Some(origin) if self.allowed_origins.contains(origin) => origin.clone(),
            _ => self.fallback_origin.clone(),
        }
    }
}
