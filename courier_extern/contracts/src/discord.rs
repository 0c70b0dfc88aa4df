use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DiscordApiService: Send + Sync + 'static {
    /// Posts a message to the configured webhook.
    fn execute_webhook(&self, content: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockDiscordApiService {
    pub fn with_execute_webhook(mut self, content: String, result: anyhow::Result<()>) -> Self {
        self.expect_execute_webhook()
            .once()
            .with(mockall::predicate::eq(content))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
