use courier_extern_contracts::discord::DiscordApiService;
use courier_extern_impl::{
    discord::{DiscordApiServiceConfig, DiscordApiServiceImpl},
    http::HttpClient,
};
use tokio::net::TcpListener;

const TOKEN: &str = "test-token";

#[tokio::test]
async fn execute_webhook() {
    let sut = make_sut(TOKEN).await;
    sut.execute_webhook("Hello World!").await.unwrap();
}

#[tokio::test]
async fn unknown_webhook() {
    let sut = make_sut("wrong-token").await;
    let result = sut.execute_webhook("Hello World!").await;
    assert!(result.is_err());
}

/// Spawns the discord webhook testing server on a random port and points the
/// service at it, using `token` in the webhook URL.
async fn make_sut(token: &str) -> DiscordApiServiceImpl {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = courier_testing::discord::router(TOKEN.into());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let webhook_url = format!("http://{addr}/api/webhooks/1/{token}")
        .parse()
        .unwrap();
    DiscordApiServiceImpl::new(DiscordApiServiceConfig::new(webhook_url), HttpClient::default())
}
