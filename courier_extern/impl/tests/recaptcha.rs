use courier_extern_contracts::recaptcha::RecaptchaApiService;
use courier_extern_impl::{
    http::HttpClient,
    recaptcha::{RecaptchaApiServiceConfig, RecaptchaApiServiceImpl},
};
use courier_models::contact::CaptchaVerdict;
use tokio::net::TcpListener;

const SECRET: &str = "test-secret";

#[tokio::test]
async fn success_score() {
    let sut = make_sut().await;
    let result = sut.siteverify("success-0.7", SECRET).await.unwrap();
    assert_eq!(
        result,
        CaptchaVerdict {
            success: true,
            score: Some(0.7)
        }
    );
}

#[tokio::test]
async fn success_no_score() {
    let sut = make_sut().await;
    let result = sut.siteverify("success", SECRET).await.unwrap();
    assert_eq!(
        result,
        CaptchaVerdict {
            success: true,
            score: None
        }
    );
}

#[tokio::test]
async fn failure() {
    let sut = make_sut().await;
    let result = sut.siteverify("failure", SECRET).await.unwrap();
    assert_eq!(
        result,
        CaptchaVerdict {
            success: false,
            score: None
        }
    );
}

#[tokio::test]
async fn wrong_secret() {
    let sut = make_sut().await;
    let result = sut.siteverify("success-0.7", "wrong-secret").await.unwrap();
    assert_eq!(
        result,
        CaptchaVerdict {
            success: false,
            score: None
        }
    );
}

/// Spawns the recaptcha testing server on a random port and points the
/// service at it.
async fn make_sut() -> RecaptchaApiServiceImpl {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = courier_testing::recaptcha::router(SECRET.into());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let endpoint = format!("http://{addr}{}", courier_testing::recaptcha::SITEVERIFY_ROUTE)
        .parse()
        .unwrap();
    RecaptchaApiServiceImpl::new(
        RecaptchaApiServiceConfig::new(Some(endpoint)),
        HttpClient::default(),
    )
}
