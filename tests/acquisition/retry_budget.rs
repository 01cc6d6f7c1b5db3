use incinerator::acquirer::ResponseAcquirer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::harness::{FALLBACK, PRIMARY, config_for, endpoint, overloaded, text_reply};

#[tokio::test]
async fn overloaded_primary_recovers_on_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint(PRIMARY)))
        .respond_with(ResponseTemplate::new(503).set_body_json(overloaded()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint(FALLBACK)))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("lighter now")))
        .expect(1)
        .mount(&server)
        .await;

    let acquirer = ResponseAcquirer::from_config(&config_for(&server));
    assert_eq!(acquirer.acquire("so tired".into()).await, "lighter now");
}

#[tokio::test]
async fn persistent_overload_gives_busy_after_two_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(overloaded()))
        .expect(2)
        .mount(&server)
        .await;

    let acquirer = ResponseAcquirer::from_config(&config_for(&server));
    let reply = acquirer.acquire("so tired".into()).await;
    assert_eq!(reply, acquirer.messages().busy());
}

#[tokio::test]
async fn rate_limit_counts_as_transient() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint(PRIMARY)))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint(FALLBACK)))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
        .expect(1)
        .mount(&server)
        .await;

    let acquirer = ResponseAcquirer::from_config(&config_for(&server));
    assert_eq!(
        acquirer.acquire("again".into()).await,
        acquirer.messages().busy()
    );
}

#[tokio::test]
async fn without_fallback_the_primary_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint(PRIMARY)))
        .respond_with(ResponseTemplate::new(503).set_body_json(overloaded()))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint(PRIMARY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("second try")))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.acquisition.fallback_model = None;
    let acquirer = ResponseAcquirer::from_config(&config);

    assert_eq!(acquirer.acquire("again".into()).await, "second try");
}

#[tokio::test]
async fn zero_retries_means_a_single_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(overloaded()))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.acquisition.max_retries = 0;
    let acquirer = ResponseAcquirer::from_config(&config);

    assert_eq!(
        acquirer.acquire("again".into()).await,
        acquirer.messages().busy()
    );
}
