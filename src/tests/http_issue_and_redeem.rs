use reqwest::StatusCode;
use serde_json::Value;

use crate::tests::common::{build_reqwest_client, spawn_token_server};

async fn issue(client: &reqwest::Client, base: &str) -> String {
    let resp = client.post(format!("{base}/tokens")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    body["token"].as_str().expect("token field").to_owned()
}

#[tokio::test]
async fn issued_token_redeems_once_over_http() {
    let (handle, base) = spawn_token_server(false).await;
    let client = build_reqwest_client();

    let token = issue(&client, &base).await;

    let lookup = client.get(format!("{base}/tokens/{token}")).send().await.unwrap();
    assert_eq!(lookup.status(), StatusCode::OK);
    let body: Value = lookup.json().await.unwrap();
    assert_eq!(body["token"], token.as_str());
    assert!(body["issued_at_unix_ts"].as_u64().unwrap() > 0);

    let first = client.delete(format!("{base}/tokens/{token}")).send().await.unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = client.delete(format!("{base}/tokens/{token}")).send().await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["error"], "token not exist");

    let lookup = client.get(format!("{base}/tokens/{token}")).send().await.unwrap();
    assert_eq!(lookup.status(), StatusCode::NOT_FOUND);

    handle.abort();
}

#[tokio::test]
async fn unknown_token_is_not_found_over_http() {
    let (handle, base) = spawn_token_server(false).await;
    let client = build_reqwest_client();

    let resp = client.delete(format!("{base}/tokens/never-issued")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    handle.abort();
}

#[tokio::test]
async fn concurrent_http_redemptions_have_one_winner() {
    let (handle, base) = spawn_token_server(false).await;
    let client = build_reqwest_client();
    let token = issue(&client, &base).await;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let client = client.clone();
        let url = format!("{base}/tokens/{token}");
        tasks.spawn(async move { client.delete(url).send().await.unwrap().status() });
    }
    let statuses = tasks.join_all().await;

    let ok = statuses.iter().filter(|s| **s == StatusCode::NO_CONTENT).count();
    let not_found = statuses.iter().filter(|s| **s == StatusCode::NOT_FOUND).count();
    assert_eq!(ok, 1);
    assert_eq!(not_found, 19);

    handle.abort();
}

#[tokio::test]
async fn metrics_route_reflects_token_lifecycle() {
    let (handle, base) = spawn_token_server(true).await;
    let client = build_reqwest_client();

    let token = issue(&client, &base).await;
    issue(&client, &base).await;
    client.delete(format!("{base}/tokens/{token}")).send().await.unwrap();
    client.delete(format!("{base}/tokens/{token}")).send().await.unwrap();

    let text = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(text.contains("idempotence_tokens_issued_total 2"), "{text}");
    assert!(text.contains("idempotence_outstanding_tokens 1"), "{text}");
    assert!(text.contains("idempotence_token_redemptions_total{result=\"redeemed\"} 1"), "{text}");
    assert!(text.contains("idempotence_token_redemptions_total{result=\"not_found\"} 1"), "{text}");

    handle.abort();
}

#[tokio::test]
async fn metrics_route_absent_when_disabled() {
    let (handle, base) = spawn_token_server(false).await;
    let client = build_reqwest_client();

    let resp = client.get(format!("{base}/metrics")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    handle.abort();
}
