mod common;

use serde_json::{json, Value};
use wcdash::server::{create_app, AppState};

async fn start() -> String {
    let state = AppState::new(common::fixture_dataset());
    let addr = common::spawn(create_app(state, false)).await;
    format!("http://{}", addr)
}

async fn update(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/_dash-update-component", base))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_index_serves_dashboard() {
    let base = start().await;
    let resp = reqwest::get(&base).await.unwrap();
    assert_eq!(resp.status(), 200);

    let html = resp.text().await.unwrap();
    assert!(html.contains("<h1 style=\"text-align: center\">FIFA World Cup Dashboard</h1>"));
    assert!(html.contains(r#"<select id="country-dropdown" data-event="change">"#));
    assert!(html.contains(r#"<select id="year-dropdown" data-event="change">"#));
    assert!(html.contains(r#"<option value="Brazil" data-value="&quot;Brazil&quot;">Brazil</option>"#));
    assert!(html.contains(r#"<option value="1990" data-value="1990">1990</option>"#));
    assert!(html.contains(r#"<div id="country-output" style="margin-top: 20px"></div>"#));
    assert!(html.contains(r#"<div id="year-output" style="margin-top: 20px"></div>"#));
    assert!(html.contains(r#"data-figure-for="choropleth-map""#));
    assert!(!html.contains("West Germany"));
}

#[tokio::test]
async fn test_country_selection() {
    let base = start().await;
    let resp = update(
        &base,
        json!({"id": "country-dropdown", "event": "change", "value": "Germany"}),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["output"], "country-output");
    assert_eq!(body["children"], "Germany has won the FIFA World Cup 4 time(s).");
}

#[tokio::test]
async fn test_year_selection() {
    let base = start().await;
    let resp = update(&base, json!({"id": "year-dropdown", "value": 1990})).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["output"], "year-output");
    assert_eq!(
        body["children"],
        "In 1990, the winner was Germany and the runner-up was Argentina."
    );
}

#[tokio::test]
async fn test_cleared_selection_blanks_output() {
    let base = start().await;
    for id in ["country-dropdown", "year-dropdown"] {
        let resp = update(&base, json!({"id": id, "value": null})).await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["children"], "");
    }
}

#[tokio::test]
async fn test_forged_values_are_rejected() {
    let base = start().await;

    let resp = update(&base, json!({"id": "country-dropdown", "value": "Atlantis"})).await;
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert!(body["details"].as_str().unwrap().contains("Atlantis"));

    let resp = update(&base, json!({"id": "choropleth-map", "value": 1})).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_layout_and_dependencies() {
    let base = start().await;

    let layout: Value = reqwest::get(format!("{}/_dash-layout", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(layout["type"], "div");
    let children = layout["children"].as_array().unwrap();
    assert_eq!(children.len(), 10);
    assert_eq!(children[1]["id"], "choropleth-map");
    assert_eq!(children[1]["figure"]["data"][0]["colorscale"], "Blues");
    assert_eq!(children[4]["options"].as_array().unwrap().len(), 8);
    assert_eq!(children[8]["options"].as_array().unwrap().len(), 22);

    let deps: Value = reqwest::get(format!("{}/_dash-dependencies", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        deps,
        json!([
            {"input": "country-dropdown", "event": "change", "output": "country-output"},
            {"input": "year-dropdown", "event": "change", "output": "year-output"}
        ])
    );
}

#[tokio::test]
async fn test_health_check() {
    let base = start().await;
    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}
