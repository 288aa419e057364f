mod common;

use std::sync::Arc;

use common::RecordingClipboard;
use prompt_refiner::catalog::IntentId;
use prompt_refiner::client::HttpRefinementClient;
use prompt_refiner::config::{Config, ServiceConfig};
use prompt_refiner::server::{refine_prompt, RefinementServer};
use serde_json::{json, Value};
use tokio::sync::oneshot;

struct RunningServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<std::io::Result<()>>>,
}

impl RunningServer {
    async fn start() -> Self {
        let server = RefinementServer::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind reference server");
        let base_url = server.base_url();
        let (tx, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(server.run(async {
            let _ = rx.await;
        }));
        Self {
            base_url,
            shutdown: Some(tx),
            task: Some(task),
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.await.unwrap().unwrap();
        }
    }
}

async fn post_generate(base_url: &str, body: String) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base_url}/generate"))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let json = resp.json::<Value>().await.unwrap();
    (status, json)
}

#[tokio::test]
async fn generate_wraps_prompt_in_intent_template() {
    let server = RunningServer::start().await;

    let (status, body) = post_generate(
        &server.base_url,
        json!({"base_prompt": "  a cat  ", "intent": "image_generation"}).to_string(),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["original_prompt"], "a cat");
    assert_eq!(body["intent"], "image_generation");
    assert_eq!(
        body["refined_prompt"],
        refine_prompt("a cat", "image_generation")
    );
    assert!(body["refined_prompt"]
        .as_str()
        .unwrap()
        .starts_with("Create a detailed image prompt for AI generation: a cat"));

    server.stop().await;
}

#[tokio::test]
async fn unknown_intent_passes_prompt_through() {
    let server = RunningServer::start().await;

    let (status, body) = post_generate(
        &server.base_url,
        json!({"base_prompt": "a sonnet", "intent": "poetry"}).to_string(),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["refined_prompt"], "a sonnet");

    server.stop().await;
}

#[tokio::test]
async fn missing_or_blank_fields_are_rejected() {
    let server = RunningServer::start().await;

    for body in [
        json!({"intent": "research"}).to_string(),
        json!({"base_prompt": "topic"}).to_string(),
        json!({"base_prompt": "   ", "intent": "research"}).to_string(),
        "not json".to_string(),
    ] {
        let (status, reply) = post_generate(&server.base_url, body.clone()).await;
        assert_eq!(status, 400, "body: {body}");
        assert_eq!(reply["error"], "base_prompt and intent are required");
    }

    server.stop().await;
}

#[tokio::test]
async fn health_reports_healthy() {
    let server = RunningServer::start().await;

    let config = ServiceConfig {
        base_url: server.base_url.clone(),
        ..ServiceConfig::default()
    };
    let client = HttpRefinementClient::new(&config).unwrap();
    assert!(client.health().await.unwrap().is_healthy());

    server.stop().await;
}

#[tokio::test]
async fn app_round_trip_against_reference_server() {
    let server = RunningServer::start().await;

    let mut config = Config::default();
    config.service.base_url = server.base_url.clone();
    let client = HttpRefinementClient::new(&config.service).unwrap();
    let clipboard = RecordingClipboard::default();
    let mut app = prompt_refiner::ui::app::App::new(
        &config,
        Arc::new(client),
        Box::new(clipboard.clone()),
    );

    app.form_mut().set_prompt("quantum dots");
    app.form_mut().select_intent(IntentId::Research);
    let pending = app.submit().unwrap();
    app.complete(pending).await;

    assert_eq!(app.error_message(), None);
    let expected = refine_prompt("quantum dots", "research");
    {
        let view = app.output().expect("result should be presented");
        assert_eq!(view.refined_prompt, expected);
        assert_eq!(view.stats.original_length, 12);
        assert_eq!(view.stats.refined_length, expected.chars().count());
    }

    assert!(app.copy());
    assert_eq!(clipboard.writes(), vec![expected]);

    server.stop().await;
}
