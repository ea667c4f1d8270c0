//! End-to-end exchange between the sync client and a live store

use config_models::{DetectionConfig, InferenceEngine, PipelineSettings};
use config_store::{create_router, StorePaths, StoreState};
use config_sync::{SyncClient, SyncError};
use std::sync::Arc;
use tokio::sync::RwLock;

async fn spawn_store(tag: &str) -> (String, StorePaths) {
    let dir = std::env::temp_dir().join(format!("dmcs-http-{}-{}", std::process::id(), tag));
    let _ = std::fs::remove_dir_all(&dir);
    let paths = StorePaths::new(&dir);
    let state = StoreState::load(paths.clone()).expect("load state");
    let app = create_router(Arc::new(RwLock::new(state)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    (format!("http://{}", addr), paths)
}

#[tokio::test]
async fn detection_fetch_save_fetch() {
    let (base, paths) = spawn_store("detection").await;
    let client = SyncClient::new(&base);

    // fresh store serves the defaults
    let fetched = client.fetch_detection().await.unwrap();
    assert_eq!(fetched, DetectionConfig::default());

    // save an edited document; the store echoes it back
    let mut edited = fetched;
    edited.drowsiness.eye_aspect_ratio_threshold = 0.22;
    edited.phone_detection.distance_threshold = 200;
    let echoed = client.save_detection(&edited).await.unwrap();
    assert_eq!(echoed, edited);

    // the stored value survives a re-fetch and landed on disk
    assert_eq!(client.fetch_detection().await.unwrap(), edited);
    assert!(paths.detection().exists());
}

#[tokio::test]
async fn out_of_range_detection_save_is_rejected() {
    let (base, _paths) = spawn_store("reject").await;
    let client = SyncClient::new(&base);

    let mut bad = DetectionConfig::default();
    bad.drowsiness.eye_aspect_ratio_threshold = 0.75;

    let err = client.save_detection(&bad).await.unwrap_err();
    assert!(matches!(err, SyncError::Save { .. }));

    // the store kept its previous value
    let fetched = client.fetch_detection().await.unwrap();
    assert_eq!(fetched, DetectionConfig::default());
}

#[tokio::test]
async fn pipeline_fetch_save_fetch() {
    let (base, paths) = spawn_store("pipeline").await;
    let client = SyncClient::new(&base);

    assert_eq!(
        client.fetch_pipeline().await.unwrap(),
        PipelineSettings::default()
    );

    let mut edited = PipelineSettings::default();
    edited.inference_engine = InferenceEngine::Auto;
    edited.hands_detection_model_run = true;
    client.save_pipeline(&edited).await.unwrap();

    assert_eq!(client.fetch_pipeline().await.unwrap(), edited);
    assert!(paths.pipeline().exists());
}

#[tokio::test]
async fn pipeline_wire_format() {
    let (base, _paths) = spawn_store("wire").await;

    // raw JSON as the dashboard frontend would see it
    let body: serde_json::Value = reqwest::get(format!("{}/config/pipeline", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["drowsiness_model_run"], serde_json::json!(true));
    assert_eq!(body["phone_detection_model_run"], serde_json::json!(false));
    assert_eq!(body["hands_detection_model_run"], serde_json::json!(false));
    assert_eq!(body["inference_engine"], serde_json::json!("cpu"));

    let response = reqwest::Client::new()
        .post(format!("{}/config/pipeline/update", base))
        .json(&PipelineSettings::default())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let envelope: serde_json::Value = response.json().await.unwrap();
    assert_eq!(envelope["status"], serde_json::json!("success"));
}
