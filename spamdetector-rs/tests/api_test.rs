use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde_json::json;
use spamdetector_rs::api::handlers::AppState;
use spamdetector_rs::api::ApiServer;
use spamdetector_rs::classifier::SpamModel;
use spamdetector_rs::corpus::DirectorySource;
use tempfile::TempDir;

/// Same corpus the classifier tests use, so the expected scores line up:
/// evidence is 6/7 for "free", 3/13 for "meeting", 1.0 for "cash",
/// 0.0 for "hello".
fn write_corpus(root: &Path) {
    let folders: &[(&str, &[(&str, &str)])] = &[
        (
            "train/ham",
            &[
                ("0001.txt", "meeting free"),
                ("0002.txt", "meeting"),
                ("0003.txt", "meeting"),
                ("0004.txt", "meeting"),
            ],
        ),
        (
            "train/ham2",
            &[("1001.txt", "meeting hello"), ("1002.txt", "hello")],
        ),
        (
            "train/spam",
            &[
                ("2001.txt", "free cash meeting"),
                ("2002.txt", "free cash"),
                ("2003.txt", "free cash"),
                ("2004.txt", "free"),
            ],
        ),
        (
            "test/ham",
            &[
                ("t1.txt", "meeting today"),
                ("t2.txt", "meeting meeting"),
                ("t3.txt", "free lunch"),
            ],
        ),
        (
            "test/spam",
            &[("s1.txt", "free free cash"), ("s2.txt", "hello meeting")],
        ),
    ];

    for (folder, files) in folders {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in *files {
            fs::write(dir.join(name), content).unwrap();
        }
    }
}

/// Train on a fresh corpus and serve the API on an ephemeral port.
///
/// The TempDir is returned so the corpus outlives the test body.
async fn spawn_server(
    cors_origin: Option<String>,
    test_ham: &str,
    test_spam: &str,
) -> (SocketAddr, TempDir) {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let source = DirectorySource::new(dir.path());
    let model = SpamModel::train(
        &source,
        &["train/ham".to_string(), "train/ham2".to_string()],
        "train/spam",
    )
    .expect("training on the fixture corpus failed");

    let state = AppState {
        model,
        source,
        test_ham_folder: test_ham.to_string(),
        test_spam_folder: test_spam.to_string(),
    };
    let server = ApiServer::new(state, "127.0.0.1:0".to_string(), cors_origin)
        .expect("server construction failed");
    let router = server.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (addr, dir)
}

async fn spawn_default() -> (SocketAddr, TempDir) {
    spawn_server(None, "test/ham", "test/spam").await
}

/// Test the health check endpoint
#[tokio::test]
async fn test_health_endpoint() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success(), "Health check should return 200");
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "spamdetector-rs");
    assert_eq!(body["vocabulary_size"], 4);
}

/// Test the scored listing of both test folders
#[tokio::test]
async fn test_spam_listing() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/spam", addr))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let rows = body.as_array().expect("Should be a JSON array");
    assert_eq!(rows.len(), 5, "3 ham + 2 spam documents");

    // Ham rows come first, in file name order
    assert_eq!(rows[0]["file"], "t1.txt");
    assert_eq!(rows[0]["actualClass"], "Ham");
    assert_eq!(rows[0]["spamProbRounded"], "0.23077");
    let p = rows[0]["spamProbability"].as_f64().expect("Should be a number");
    assert!((p - 3.0 / 13.0).abs() < 1e-10);

    assert_eq!(rows[3]["file"], "s1.txt");
    assert_eq!(rows[3]["actualClass"], "Spam");
    assert_eq!(rows[3]["spamProbRounded"], "0.97297");
}

/// Test the accuracy endpoint
#[tokio::test]
async fn test_accuracy_endpoint() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/spam/accuracy", addr))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let accuracy = body["accuracy"].as_f64().expect("Should have accuracy field");
    assert!((accuracy - 0.6).abs() < 1e-10, "3 of 5 test documents are classified correctly");
}

/// Test the precision endpoint
#[tokio::test]
async fn test_precision_endpoint() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/spam/precision", addr))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let precision = body["precision"].as_f64().expect("Should have precision field");
    assert!((precision - 2.0 / 3.0).abs() < 1e-10);
}

/// Test the model statistics endpoint
#[tokio::test]
async fn test_stats_endpoint() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/spam/stats", addr))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["ham_documents"], 6);
    assert_eq!(body["spam_documents"], 4);
    assert_eq!(body["vocabulary_size"], 4);
    assert!(body["trained_at"].is_string(), "Should have trained_at timestamp");
}

/// Test scoring an ad-hoc message
#[tokio::test]
async fn test_score_message() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/spam/score", addr))
        .json(&json!({
            "name": "check.txt",
            "content": "free free cash"
        }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["file"], "check.txt");
    assert_eq!(body["spamProbRounded"], "0.97297");
    let p = body["spamProbability"].as_f64().expect("Should be a number");
    assert!((p - 36.0 / 37.0).abs() < 1e-10);
}

/// Test that the message name is optional
#[tokio::test]
async fn test_score_message_default_name() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/spam/score", addr))
        .json(&json!({ "content": "totally unrelated words" }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["file"], "message");
    assert_eq!(body["spamProbRounded"], "0.50000", "No known words leaves the neutral score");
}

/// Test the error payload for a missing test folder
#[tokio::test]
async fn test_missing_folder_returns_404() {
    let (addr, _dir) = spawn_server(None, "test/nope", "test/spam").await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/spam", addr))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let error = body["error"].as_str().expect("Should have error field");
    assert!(error.contains("test/nope"), "Error should name the folder: {}", error);
}

/// Test permissive CORS when no origin is configured
#[tokio::test]
async fn test_cors_defaults_to_any_origin() {
    let (addr, _dir) = spawn_default().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/health", addr))
        .header("Origin", "https://app.example.com")
        .send()
        .await
        .expect("Request failed");

    let allow = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Should have CORS header");
    assert_eq!(allow, "*");
}

/// Test CORS restricted to the configured origin
#[tokio::test]
async fn test_cors_uses_configured_origin() {
    let origin = "https://app.example.com";
    let (addr, _dir) = spawn_server(Some(origin.to_string()), "test/ham", "test/spam").await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/health", addr))
        .header("Origin", origin)
        .send()
        .await
        .expect("Request failed");

    let allow = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Should have CORS header");
    assert_eq!(allow, origin);
}
