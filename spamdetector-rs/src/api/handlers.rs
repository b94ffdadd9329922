//! API request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::classifier::{evaluator, ClassLabel, DocumentScore, DocumentScorer, SpamModel};
use crate::corpus::{DirectorySource, Document};
use crate::error::DetectorError;

/// Shared application state
pub struct AppState {
    pub model: SpamModel,
    pub source: DirectorySource,
    pub test_ham_folder: String,
    pub test_spam_folder: String,
}

/// One scored test document, in the client's wire format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    pub file: String,
    pub spam_probability: f64,
    pub spam_prob_rounded: String,
    pub actual_class: String,
}

impl ScoredDocument {
    fn from_score(score: DocumentScore, label: ClassLabel) -> Self {
        Self {
            spam_prob_rounded: format!("{:.5}", score.spam_probability),
            file: score.file,
            spam_probability: score.spam_probability,
            actual_class: match label {
                ClassLabel::Ham => "Ham".to_string(),
                ClassLabel::Spam => "Spam".to_string(),
            },
        }
    }
}

/// Accuracy response
#[derive(Debug, Serialize)]
pub struct AccuracyResponse {
    pub accuracy: f64,
}

/// Precision response
#[derive(Debug, Serialize)]
pub struct PrecisionResponse {
    pub precision: f64,
}

/// Model summary for the stats endpoint
#[derive(Debug, Serialize)]
pub struct ModelStats {
    pub ham_documents: u32,
    pub spam_documents: u32,
    pub vocabulary_size: usize,
    pub trained_at: String,
}

/// Ad-hoc score request body
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub content: String,
}

/// Ad-hoc score response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub file: String,
    pub spam_probability: f64,
    pub spam_prob_rounded: String,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

fn error_response(err: DetectorError) -> Response {
    let status = match err {
        DetectorError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiError::new(&err.to_string()))).into_response()
}

/// GET /health - Service liveness and model summary
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "spamdetector-rs",
            "version": env!("CARGO_PKG_VERSION"),
            "vocabulary_size": state.model.vocabulary_size(),
        })),
    )
}

/// GET /api/spam - Every test document scored with the trained model,
/// ham folder first, each row labeled with its actual class
pub async fn list_scores(State(state): State<Arc<AppState>>) -> Response {
    let ham_scores =
        match evaluator::score_folder(&state.model, &state.source, &state.test_ham_folder) {
            Ok(scores) => scores,
            Err(e) => return error_response(e),
        };

    let spam_scores =
        match evaluator::score_folder(&state.model, &state.source, &state.test_spam_folder) {
            Ok(scores) => scores,
            Err(e) => return error_response(e),
        };

    let rows: Vec<ScoredDocument> = ham_scores
        .into_iter()
        .map(|score| ScoredDocument::from_score(score, ClassLabel::Ham))
        .chain(
            spam_scores
                .into_iter()
                .map(|score| ScoredDocument::from_score(score, ClassLabel::Spam)),
        )
        .collect();

    (StatusCode::OK, Json(rows)).into_response()
}

/// GET /api/spam/accuracy - Correct predictions over all test documents
pub async fn get_accuracy(State(state): State<Arc<AppState>>) -> Response {
    match evaluator::evaluate(
        &state.model,
        &state.source,
        &state.test_ham_folder,
        &state.test_spam_folder,
    ) {
        Ok(report) => (
            StatusCode::OK,
            Json(AccuracyResponse {
                accuracy: report.accuracy,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/spam/precision - Correct ham predictions over all ham test documents
pub async fn get_precision(State(state): State<Arc<AppState>>) -> Response {
    match evaluator::evaluate(
        &state.model,
        &state.source,
        &state.test_ham_folder,
        &state.test_spam_folder,
    ) {
        Ok(report) => (
            StatusCode::OK,
            Json(PrecisionResponse {
                precision: report.precision,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/spam/stats - Training corpus and vocabulary summary
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = ModelStats {
        ham_documents: state.model.ham_stats().documents,
        spam_documents: state.model.spam_stats().documents,
        vocabulary_size: state.model.vocabulary_size(),
        trained_at: state.model.trained_at().to_rfc3339(),
    };

    (StatusCode::OK, Json(stats))
}

/// POST /api/spam/score - Score an ad-hoc document with the trained model
pub async fn score_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> impl IntoResponse {
    let scorer = DocumentScorer::new(&state.model);
    let document = Document {
        name: req.name.unwrap_or_else(|| "message".to_string()),
        content: req.content,
    };

    let score = scorer.score_document(&document);
    let response = ScoreResponse {
        spam_prob_rounded: format!("{:.5}", score.spam_probability),
        file: score.file,
        spam_probability: score.spam_probability,
    };

    (StatusCode::OK, Json(response))
}
