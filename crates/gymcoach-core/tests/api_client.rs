//! API client tests against an in-process stub server
//!
//! Each test binds an axum router on an ephemeral port and points the
//! client at it, so multipart encoding and reply decoding run for real.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine;
use gymcoach_core::api::{AnalyzeRequest, ApiClient, GenerateRequest};
use gymcoach_core::{Coach, CoachConfig, CoachError, MediaFile};
use parking_lot::Mutex;
use serde_json::{json, Value};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Multipart fields seen by the stub: (name, file name, content type, size or text)
type Seen = Arc<Mutex<Vec<(String, Option<String>, Option<String>, String)>>>;

// ============================================================================
// Test Utilities
// ============================================================================

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn record_fields(seen: &Seen, mut multipart: Multipart) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.unwrap();
        let value = if file_name.is_some() {
            data.len().to_string()
        } else {
            String::from_utf8_lossy(&data).to_string()
        };
        seen.lock().push((name, file_name, content_type, value));
    }
}

async fn analyze_handler(State(seen): State<Seen>, multipart: Multipart) -> Json<Value> {
    record_fields(&seen, multipart).await;
    Json(json!({
        "analysis": [
            {
                "frame_id": 3,
                "error_score": 18,
                "feedback": "Good depth",
                "technical_observation": "Neutral spine",
                "user_image": "AAAA",
                "trainer_image": "BBBB"
            },
            {
                "frame_id": 7,
                "error_score": 64.5,
                "feedback": "**Knees cave in**",
                "technical_observation": "Valgus at the bottom",
                "user_image": "CCCC",
                "trainer_image": "DDDD"
            }
        ],
        "feedback_summary": "Work on knee tracking.",
        "technical_details": [{ "title": "Knees", "description": "Push them out" }]
    }))
}

async fn generate_json_handler(State(seen): State<Seen>, multipart: Multipart) -> Json<Value> {
    record_fields(&seen, multipart).await;
    let encoded = base64::engine::general_purpose::STANDARD.encode(PNG_SIGNATURE);
    Json(json!({ "corrected_image": encoded }))
}

async fn generate_binary_handler(multipart: Multipart) -> impl IntoResponse {
    let _ = multipart;
    ([(header::CONTENT_TYPE, "image/png")], PNG_SIGNATURE.to_vec())
}

async fn chat_handler(Json(body): Json<Value>) -> Json<Value> {
    let message = body["message"].as_str().unwrap_or_default();
    Json(json!({ "text": format!("You said: {}", message) }))
}

async fn login_handler(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "hunter2" {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::UNAUTHORIZED, "bad creds")
    }
}

async fn failing_handler() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "model crashed")
}

async fn stub() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/analyze_movement", post(analyze_handler))
        .route("/generate", post(generate_json_handler))
        .route("/generate_raw", post(generate_binary_handler))
        .route("/chat", post(chat_handler))
        .route("/login", post(login_handler))
        .route("/fail", post(failing_handler))
        .with_state(seen.clone());
    (serve(app).await, seen)
}

fn client(config: &CoachConfig) -> ApiClient {
    ApiClient::new(config).unwrap()
}

fn video(name: &str, size: usize) -> MediaFile {
    MediaFile::new(name, "video/mp4", vec![7u8; size])
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn test_analyze_sends_expected_multipart_fields() {
    let (base, seen) = stub().await;
    let config = CoachConfig::default().with_analyze_url(format!("{base}/analyze_movement"));

    let response = client(&config)
        .analyze_movement(
            AnalyzeRequest {
                trainer_video: video("trainer.mp4", 1000),
                user_video: MediaFile::new("me.mov", "video/quicktime", vec![1u8; 2500]),
                exercise_name: "Squat".into(),
                email: "lifter@example.com".into(),
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.analysis.len(), 2);
    assert_eq!(response.analysis[1].frame_id, 7);
    assert_eq!(response.technical_details[0].title, "Knees");

    let fields = seen.lock().clone();
    let names: Vec<_> = fields.iter().map(|f| f.0.as_str()).collect();
    assert_eq!(names, ["trainer_video", "user_video", "exercise_name", "email"]);

    assert_eq!(fields[0].1.as_deref(), Some("trainer.mp4"));
    assert_eq!(fields[0].2.as_deref(), Some("video/mp4"));
    assert_eq!(fields[0].3, "1000");
    assert_eq!(fields[1].2.as_deref(), Some("video/quicktime"));
    assert_eq!(fields[1].3, "2500");
    assert_eq!(fields[2].3, "Squat");
    assert_eq!(fields[3].3, "lifter@example.com");
}

#[tokio::test]
async fn test_analyze_reports_upload_progress() {
    let (base, _seen) = stub().await;
    let config = CoachConfig::default().with_analyze_url(format!("{base}/analyze_movement"));

    let updates = Arc::new(Mutex::new(Vec::<u8>::new()));
    let sink = updates.clone();
    client(&config)
        .analyze_movement(
            AnalyzeRequest {
                trainer_video: video("t.mp4", 200 * 1024),
                user_video: video("u.mp4", 200 * 1024),
                exercise_name: "Bench Press".into(),
                email: String::new(),
            },
            Some(Arc::new(move |p| sink.lock().push(p))),
        )
        .await
        .unwrap();

    let updates = updates.lock().clone();
    assert!(updates.len() > 1, "expected several updates, got {updates:?}");
    assert!(updates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(updates.last(), Some(&100));
}

#[tokio::test]
async fn test_http_error_is_not_retried() {
    let (base, _seen) = stub().await;
    let config = CoachConfig::default().with_analyze_url(format!("{base}/fail"));

    let err = client(&config)
        .analyze_movement(
            AnalyzeRequest {
                trainer_video: video("t.mp4", 10),
                user_video: video("u.mp4", 10),
                exercise_name: "Squat".into(),
                email: String::new(),
            },
            None,
        )
        .await
        .unwrap_err();

    match err {
        CoachError::Http { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model crashed");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "Could not reach the backend.");
}

#[tokio::test]
async fn test_coach_records_history_after_analysis() {
    let (base, seen) = stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = CoachConfig::default().with_analyze_url(format!("{base}/analyze_movement"));
    let coach = Coach::new(dir.path(), config).unwrap();
    coach.login("lifter@example.com", "pw").await.unwrap();

    coach
        .analyze(Some(video("t.mp4", 10)), Some(video("u.mp4", 10)), " Squat ", None)
        .await
        .unwrap();

    let history = coach.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].exercise_name, "Squat");
    assert_eq!(history[0].email, "lifter@example.com");
    assert_eq!(history[0].worst_frame, Some(7));
    assert_eq!(history[0].frame_count, 2);

    let email_field = seen.lock().iter().find(|f| f.0 == "email").cloned().unwrap();
    assert_eq!(email_field.3, "lifter@example.com");
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_rejected_login_reports_invalid_credentials() {
    let (base, _seen) = stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = CoachConfig::default().with_login_url(format!("{base}/login"));
    let coach = Coach::new(dir.path(), config).unwrap();

    let err = coach.login("lifter@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, CoachError::InvalidCredentials));
    assert_eq!(err.user_message(), "Invalid credentials.");
    assert!(!coach.session().is_logged_in());
}

#[tokio::test]
async fn test_accepted_remote_login_stores_user() {
    let (base, _seen) = stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = CoachConfig::default().with_login_url(format!("{base}/login"));
    let coach = Coach::new(dir.path(), config).unwrap();

    let user = coach.login("lifter@example.com", "hunter2").await.unwrap();
    assert_eq!(user.email, "lifter@example.com");
    assert!(coach.session().is_logged_in());
}

#[tokio::test]
async fn test_login_server_error_is_still_unreachable() {
    let (base, _seen) = stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = CoachConfig::default().with_login_url(format!("{base}/fail"));
    let coach = Coach::new(dir.path(), config).unwrap();

    let err = coach.login("lifter@example.com", "hunter2").await.unwrap_err();
    assert_eq!(err.user_message(), "Could not reach the backend.");
    assert!(!coach.session().is_logged_in());
}

// ============================================================================
// Image generation
// ============================================================================

#[tokio::test]
async fn test_generate_decodes_json_reply() {
    let (base, seen) = stub().await;
    let config = CoachConfig::default().with_generate_url(format!("{base}/generate"));

    let image = client(&config)
        .generate_image(GenerateRequest {
            user_image: MediaFile::new("frame.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]),
            exercise_name: "rod".into(),
            error_description: Some("rounded back".into()),
        })
        .await
        .unwrap();

    assert_eq!(image.bytes.as_ref(), PNG_SIGNATURE);
    assert_eq!(image.mime, "image/png");

    let fields = seen.lock().clone();
    let names: Vec<_> = fields.iter().map(|f| f.0.as_str()).collect();
    assert_eq!(names, ["user_image", "exercise_name", "error_description"]);
    assert_eq!(fields[2].3, "rounded back");
}

#[tokio::test]
async fn test_generate_omits_empty_description() {
    let (base, seen) = stub().await;
    let config = CoachConfig::default().with_generate_url(format!("{base}/generate"));

    client(&config)
        .generate_image(GenerateRequest {
            user_image: MediaFile::new("frame.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]),
            exercise_name: "rod".into(),
            error_description: None,
        })
        .await
        .unwrap();

    assert!(!seen.lock().iter().any(|f| f.0 == "error_description"));
}

#[tokio::test]
async fn test_generate_accepts_binary_reply() {
    let (base, _seen) = stub().await;
    let config = CoachConfig::default().with_generate_url(format!("{base}/generate_raw"));

    let image = client(&config)
        .generate_image(GenerateRequest {
            user_image: MediaFile::new("frame.png", "image/png", PNG_SIGNATURE.to_vec()),
            exercise_name: "rod".into(),
            error_description: None,
        })
        .await
        .unwrap();
    assert_eq!(image.extension(), "png");
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_extracts_reply_text() {
    let (base, _seen) = stub().await;
    let config = CoachConfig::default().with_chat_url(format!("{base}/chat"));

    let reply = client(&config).chat("how low?").await.unwrap();
    assert_eq!(reply, "You said: how low?");
}

#[tokio::test]
async fn test_chat_failure_feeds_fallback() {
    let (base, _seen) = stub().await;
    let config = CoachConfig::default().with_chat_url(format!("{base}/fail"));

    let mut log = gymcoach_core::ChatLog::new();
    let text = log.begin_send("hello").unwrap();
    log.finish(client(&config).chat(&text).await);

    assert_eq!(
        log.messages().last().map(|m| m.content.as_str()),
        Some(gymcoach_core::chat::CHAT_FALLBACK_REPLY)
    );
}
