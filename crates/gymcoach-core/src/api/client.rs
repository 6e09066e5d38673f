//! HTTP client for the analysis, generation, chat and login endpoints.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use futures::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};

use super::types::{
    chat_reply_text, AnalysisResponse, ChatRequest, GeneratedImage, LoginRequest,
};
use crate::config::{CoachConfig, Endpoints};
use crate::error::{CoachError, CoachResult};
use crate::upload::MediaFile;

/// Chunk size used when streaming uploads, so progress advances smoothly.
const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

/// Longest error body kept in [`CoachError::Http`].
const MAX_ERROR_BODY: usize = 512;

/// Upload progress callback, receives whole percent values 0..=100.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Inputs for a movement analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub trainer_video: MediaFile,
    pub user_video: MediaFile,
    pub exercise_name: String,
    pub email: String,
}

/// Inputs for a corrected-form image.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub user_image: MediaFile,
    pub exercise_name: String,
    pub error_description: Option<String>,
}

/// Shared counter turning streamed bytes into percent updates.
struct UploadProgress {
    sent: AtomicU64,
    total: u64,
    last: AtomicU8,
    callback: ProgressFn,
}

impl UploadProgress {
    fn new(total: u64, callback: ProgressFn) -> Arc<Self> {
        Arc::new(Self {
            sent: AtomicU64::new(0),
            total,
            last: AtomicU8::new(0),
            callback,
        })
    }

    fn advance(&self, n: usize) {
        let sent = self.sent.fetch_add(n as u64, Ordering::Relaxed) + n as u64;
        let percent = percent(sent, self.total);
        // Only report changes; many chunks map to the same percent.
        if self.last.swap(percent, Ordering::Relaxed) != percent {
            (self.callback)(percent);
        }
    }
}

fn percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    ((sent as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

/// Client for the remote inference endpoints.
///
/// Failures are returned as-is; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(config: &CoachConfig) -> CoachResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoachError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoints: config.endpoints.clone(),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Upload trainer and user videos for comparison.
    pub async fn analyze_movement(
        &self,
        request: AnalyzeRequest,
        on_progress: Option<ProgressFn>,
    ) -> CoachResult<AnalysisResponse> {
        let total = (request.trainer_video.len() + request.user_video.len()) as u64;
        let progress = on_progress.map(|cb| UploadProgress::new(total, cb));

        let form = Form::new()
            .part(
                "trainer_video",
                file_part(request.trainer_video, progress.clone())?,
            )
            .part("user_video", file_part(request.user_video, progress.clone())?)
            .text("exercise_name", request.exercise_name.clone())
            .text("email", request.email);

        tracing::info!(
            url = %self.endpoints.analyze_url,
            exercise = %request.exercise_name,
            bytes = total,
            "Submitting movement analysis"
        );

        let response = self
            .http
            .post(&self.endpoints.analyze_url)
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let analysis: AnalysisResponse = response.json().await?;
        tracing::info!(frames = analysis.analysis.len(), "Analysis received");
        Ok(analysis)
    }

    /// Request a corrected-form image for a single frame.
    pub async fn generate_image(&self, request: GenerateRequest) -> CoachResult<GeneratedImage> {
        let url = self
            .endpoints
            .generate_url
            .as_deref()
            .ok_or(CoachError::NotConfigured("Generate Image"))?;

        let mut form = Form::new()
            .part("user_image", file_part(request.user_image, None)?)
            .text("exercise_name", request.exercise_name);
        if let Some(description) = request.error_description.filter(|d| !d.is_empty()) {
            form = form.text("error_description", description);
        }

        tracing::info!(url = %url, "Requesting corrected form image");
        let response = self.http.post(url).multipart(form).send().await?;
        let response = ensure_success(response).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;
        GeneratedImage::from_response(content_type.as_deref(), body)
    }

    /// Send one chat message and return the assistant's reply text.
    pub async fn chat(&self, message: &str) -> CoachResult<String> {
        tracing::debug!(url = %self.endpoints.chat_url, "Sending chat message");
        let response = self
            .http
            .post(&self.endpoints.chat_url)
            .json(&ChatRequest { message })
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let value: serde_json::Value = response.json().await?;
        Ok(chat_reply_text(&value))
    }

    /// Check credentials against the login endpoint, if one is configured.
    ///
    /// Returns `Ok(false)` when no endpoint is set and nothing was checked.
    pub async fn login(&self, email: &str, password: &str) -> CoachResult<bool> {
        let Some(url) = self.endpoints.login_url.as_deref() else {
            return Ok(false);
        };
        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(true)
    }
}

/// Build a multipart file part, streaming through `progress` when given.
fn file_part(file: MediaFile, progress: Option<Arc<UploadProgress>>) -> CoachResult<Part> {
    let len = file.bytes.len() as u64;
    let part = match progress {
        None => Part::stream_with_length(Body::from(file.bytes), len),
        Some(progress) => {
            let chunks = chunk(file.bytes);
            let body = Body::wrap_stream(stream::iter(chunks.into_iter().map(move |c| {
                progress.advance(c.len());
                Ok::<Bytes, std::io::Error>(c)
            })));
            Part::stream_with_length(body, len)
        }
    };
    part.file_name(file.name)
        .mime_str(&file.mime)
        .map_err(|e| CoachError::InvalidInput(format!("invalid MIME type: {e}")))
}

fn chunk(bytes: Bytes) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(bytes.len() / UPLOAD_CHUNK_BYTES + 1);
    let mut offset = 0;
    while offset < bytes.len() {
        let end = (offset + UPLOAD_CHUNK_BYTES).min(bytes.len());
        chunks.push(bytes.slice(offset..end));
        offset = end;
    }
    chunks
}

async fn ensure_success(response: Response) -> CoachResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let mut body = response.text().await.unwrap_or_default();
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    tracing::warn!(status = status.as_u16(), "Endpoint returned an error");
    Err(CoachError::Http {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 200), 0);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(100, 200), 50);
        assert_eq!(percent(200, 200), 100);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn test_chunking_preserves_bytes() {
        let data: Vec<u8> = (0..(UPLOAD_CHUNK_BYTES * 2 + 10)).map(|i| i as u8).collect();
        let chunks = chunk(Bytes::from(data.clone()));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 10);
        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
        assert_eq!(joined, data);
        assert!(chunk(Bytes::new()).is_empty());
    }

    #[test]
    fn test_progress_reports_changes_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress = UploadProgress::new(400, Arc::new(move |p| sink.lock().push(p)));
        progress.advance(1);
        progress.advance(1);
        progress.advance(198);
        progress.advance(200);
        assert_eq!(*seen.lock(), vec![1, 50, 100]);
    }
}
