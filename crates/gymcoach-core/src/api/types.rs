//! Wire types exchanged with the inference endpoints.

use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, CoachResult};
use crate::upload::sniff_image_mime;

/// One compared frame from a movement analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFrame {
    pub frame_id: u32,
    /// 0 is perfect form, 100 is the worst.
    pub error_score: f64,
    pub feedback: String,
    pub technical_observation: String,
    /// Base64 JPEG of the user's frame
    pub user_image: String,
    /// Base64 JPEG of the trainer's frame
    pub trainer_image: String,
}

impl AnalysisFrame {
    pub fn user_image_uri(&self) -> String {
        jpeg_data_uri(&self.user_image)
    }

    pub fn trainer_image_uri(&self) -> String {
        jpeg_data_uri(&self.trainer_image)
    }

    /// Score as shown in the UI: integral scores without decimals.
    pub fn score_label(&self) -> String {
        format_score(self.error_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalDetail {
    pub title: String,
    pub description: String,
}

/// Full result of an analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub analysis: Vec<AnalysisFrame>,
    #[serde(default)]
    pub feedback_summary: String,
    #[serde(default)]
    pub technical_details: Vec<TechnicalDetail>,
}

impl AnalysisResponse {
    pub fn mean_error_score(&self) -> Option<f64> {
        if self.analysis.is_empty() {
            return None;
        }
        let total: f64 = self.analysis.iter().map(|f| f.error_score).sum();
        Some(total / self.analysis.len() as f64)
    }

    /// Frame with the highest error score.
    pub fn worst_frame(&self) -> Option<&AnalysisFrame> {
        self.analysis
            .iter()
            .max_by(|a, b| a.error_score.total_cmp(&b.error_score))
    }
}

/// JSON form of an image generation reply.
#[derive(Debug, Clone, Deserialize)]
struct GenerateImageBody {
    corrected_image: String,
}

/// Corrected-form image returned by the generation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub bytes: Bytes,
    pub mime: String,
}

impl GeneratedImage {
    /// Decode a reply that is either JSON `{ "corrected_image": base64 }` or
    /// the raw image bytes.
    pub fn from_response(content_type: Option<&str>, body: Bytes) -> CoachResult<Self> {
        let is_json = content_type
            .map(|ct| ct.contains("json"))
            .unwrap_or_else(|| body.first() == Some(&b'{'));

        let bytes = if is_json {
            let parsed: GenerateImageBody = serde_json::from_slice(&body)
                .map_err(|e| CoachError::Decode(format!("generation reply: {e}")))?;
            Bytes::from(decode_base64(&parsed.corrected_image)?)
        } else {
            body
        };

        if bytes.is_empty() {
            return Err(CoachError::Decode("generation reply was empty".to_string()));
        }

        let mime = match sniff_image_mime(&bytes) {
            Some(sniffed) => sniffed.to_string(),
            None => content_type
                .filter(|ct| ct.starts_with("image/"))
                .unwrap_or("image/jpeg")
                .to_string(),
        };

        Ok(Self { bytes, mime })
    }

    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime, encoded)
    }

    /// File extension matching the image format.
    pub fn extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            _ => "jpg",
        }
    }

    /// Suggested name for downloads.
    pub fn file_name(&self) -> String {
        format!("corrected_image.{}", self.extension())
    }
}

/// Chat endpoint request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Login endpoint request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Pull the reply text out of a chat response.
///
/// Tries `response`, `text` and `message` in order; any other shape is shown
/// as serialized JSON.
pub fn chat_reply_text(value: &serde_json::Value) -> String {
    ["response", "text", "message"]
        .iter()
        .find_map(|key| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

fn jpeg_data_uri(encoded: &str) -> String {
    format!("data:image/jpeg;base64,{encoded}")
}

fn decode_base64(encoded: &str) -> CoachResult<Vec<u8>> {
    // Some backends send a full data URI instead of bare base64.
    let payload = encoded
        .split_once(";base64,")
        .map(|(_, rest)| rest)
        .unwrap_or(encoded);
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| CoachError::Decode(format!("corrected_image: {e}")))
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{score:.1}")
    }
}
