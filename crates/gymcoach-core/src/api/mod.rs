//! Remote inference endpoints.
//!
//! ```text
//! analyze   multipart: trainer_video, user_video, exercise_name, email -> AnalysisResponse
//! generate  multipart: user_image, exercise_name, [error_description] -> image (JSON base64 or raw)
//! chat      JSON { message }                                          -> JSON reply text
//! login     JSON { email, password }                                  -> 2xx
//! ```

mod client;
mod types;

pub use client::{AnalyzeRequest, ApiClient, GenerateRequest, ProgressFn};
pub use types::{
    chat_reply_text, AnalysisFrame, AnalysisResponse, GeneratedImage, TechnicalDetail,
};
