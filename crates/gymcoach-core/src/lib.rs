//! Visual AI Gym Coach Core Library
//!
//! Client-side logic for an AI exercise-form coach. All analysis happens on
//! remote inference endpoints; this crate validates input, talks to those
//! endpoints, keeps the local session and history, and computes the
//! scroll-linked card stack layout used by the landing page.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gymcoach_core::{Coach, CoachConfig, MediaFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let coach = Coach::new("~/.local/share/gymcoach", CoachConfig::from_env()?)?;
//!     coach.login("lifter@example.com", "hunter2").await?;
//!
//!     let trainer = MediaFile::open("trainer_squat.mp4")?;
//!     let user = MediaFile::open("my_squat.mp4")?;
//!     let result = coach.analyze(Some(trainer), Some(user), "Squat", None).await?;
//!
//!     for frame in &result.analysis {
//!         println!("#{}: {}/100 {}", frame.frame_id, frame.score_label(), frame.feedback);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod scroll_stack;
pub mod session;
pub mod storage;
pub mod types;
pub mod upload;

// Re-exports
pub use api::{AnalysisFrame, AnalysisResponse, ApiClient, GeneratedImage, ProgressFn, TechnicalDetail};
pub use chat::{ChatLog, ChatMessage, PanelResize, Role};
pub use config::{default_data_dir, CoachConfig, Endpoints};
pub use engine::Coach;
pub use error::{CoachError, CoachResult};
pub use scroll_stack::{ScrollProgress, StackConfig, StackItem, StackLayout, TransformRange};
pub use session::Session;
pub use storage::Storage;
pub use types::*;
pub use upload::{accept_drop, MediaFile, MediaKind};
