//! Coach chat panel state
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  ChatBot component (desktop app)             │
//! ├──────────────────────────────────────────────┤
//! │  ChatLog      messages + pending flag        │
//! │  PanelResize  drag-to-resize height          │
//! ├──────────────────────────────────────────────┤
//! │  ApiClient::chat  JSON POST to chat endpoint │
//! └──────────────────────────────────────────────┘
//! ```

mod conversation;
mod message;
mod panel;

pub use conversation::{ChatLog, CHAT_FALLBACK_REPLY};
pub use message::{ChatMessage, Role};
pub use panel::{PanelResize, DEFAULT_PANEL_HEIGHT, MAX_PANEL_HEIGHT, MIN_PANEL_HEIGHT};
