//! UI components for the Visual AI Gym Coach desktop app.
//!
//! Generic widgets (buttons, inputs, the score gauge) live in gymcoach-ui;
//! these are the app-specific pieces that need routing or the coach.

mod chat_bot;
mod frame_card;
mod markdown;
mod nav_header;
mod scroll_stack;
mod toast;
mod uploader;

pub use chat_bot::ChatBot;
pub use frame_card::FrameCard;
pub use markdown::{render_markdown, Markdown};
pub use nav_header::{NavHeader, NavLocation};
pub use scroll_stack::{card_style, ScrollStack, StackCard};
pub use toast::{show_error, show_toast, Toast, ToastKind, ToastQueue, Toaster};
pub use uploader::{ImageUploader, MediaUploader, VideoUploader};
