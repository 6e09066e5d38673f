//! Toast notifications
//!
//! One notification per failure or success; they dismiss themselves after
//! a few seconds or on click.

use std::time::Duration;

use dioxus::prelude::*;
use gymcoach_core::CoachError;

use crate::context::use_toasts;

const MAX_VISIBLE: usize = 3;
const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Visible toasts, oldest first. Pushing past the cap drops the oldest.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
        if self.toasts.len() > MAX_VISIBLE {
            self.toasts.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Show a toast and schedule its removal.
pub fn show_toast(mut queue: Signal<ToastQueue>, kind: ToastKind, title: &str, description: &str) {
    let id = queue.write().push(kind, title, description);
    spawn(async move {
        tokio::time::sleep(DISMISS_AFTER).await;
        queue.write().dismiss(id);
    });
}

/// Error toast for a failed action.
///
/// Input problems get `input_title`; anything else gets `failure_title`.
pub fn show_error(
    queue: Signal<ToastQueue>,
    input_title: &str,
    failure_title: &str,
    error: &CoachError,
) {
    let title = match error {
        CoachError::InvalidInput(_) | CoachError::UnsupportedMedia { .. } => input_title,
        _ => failure_title,
    };
    tracing::warn!("{}: {}", failure_title, error);
    show_toast(queue, ToastKind::Error, title, &error.user_message());
}

#[component]
pub fn Toaster() -> Element {
    let mut queue = use_toasts();
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        div { class: "toast-stack", role: "status",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    onclick: move |_| queue.write().dismiss(toast.id),
                    div { class: "toast-body",
                        div { class: "toast-title", "{toast.title}" }
                        if !toast.description.is_empty() {
                            div { class: "toast-description", "{toast.description}" }
                        }
                    }
                }
            }
        }
    }
}
