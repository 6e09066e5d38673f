//! Floating coach chat
//!
//! A round button toggles a resizable panel. Dragging the handle up makes
//! the panel taller; while dragging, a transparent overlay tracks the
//! pointer across the whole window.

use std::rc::Rc;

use dioxus::prelude::*;
use gymcoach_core::{ChatLog, PanelResize};
use gymcoach_ui::{IconButton, Input};

use super::Markdown;
use crate::context::use_coach;

#[component]
pub fn ChatBot() -> Element {
    let coach = use_coach();
    let mut open = use_signal(|| false);
    let mut log = use_signal(ChatLog::new);
    let mut input = use_signal(String::new);
    let mut resize = use_signal(PanelResize::new);
    let mut bottom: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Keep the newest message in view.
    use_effect(move || {
        let _ = log.read().len();
        if let Some(anchor) = bottom() {
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let mut send = move || {
        let Some(text) = log.write().begin_send(&input()) else {
            return;
        };
        input.set(String::new());

        let Some(coach) = coach() else {
            log.write()
                .finish(Err(gymcoach_core::CoachError::NotConfigured("Chat")));
            return;
        };
        spawn(async move {
            let reply = coach.chat(&text).await;
            log.write().finish(reply);
        });
    };

    let height = resize.read().height();
    let dragging = resize.read().is_dragging();
    let can_send = log.read().can_send(&input());
    let messages = log.read().messages().to_vec();
    let loading = log.read().is_loading();

    rsx! {
        button {
            class: "chat-fab",
            "aria-label": if open() { "Close chat" } else { "Open chat" },
            onclick: move |_| open.toggle(),
            if open() { "\u{00D7}" } else { "\u{1F4AC}" }
        }

        if open() {
            div { class: "chat-panel", style: "height: {height}px;",
                div {
                    class: "chat-resize-handle",
                    onmousedown: move |e: MouseEvent| {
                        e.prevent_default();
                        resize.write().begin(e.client_coordinates().y);
                    },
                }

                div { class: "chat-header", "AI Coach Chat" }

                div { class: "chat-messages",
                    if messages.is_empty() {
                        p { class: "chat-empty", "Ask your AI coach anything\u{2026}" }
                    }
                    for (i, msg) in messages.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if msg.is_mine() { "chat-bubble mine" } else { "chat-bubble theirs" },
                            Markdown { content: msg.content.clone() }
                            span { class: "chat-time", "{msg.format_time()}" }
                        }
                    }
                    if loading {
                        div { class: "chat-bubble theirs",
                            span { class: "spinner" }
                        }
                    }
                    div { onmounted: move |e| bottom.set(Some(e.data())) }
                }

                div { class: "chat-input-row",
                    Input {
                        value: input(),
                        oninput: move |s| input.set(s),
                        placeholder: "Type a message\u{2026}".to_string(),
                        onsubmit: move |_| send(),
                    }
                    if can_send {
                        IconButton {
                            aria_label: "Send".to_string(),
                            onclick: move |_| send(),
                            "\u{27A4}"
                        }
                    }
                }
            }
        }

        if dragging {
            div {
                class: "chat-drag-overlay",
                onmousemove: move |e: MouseEvent| {
                    resize.write().drag_to(e.client_coordinates().y);
                },
                onmouseup: move |_| resize.write().end(),
                onmouseleave: move |_| resize.write().end(),
            }
        }
    }
}
