//! Per-frame analysis card with an expandable detail modal.

use dioxus::prelude::*;
use gymcoach_core::AnalysisFrame;
use gymcoach_ui::{Button, ButtonVariant, IconButton, ScoreGauge};

use super::Markdown;

#[component]
pub fn FrameCard(frame: AnalysisFrame) -> Element {
    let mut expanded = use_signal(|| false);
    let user_src = frame.user_image_uri();
    let trainer_src = frame.trainer_image_uri();
    let score = frame.score_label();

    rsx! {
        div { class: "frame-card glass",
            div { class: "frame-card-header",
                div { class: "frame-card-title",
                    ScoreGauge { score: frame.error_score, size: 56 }
                    div {
                        h4 { "Frame #{frame.frame_id}" }
                        p { class: "page-subtitle", "Error Score: {score}/100" }
                    }
                }
                IconButton {
                    aria_label: "Expand".to_string(),
                    onclick: move |_| expanded.set(true),
                    "\u{2922}"
                }
            }

            div { class: "frame-images",
                div { class: "frame-image",
                    p { "User" }
                    img { src: "{user_src}", alt: "User frame" }
                }
                div { class: "frame-image",
                    p { "Trainer" }
                    img { src: "{trainer_src}", alt: "Trainer frame" }
                }
            }

            Markdown { content: frame.feedback.clone(), class: "frame-feedback".to_string() }
            Markdown {
                content: frame.technical_observation.clone(),
                class: "frame-observation".to_string(),
            }
        }

        if expanded() {
            div {
                class: "modal-backdrop",
                onclick: move |_| expanded.set(false),
                div {
                    class: "modal",
                    onclick: move |e| e.stop_propagation(),
                    div { class: "frame-images",
                        div { class: "frame-image",
                            p { "User Frame" }
                            img { src: "{user_src}", alt: "User" }
                        }
                        div { class: "frame-image",
                            p { "Trainer Frame" }
                            img { src: "{trainer_src}", alt: "Trainer" }
                        }
                    }
                    div { class: "frame-card-title",
                        ScoreGauge { score: frame.error_score }
                        div {
                            h3 { "Frame #{frame.frame_id}" }
                            p { class: "page-subtitle", "Error Score: {score}/100" }
                        }
                    }
                    Markdown { content: frame.feedback.clone() }
                    Markdown {
                        content: frame.technical_observation.clone(),
                        class: "frame-observation".to_string(),
                    }
                    div { class: "button-row", style: "margin-top: 1.5rem;",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| expanded.set(false),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
