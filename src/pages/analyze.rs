//! Analyze Movement page
//!
//! Two video uploaders and an exercise name go in; a summary, technical
//! corrections and one card per analysed frame come out.

use std::sync::Arc;

use dioxus::prelude::*;
use gymcoach_core::{AnalysisResponse, MediaFile, ProgressFn};
use gymcoach_ui::{Button, ButtonVariant, Input};
use tokio::sync::watch;

use crate::components::{show_error, FrameCard, Markdown, VideoUploader};
use crate::context::{use_coach, use_toasts};

/// Upload progress callback that forwards percentages into a watch channel.
///
/// Signals cannot leave the UI thread, so the receiver side is drained by
/// a task spawned on it.
fn progress_channel() -> (ProgressFn, watch::Receiver<u8>) {
    let (tx, rx) = watch::channel(0u8);
    let callback: ProgressFn = Arc::new(move |percent| {
        tx.send_replace(percent);
    });
    (callback, rx)
}

#[component]
pub fn Analyze() -> Element {
    let coach = use_coach();
    let toasts = use_toasts();

    let mut trainer_video = use_signal(|| Option::<MediaFile>::None);
    let mut user_video = use_signal(|| Option::<MediaFile>::None);
    let mut exercise = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut progress = use_signal(|| 0u8);
    let mut result = use_signal(|| Option::<AnalysisResponse>::None);

    let run_analysis = move |_| {
        if loading() {
            return;
        }
        let Some(coach) = coach() else {
            return;
        };
        let trainer = trainer_video();
        let user = user_video();
        let name = exercise();

        let (on_progress, mut rx) = progress_channel();
        loading.set(true);
        progress.set(0);
        result.set(None);

        spawn(async move {
            while rx.changed().await.is_ok() {
                let percent = *rx.borrow_and_update();
                progress.set(percent);
            }
        });

        spawn(async move {
            match coach.analyze(trainer, user, &name, Some(on_progress)).await {
                Ok(response) => {
                    tracing::info!(frames = response.analysis.len(), "Analysis complete");
                    result.set(Some(response));
                }
                Err(e) => show_error(toasts, "Missing inputs", "Analysis failed", &e),
            }
            loading.set(false);
        });
    };

    let reset = move |_| {
        trainer_video.set(None);
        user_video.set(None);
        exercise.set(String::new());
        progress.set(0);
        result.set(None);
    };

    let percent = progress();

    rsx! {
        main { class: "page",
            header { class: "page-header",
                span { class: "page-icon", "\u{1F3CB}" }
                div {
                    h1 { class: "page-title", "Analyze Movement" }
                    p { class: "page-subtitle",
                        "Compare your technique against a trainer, frame by frame."
                    }
                }
            }

            section { class: "panel glass",
                div { class: "grid-2",
                    VideoUploader { label: "Trainer video".to_string(), file: trainer_video }
                    VideoUploader { label: "Your video".to_string(), file: user_video }
                }
                Input {
                    value: exercise(),
                    oninput: move |s| exercise.set(s),
                    label: "Exercise name".to_string(),
                    placeholder: "e.g. Squat, Deadlift, Bench Press".to_string(),
                    disabled: loading(),
                }
                div { class: "button-row",
                    Button {
                        onclick: run_analysis,
                        loading: loading(),
                        "Analyze"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: reset,
                        disabled: loading(),
                        "Reset"
                    }
                }
            }

            if loading() {
                section { class: "panel glass loading-panel",
                    span { class: "spinner spinner-lg" }
                    p { "Synchronizing skeletons and analyzing posture\u{2026}" }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {percent}%;" }
                    }
                    p { class: "page-subtitle", "Upload: {percent}%" }
                }
            }

            if let Some(response) = result() {
                if !response.feedback_summary.is_empty() {
                    section { class: "panel glass",
                        h2 { "Session Summary" }
                        Markdown {
                            content: response.feedback_summary.clone(),
                            class: "summary-text".to_string(),
                        }
                    }
                }

                if !response.technical_details.is_empty() {
                    section { class: "panel glass",
                        h2 { "Technical Corrections" }
                        ul { class: "detail-list",
                            for (i, detail) in response.technical_details.iter().enumerate() {
                                li { key: "{i}",
                                    strong { "{detail.title}" }
                                    Markdown { content: detail.description.clone() }
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { "Frame Analysis ({response.analysis.len()} frames)" }
                    div { class: "grid-2",
                        for frame in response.analysis.iter().cloned() {
                            FrameCard { key: "{frame.frame_id}", frame }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_channel_keeps_latest_percent() {
        let (callback, rx) = progress_channel();
        callback(10);
        callback(55);
        assert_eq!(*rx.borrow(), 55);
    }

    #[tokio::test]
    async fn progress_channel_closes_with_callback() {
        let (callback, mut rx) = progress_channel();
        callback(100);
        assert!(rx.changed().await.is_ok());
        drop(callback);
        assert!(rx.changed().await.is_err());
    }
}
