//! Past analyses, newest first.

use chrono::Local;
use dioxus::prelude::*;
use gymcoach_core::AnalysisRecord;
use gymcoach_ui::{Button, ButtonVariant, ScoreGauge};

use crate::app::Route;
use crate::components::show_error;
use crate::context::{use_coach, use_toasts};

fn local_time(record: &AnalysisRecord) -> String {
    record
        .created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y %H:%M")
        .to_string()
}

#[component]
pub fn History() -> Element {
    let coach = use_coach();
    let toasts = use_toasts();
    // Bumped after a delete to re-read storage.
    let mut revision = use_signal(|| 0u32);

    let records = {
        let _ = revision();
        match coach.read().as_ref().map(|c| c.history()) {
            Some(Ok(records)) => records,
            Some(Err(e)) => {
                tracing::error!("Failed to load history: {}", e);
                Vec::new()
            }
            None => Vec::new(),
        }
    };

    let mut delete = move |id: String| {
        let Some(coach) = coach() else {
            return;
        };
        match coach.delete_history_entry(&id) {
            Ok(_) => revision.set(revision() + 1),
            Err(e) => show_error(toasts, "Delete failed", "Delete failed", &e),
        }
    };

    rsx! {
        main { class: "page",
            header { class: "page-header",
                span { class: "page-icon", "\u{1F4C8}" }
                div {
                    h1 { class: "page-title", "Past Analyses" }
                    p { class: "page-subtitle", "Every analysis you have run on this machine." }
                }
            }

            if records.is_empty() {
                div { class: "empty-state glass",
                    p { "No past analyses yet." }
                    Link { to: Route::Analyze {}, class: "nav-link", "Run your first analysis" }
                }
            }

            for record in records {
                div { key: "{record.id}", class: "history-item glass",
                    {match record.mean_error_score {
                        Some(score) => rsx! { ScoreGauge { score, size: 56 } },
                        None => rsx! { span { class: "history-meta", "-" } },
                    }}
                    div { class: "history-item-body",
                        h3 { "{record.exercise_name}" }
                        p { class: "history-meta",
                            "{local_time(&record)} \u{00B7} {record.frame_count} frames \u{00B7} mean score {record.mean_score_label()}"
                            if let Some(frame) = record.worst_frame {
                                " \u{00B7} worst frame #{frame}"
                            }
                        }
                        if !record.feedback_summary.is_empty() {
                            p { "{record.feedback_summary}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: {
                            let id = record.id.to_string();
                            move |_| delete(id.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
