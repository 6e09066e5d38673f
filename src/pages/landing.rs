//! Landing page: hero, feature shortcuts and the scroll-stack showcase.

use dioxus::prelude::*;
use gymcoach_core::CoachConfig;
use gymcoach_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{ScrollStack, StackCard};
use crate::context::use_coach;

const FEATURE_CHIPS: [&str; 4] = [
    "Skeleton sync",
    "Frame-by-frame scores",
    "Corrected-form images",
    "Coach chat",
];

fn showcase_cards() -> Vec<StackCard> {
    vec![
        StackCard::new(
            "Step 1",
            "Upload two videos",
            "A trainer demonstrating the exercise and you performing it. MP4 or MOV.",
        ),
        StackCard::new(
            "Step 2",
            "Skeletons are synchronized",
            "Both recordings are aligned rep by rep so every frame compares like with like.",
        ),
        StackCard::new(
            "Step 3",
            "Every frame gets a score",
            "Error scores from 0 to 100, with feedback and a technical observation per frame.",
        ),
        StackCard::new(
            "Step 4",
            "See the correct form",
            "Turn any frame into an image of how the movement should look.",
        ),
    ]
}

/// Endpoint summary for the settings card.
fn settings_lines(config: &CoachConfig) -> Vec<(&'static str, String)> {
    let endpoints = &config.endpoints;
    vec![
        ("Analyze", endpoints.analyze_url.clone()),
        (
            "Generate",
            endpoints
                .generate_url
                .clone()
                .unwrap_or_else(|| "not configured".to_string()),
        ),
        ("Chat", endpoints.chat_url.clone()),
        (
            "Login",
            endpoints
                .login_url
                .clone()
                .unwrap_or_else(|| "local only".to_string()),
        ),
    ]
}

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let coach = use_coach();

    let config = coach
        .read()
        .as_ref()
        .map(|c| c.config().clone())
        .unwrap_or_default();
    let settings = settings_lines(&config);

    rsx! {
        main { class: "page",
            section { class: "hero",
                span { class: "hero-badge", "AI-Powered Biomechanical Analysis" }
                h1 { class: "hero-title",
                    "Visual AI "
                    span { class: "gradient-text", "Gym Coach" }
                }
                p { class: "hero-tagline", "Upload. Analyze. Correct." }
                p { class: "hero-copy",
                    "Compare your lift against a trainer's, frame by frame. "
                    "Get an error score for every position, plain-language feedback "
                    "and an image of what the correct form looks like."
                }
                div { class: "button-row",
                    Button {
                        onclick: move |_| { navigator.push(Route::Analyze {}); },
                        "Start Analysis"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { navigator.push(Route::Generate {}); },
                        "Generate Image"
                    }
                }
            }

            p { class: "section-label", "What you can do" }
            div { class: "grid-2",
                Link { to: Route::Analyze {}, class: "feature-card glass glow",
                    h3 { "Analyze Movement" }
                    p { "Frame-by-frame comparison against a trainer video." }
                }
                Link { to: Route::Generate {}, class: "feature-card glass",
                    h3 { "Generate Correct Form" }
                    p { "Turn a frame of your lift into a corrected-form image." }
                }
                Link { to: Route::History {}, class: "feature-card glass",
                    h3 { "Past Analyses" }
                    p { "Scores and summaries of earlier sessions." }
                }
                div { class: "feature-card glass static",
                    h3 { "Settings" }
                    for (name, value) in settings {
                        p { key: "{name}",
                            strong { "{name}: " }
                            code { "{value}" }
                        }
                    }
                }
            }

            div { class: "chip-row",
                for chip in FEATURE_CHIPS {
                    span { class: "chip", "{chip}" }
                }
            }

            p { class: "section-label", "How it works" }
            ScrollStack { cards: showcase_cards() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_show_missing_endpoints() {
        let lines = settings_lines(&CoachConfig::default());
        assert_eq!(lines[1], ("Generate", "not configured".to_string()));
        assert_eq!(lines[3], ("Login", "local only".to_string()));
    }

    #[test]
    fn showcase_has_four_cards() {
        assert_eq!(showcase_cards().len(), 4);
    }
}
