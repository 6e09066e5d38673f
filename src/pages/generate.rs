//! Generate Image page
//!
//! One frame of the user's lift plus an optional description of what went
//! wrong; the backend answers with an image of the corrected form.

use dioxus::prelude::*;
use gymcoach_core::{CoachError, GeneratedImage, MediaFile};
use gymcoach_ui::{Button, ButtonVariant, Input, TextArea};
use rfd::FileDialog;

use crate::components::{show_error, show_toast, ImageUploader, ToastKind};
use crate::context::{use_coach, use_toasts};

/// Ask where to save the image and write it. `Ok(None)` means cancelled.
async fn save_image(image: GeneratedImage) -> Result<Option<String>, CoachError> {
    let saved = tokio::task::spawn_blocking(move || -> Result<Option<String>, CoachError> {
        let Some(path) = FileDialog::new()
            .set_title("Save corrected image")
            .set_file_name(image.file_name())
            .add_filter("Image", &[image.extension()])
            .save_file()
        else {
            return Ok(None);
        };
        std::fs::write(&path, &image.bytes)?;
        Ok(Some(path.display().to_string()))
    })
    .await;

    match saved {
        Ok(result) => result,
        Err(e) => Err(CoachError::Io(std::io::Error::other(e))),
    }
}

#[component]
pub fn Generate() -> Element {
    let coach = use_coach();
    let toasts = use_toasts();

    let mut image = use_signal(|| Option::<MediaFile>::None);
    let mut exercise = use_signal(String::new);
    let mut error_description = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut generated = use_signal(|| Option::<GeneratedImage>::None);

    let mut run_generation = move || {
        if loading() {
            return;
        }
        let Some(coach) = coach() else {
            return;
        };
        let frame = image();
        let name = exercise();
        let description = error_description();

        loading.set(true);
        spawn(async move {
            let description = Some(description.trim()).filter(|d| !d.is_empty());
            match coach.generate(frame, Some(&name), description).await {
                Ok(result) => generated.set(Some(result)),
                Err(e) => show_error(toasts, "Missing input", "Generation failed", &e),
            }
            loading.set(false);
        });
    };

    let download = move |_| {
        let Some(result) = generated() else {
            return;
        };
        spawn(async move {
            match save_image(result).await {
                Ok(Some(path)) => {
                    show_toast(toasts, ToastKind::Success, "Image saved", &path);
                }
                Ok(None) => {}
                Err(e) => show_error(toasts, "Save failed", "Save failed", &e),
            }
        });
    };

    rsx! {
        main { class: "page",
            header { class: "page-header",
                span { class: "page-icon", "\u{2728}" }
                div {
                    h1 { class: "page-title", "Generate Correct Form" }
                    p { class: "page-subtitle",
                        "Upload a frame of your lift and see how it should look."
                    }
                }
            }

            div { class: "grid-2",
                section { class: "panel glass",
                    ImageUploader { label: "Your frame".to_string(), file: image }
                    Input {
                        value: exercise(),
                        oninput: move |s| exercise.set(s),
                        label: "Exercise name".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "e.g. Squat".to_string(),
                        disabled: loading(),
                    }
                    TextArea {
                        value: error_description(),
                        oninput: move |s| error_description.set(s),
                        label: "What's wrong with the form?".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "e.g. knees caving in at the bottom".to_string(),
                        disabled: loading(),
                    }
                    div { class: "button-row",
                        Button {
                            onclick: move |_| run_generation(),
                            loading: loading(),
                            "Generate"
                        }
                    }
                }

                section { class: "panel glass generated-result",
                    {match generated() {
                        Some(result) => rsx! {
                            img { src: "{result.data_uri()}", alt: "Corrected form" }
                            div { class: "button-row",
                                Button { onclick: download, "Download" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| run_generation(),
                                    disabled: loading(),
                                    "Regenerate"
                                }
                            }
                        },
                        None if loading() => rsx! {
                            div { class: "loading-panel",
                                span { class: "spinner spinner-lg" }
                                p { "Generating corrected form\u{2026}" }
                            }
                        },
                        None => rsx! {
                            p { class: "empty-state", "The corrected image will appear here." }
                        },
                    }}
                }
            }
        }
    }
}
