//! Video and image uploaders
//!
//! A dropzone that also opens a native file picker on click. Drops are
//! filtered by MIME type; picker selections are taken as chosen since the
//! picker already filters by extension.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use gymcoach_core::{accept_drop, MediaFile, MediaKind};
use rfd::FileDialog;

/// Load dropped or picked paths off the UI thread.
async fn load_files(paths: Vec<String>) -> Vec<MediaFile> {
    let loaded = tokio::task::spawn_blocking(move || {
        paths
            .into_iter()
            .filter_map(|path| match MediaFile::open(&path) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!("Could not read {}: {}", path, e);
                    None
                }
            })
            .collect::<Vec<_>>()
    })
    .await;
    loaded.unwrap_or_default()
}

fn kind_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "\u{1F3AC}",
        MediaKind::Image => "\u{1F5BC}",
    }
}

#[component]
pub fn MediaUploader(kind: MediaKind, label: String, file: Signal<Option<MediaFile>>) -> Element {
    let mut file = file;
    let mut drag_over = use_signal(|| false);
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let open_picker = move |_| {
        if picking() {
            return;
        }
        picking.set(true);
        error.set(None);

        spawn(async move {
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter(kind.picker_label(), kind.picker_extensions())
                    .set_title("Select File")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    let path = path.to_string_lossy().into_owned();
                    match load_files(vec![path]).await.into_iter().next() {
                        Some(media) => file.set(Some(media)),
                        None => error.set(Some("Could not read the selected file.".to_string())),
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error.set(Some(format!("File picker error: {e}")));
                }
            }
            picking.set(false);
        });
    };

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag_over.set(false);
        let Some(engine) = evt.files() else {
            return;
        };
        // Only the first dropped file counts.
        let paths: Vec<String> = engine.files().into_iter().take(1).collect();
        spawn(async move {
            if let Some(media) = accept_drop(kind, load_files(paths).await) {
                error.set(None);
                file.set(Some(media));
            }
        });
    };

    let current = file();
    let zone_class = if drag_over() {
        "dropzone drag-over"
    } else {
        "dropzone"
    };
    let noun = match kind {
        MediaKind::Video => "video",
        MediaKind::Image => "image",
    };

    rsx! {
        div { class: "uploader",
            label { class: "uploader-label", "{label}" }

            {match current {
                None => rsx! {
                    div {
                        class: zone_class,
                        ondragover: move |e: DragEvent| {
                            e.prevent_default();
                            drag_over.set(true);
                        },
                        ondragleave: move |_| drag_over.set(false),
                        ondrop: on_drop,
                        onclick: open_picker,
                        div { class: "dropzone-icon", "\u{2B06}" }
                        p { "Drop {noun} here or click to browse" }
                        p { class: "dropzone-hint", "{kind.hint()}" }
                    }
                },
                Some(media) => rsx! {
                    div { class: "upload-preview glass",
                        {match (kind, media.data_uri()) {
                            (MediaKind::Video, Some(src)) => rsx! {
                                video { src: "{src}", controls: true }
                            },
                            (MediaKind::Image, Some(src)) => rsx! {
                                img { src: "{src}", alt: "{media.name}" }
                            },
                            (_, None) => rsx! {},
                        }}
                        button {
                            class: "remove-btn",
                            "aria-label": "Remove",
                            onclick: move |_| file.set(None),
                            "\u{00D7}"
                        }
                        div { class: "upload-meta",
                            span { "{kind_icon(kind)}" }
                            span { "{media.name}" }
                            span { class: "size", "{media.display_size()}" }
                        }
                    }
                },
            }}

            if let Some(err) = error() {
                div { class: "upload-error", "{err}" }
            }
        }
    }
}

#[component]
pub fn VideoUploader(label: String, file: Signal<Option<MediaFile>>) -> Element {
    rsx! {
        MediaUploader { kind: MediaKind::Video, label, file }
    }
}

#[component]
pub fn ImageUploader(label: String, file: Signal<Option<MediaFile>>) -> Element {
    rsx! {
        MediaUploader { kind: MediaKind::Image, label, file }
    }
}
