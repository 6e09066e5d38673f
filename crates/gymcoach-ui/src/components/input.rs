//! Form Field Components
//!
//! Labelled text inputs and textareas for the login and analysis forms.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

use super::button::class_list;

static NEXT_FIELD_ID: AtomicU32 = AtomicU32::new(0);

/// Unique id for associating a label with its field.
fn field_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Muted text after the label, e.g. "optional"
    #[props(default)]
    pub hint: Option<String>,
    /// text, email, password
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
    /// Fired on Enter
    #[props(default)]
    pub onsubmit: Option<EventHandler<()>>,
}

/// Single-line text field
///
/// # Example
///
/// ```rust,ignore
/// let mut exercise = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: exercise(),
///         oninput: move |s| exercise.set(s),
///         label: "Exercise name".to_string(),
///         placeholder: "e.g. Squat, Deadlift".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_hook(|| field_id("input"));
    let class = class_list("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        if let Some(handler) = &props.onsubmit {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text field, used for the error description on the
/// generate page.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| field_id("textarea"));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_unique() {
        let a = field_id("input");
        let b = field_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }
}
