//! Login page
//!
//! Stores the user locally; a remote check only happens when a login
//! endpoint is configured.

use dioxus::prelude::*;
use gymcoach_ui::{Button, Input};

use crate::app::Route;
use crate::components::{show_error, show_toast, ToastKind};
use crate::context::{use_coach, use_toasts};

#[component]
pub fn Login() -> Element {
    let coach = use_coach();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let mut submit = move || {
        if loading() {
            return;
        }
        let Some(coach) = coach() else {
            return;
        };
        let (address, secret) = (email(), password());

        loading.set(true);
        spawn(async move {
            match coach.login(&address, &secret).await {
                Ok(user) => {
                    show_toast(
                        toasts,
                        ToastKind::Success,
                        "Welcome back!",
                        &format!("Logged in as {}", user.email),
                    );
                    navigator.push(Route::Landing {});
                }
                Err(e) => show_error(toasts, "Missing fields", "Login failed", &e),
            }
            loading.set(false);
        });
    };

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card glass",
                header { class: "page-header",
                    span { class: "page-icon", "\u{1F511}" }
                    h1 { class: "page-title", "Login" }
                }

                Input {
                    value: email(),
                    oninput: move |s| email.set(s),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    disabled: loading(),
                }
                Input {
                    value: password(),
                    oninput: move |s| password.set(s),
                    label: "Password".to_string(),
                    input_type: "password".to_string(),
                    placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}".to_string(),
                    disabled: loading(),
                    onsubmit: move |_| submit(),
                }
                Button {
                    onclick: move |_| submit(),
                    loading: loading(),
                    "Login"
                }

                p { class: "auth-footer",
                    "Just browsing? "
                    Link { to: Route::Landing {}, "Back to home" }
                }
            }
        }
    }
}
