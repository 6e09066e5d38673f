use dioxus::prelude::*;
use gymcoach_core::{Coach, User};

use crate::components::{ChatBot, NavHeader, ToastQueue, Toaster};
use crate::context::{CurrentUser, SharedCoach};
use crate::pages::{Analyze, Generate, History, Landing, Login};
use crate::theme::GLOBAL_STYLES;
use crate::{get_config, get_data_dir};

/// Application routes.
///
/// - `/` - Landing page with the hero and scroll-stack showcase
/// - `/analyze` - Trainer vs. user video comparison
/// - `/generate` - Corrected-form image generation
/// - `/history` - Past analyses
/// - `/login` - Login, shown without the navbar
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/analyze")]
        Analyze {},
        #[route("/generate")]
        Generate {},
        #[route("/history")]
        History {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

/// Navbar and floating chat around every main page.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            NavHeader {}
            Outlet::<Route> {}
            ChatBot {}
        }
    }
}

/// Root application component.
///
/// Opens the coach, provides it and the session through context, and
/// mirrors session changes into the current-user signal.
#[component]
pub fn App() -> Element {
    let created = use_hook(|| {
        Coach::new(get_data_dir(), get_config()).map_err(|e| {
            tracing::error!("Failed to initialize coach: {}", e);
            e.to_string()
        })
    });

    let coach: SharedCoach = use_signal(|| created.clone().ok());
    let startup_error = created.clone().err();
    let mut user: Signal<Option<User>> =
        use_signal(|| coach.peek().as_ref().and_then(|c| c.session().current()));
    let toasts = use_signal(ToastQueue::default);

    use_context_provider(|| coach);
    use_context_provider(|| CurrentUser(user));
    use_context_provider(|| toasts);

    // Follow login/logout from any page.
    use_hook(move || {
        let Some(mut changes) = coach.peek().as_ref().map(|c| c.session().subscribe()) else {
            return;
        };
        spawn(async move {
            while changes.changed().await.is_ok() {
                let current = changes.borrow_and_update().clone();
                tracing::debug!(logged_in = current.is_some(), "Session changed");
                user.set(current);
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        {match startup_error {
            Some(message) => rsx! {
                div { class: "startup-error glass",
                    h1 { "Could not start" }
                    p { "{message}" }
                    p { class: "page-subtitle", "Data directory: {get_data_dir().display()}" }
                }
            },
            None => rsx! { Router::<Route> {} },
        }}
        Toaster {}
    }
}
