//! Navigation Header Component
//!
//! Brand on the left, page links in the middle, and the session on the
//! right: the logged-in email with a logout button, or a login link.

use dioxus::prelude::*;

use super::{show_error, show_toast, ToastKind};
use crate::app::Route;
use crate::context::{use_coach, use_current_user, use_toasts};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Analyze,
    Generate,
    History,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [
        NavLocation::Analyze,
        NavLocation::Generate,
        NavLocation::History,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Analyze => "Analyze Movement",
            NavLocation::Generate => "Generate Image",
            NavLocation::History => "History",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Analyze => Route::Analyze {},
            NavLocation::Generate => Route::Generate {},
            NavLocation::History => Route::History {},
        }
    }

    /// Location highlighted for the current route, if any.
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Analyze {} => Some(NavLocation::Analyze),
            Route::Generate {} => Some(NavLocation::Generate),
            Route::History {} => Some(NavLocation::History),
            Route::Landing {} | Route::Login {} => None,
        }
    }
}

#[component]
pub fn NavHeader() -> Element {
    let route = use_route::<Route>();
    let coach = use_coach();
    let user = use_current_user();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let current = NavLocation::for_route(&route);

    let logout = move |_| {
        let Some(coach) = coach() else {
            return;
        };
        match coach.logout() {
            Ok(()) => {
                show_toast(toasts, ToastKind::Success, "Logged out", "");
                navigator.push(Route::Landing {});
            }
            Err(e) => show_error(toasts, "Logout failed", "Logout failed", &e),
        }
    };

    rsx! {
        header { class: "navbar",
            Link { to: Route::Landing {}, class: "navbar-brand",
                span { class: "navbar-logo", {render_pulse_icon()} }
                "Visual AI Gym Coach"
            }

            nav { class: "navbar-links",
                for location in NavLocation::ALL {
                    Link {
                        to: location.route(),
                        class: if Some(location) == current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }

            div { class: "navbar-user",
                {match user() {
                    Some(u) => rsx! {
                        span { "{u.email}" }
                        button { class: "btn-ghost", onclick: logout, "Logout" }
                    },
                    None => rsx! {
                        Link { to: Route::Login {}, class: "nav-link", "Login" }
                    },
                }}
            }
        }
    }
}

/// Lucide activity icon
fn render_pulse_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_round_trip_through_routes() {
        for location in NavLocation::ALL {
            assert_eq!(NavLocation::for_route(&location.route()), Some(location));
        }
    }

    #[test]
    fn landing_and_login_highlight_nothing() {
        assert_eq!(NavLocation::for_route(&Route::Landing {}), None);
        assert_eq!(NavLocation::for_route(&Route::Login {}), None);
    }
}
