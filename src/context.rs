//! Shared app state provided through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let coach = use_coach();
//! let user = use_current_user();
//!
//! if let Some(coach) = coach() {
//!     spawn(async move {
//!         let reply = coach.chat("hi").await;
//!     });
//! }
//! ```

use dioxus::prelude::*;
use gymcoach_core::{Coach, User};

use crate::components::ToastQueue;

/// The coach, or `None` if it failed to open.
pub type SharedCoach = Signal<Option<Coach>>;

/// Hook to access the Coach from context.
///
/// `Coach` is cheap to clone; clone it out before moving into a task.
pub fn use_coach() -> SharedCoach {
    use_context::<SharedCoach>()
}

/// Logged-in user, kept in step with the session's watch channel.
#[derive(Clone, Copy)]
pub struct CurrentUser(pub Signal<Option<User>>);

pub fn use_current_user() -> Signal<Option<User>> {
    use_context::<CurrentUser>().0
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}
