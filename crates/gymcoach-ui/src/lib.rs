//! Visual AI Gym Coach UI Components
//!
//! Dioxus building blocks shared by the desktop pages. Styling comes from the
//! app's global stylesheet; components only attach class names.
//!
//! ## Palette
//!
//! - **Neon green (#39ff88)**: primary actions, good form
//! - **Orange (#ff9f40)**: warnings, form that needs work
//! - **Red (#ff4d6d)**: destructive actions, poor form
//! - **Ink (#0b0d12)**: background

pub mod components;

pub use components::*;
