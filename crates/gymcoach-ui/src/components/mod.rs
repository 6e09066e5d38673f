//! Reusable UI components

mod button;
mod input;
mod score_gauge;

pub use button::*;
pub use input::*;
pub use score_gauge::*;
