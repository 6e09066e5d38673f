//! Page components for the Visual AI Gym Coach.

mod analyze;
mod generate;
mod history;
mod landing;
mod login;

pub use analyze::Analyze;
pub use generate::Generate;
pub use history::History;
pub use landing::Landing;
pub use login::Login;
