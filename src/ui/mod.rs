pub mod fire;
pub mod session;
pub mod style;

pub use fire::{render_ashes, render_fire};
pub use session::run_interactive;
