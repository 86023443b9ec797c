pub mod autoplay;
pub mod collage;
pub mod config;
pub mod constants;
pub mod effects;
pub mod physics;
pub mod screen;

pub use autoplay::*;
pub use config::*;
pub use effects::*;
pub use physics::*;
pub use screen::*;
