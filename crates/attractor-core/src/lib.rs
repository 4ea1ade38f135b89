pub mod camera;
pub mod constants;
pub mod error;
pub mod lorenz;
pub mod session;
pub mod trajectory;
pub static TRAIL_WGSL: &str = include_str!("../shaders/trail.wgsl");

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use lorenz::*;
pub use session::*;
pub use trajectory::*;
