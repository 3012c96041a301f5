//! Background Animation
//!
//! Particle field, the animator that draws it, and the frame loop that
//! drives it.

pub mod animator;
pub mod frame_loop;
pub mod particle;
pub mod surface;

pub use animator::{Animator, Viewport};
pub use frame_loop::FrameLoop;
pub use particle::JsRandom;
pub use surface::CanvasSurface;
