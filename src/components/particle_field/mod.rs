//! Animated particle background.
//!
//! Renders drifting translucent points on a full-viewport canvas with:
//! - Per-frame motion with respawn on leaving the visible area
//! - Faint connecting lines between particles closer than a threshold
//! - A particle count scaled to the viewport width and capped
//! - An explicit frame loop handle so teardown stops the animation
//!
//! # Example
//!
//! ```ignore
//! use landing_fx::components::particle_field::{FieldStyle, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas style=FieldStyle::aurora() /> }
//! ```

mod component;
pub mod frame_loop;
pub mod particles;
pub mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use frame_loop::{FrameLoop, Tick};
pub use particles::{Bounds, Particle, ParticleField, particle_count};
pub use theme::{Color, FieldStyle};
