//! Particle field background.
//!
//! Renders drifting points on a full-viewport canvas with:
//! - Toroidal wrap-around motion at a fixed step per animation frame
//! - Faint lines between every pair of particles closer than a threshold
//! - Particle count derived from viewport area, capped to bound the pairwise pass
//! - Suspension while the document is hidden
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particle_field::{ParticleFieldCanvas, Theme};
//!
//! view! { <ParticleFieldCanvas theme=Theme::default() /> }
//! ```

mod component;
pub mod frame_loop;
pub mod particles;
mod render;
pub mod state;
pub mod surface;
pub mod theme;

pub use component::{CANVAS_ID, ParticleFieldCanvas};
pub use theme::Theme;
