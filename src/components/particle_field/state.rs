//! Particle field runtime state.
//!
//! Bundles the simulation with its drawing surface and frame loop. Created
//! once when the canvas mounts, then driven by three entry points: the frame
//! callback, window resize, and document visibility changes. All three run on
//! the same thread, so the state lives in a plain `Rc<RefCell<_>>`.

use log::{debug, info};
use rand::Rng;

use super::frame_loop::{AnimationLoop, FrameScheduler};
use super::particles::ParticleField;
use super::render;
use super::surface::DrawingSurface;
use super::theme::Theme;

/// Core runtime: simulation, surface, theme and loop.
pub struct ParticleFieldState<S: DrawingSurface, F: FrameScheduler> {
	pub field: ParticleField,
	pub frames: AnimationLoop<F>,
	surface: S,
	theme: Theme,
}

impl<S: DrawingSurface, F: FrameScheduler> ParticleFieldState<S, F> {
	/// Sizes the surface, spawns particles and requests the first frame.
	///
	/// Without a surface nothing is created and no frame is ever requested.
	pub fn attach<R: Rng + ?Sized>(
		surface: Option<S>,
		scheduler: F,
		theme: Theme,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Option<Self> {
		let Some(mut surface) = surface else {
			debug!("portfolio-fx: no drawing surface, particle field disabled");
			return None;
		};
		surface.set_size(width, height);

		let field = ParticleField::new(&theme.particles, width, height, rng);
		info!(
			"portfolio-fx: particle field started with {} particles ({}x{})",
			field.len(),
			width,
			height
		);

		let mut frames = AnimationLoop::new(scheduler);
		frames.start();

		Some(Self {
			field,
			frames,
			surface,
			theme,
		})
	}

	/// One animation frame: advance, draw, ask for the next frame.
	pub fn frame(&mut self) {
		if !self.frames.begin_frame() {
			return;
		}
		self.field.update();
		render::render(&self.field, &mut self.surface, &self.theme);
		self.frames.end_frame();
	}

	/// Follows the viewport size. Particle count is left alone.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.surface.set_size(width, height);
		self.field.resize(width, height);
	}

	pub fn set_hidden(&mut self, hidden: bool) {
		if hidden != self.frames.is_hidden() {
			debug!(
				"portfolio-fx: particle field {}",
				if hidden { "suspended" } else { "resumed" }
			);
		}
		self.frames.set_hidden(hidden);
	}

	#[cfg(test)]
	pub fn surface(&self) -> &S {
		&self.surface
	}
}
