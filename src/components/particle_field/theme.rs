//! Visual styling for the particle field.
//!
//! Colors and the numeric ranges particles are drawn from. Every style can be
//! overridden from the page configuration document.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The cyan accent used across the portfolio.
pub const ACCENT: Color = Color::rgb(0, 212, 255);

/// How particles are spawned and drawn.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Upper bound on the number of particles, regardless of surface area.
	pub max_count: usize,
	/// Surface area (px²) that earns one particle.
	pub area_per_particle: f64,
	/// Particle fill color; alpha comes from each particle's opacity.
	pub color: Color,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius (exclusive)
	pub size_max: f64,
	/// Per-axis speed bound in px/frame. Velocities fall in `[-speed, speed)`.
	pub speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			max_count: 100,
			area_per_particle: 15_000.0,
			color: ACCENT,
			size_min: 0.5,
			size_max: 2.5,
			speed: 0.25,
			opacity_min: 0.2,
			opacity_max: 0.7,
		}
	}
}

/// Proximity lines drawn between nearby particles.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Pairs at or beyond this distance are not connected.
	pub max_distance: f64,
	/// Alpha of a line between two coincident particles.
	pub max_alpha: f64,
	pub line_width: f64,
	pub color: Color,
}

impl LinkStyle {
	/// Line alpha for a pair at `distance`, or `None` when out of range.
	pub fn alpha_at(&self, distance: f64) -> Option<f64> {
		if distance < self.max_distance {
			Some(self.max_alpha * (1.0 - distance / self.max_distance))
		} else {
			None
		}
	}
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			max_distance: 150.0,
			max_alpha: 0.15,
			line_width: 0.5,
			color: ACCENT,
		}
	}
}

/// Complete visual theme for the particle field.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
	pub particles: ParticleStyle,
	pub links: LinkStyle,
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	#[test]
	fn css_output_switches_to_rgba_when_translucent() {
		assert_eq!(ACCENT.to_css(), "#00d4ff");
		assert_eq!(ACCENT.with_alpha(0.5).to_css(), "rgba(0, 212, 255, 0.5)");
	}

	#[test]
	fn link_alpha_fades_linearly_to_the_threshold() {
		let links = LinkStyle::default();
		assert_relative_eq!(links.alpha_at(0.0).unwrap(), 0.15);
		assert_relative_eq!(links.alpha_at(75.0).unwrap(), 0.075);
		assert_relative_eq!(
			links.alpha_at(149.999).unwrap(),
			0.15 * (0.001 / 150.0),
			max_relative = 1e-6
		);
		assert_eq!(links.alpha_at(150.0), None);
		assert_eq!(links.alpha_at(400.0), None);
	}

	#[test]
	fn partial_theme_json_keeps_defaults() {
		let theme: Theme =
			serde_json::from_str(r#"{ "links": { "max_distance": 90 } }"#).unwrap();
		assert_eq!(theme.links.max_distance, 90.0);
		assert_eq!(theme.links.max_alpha, 0.15);
		assert_eq!(theme.particles.max_count, 100);
		assert_eq!(theme.particles.color, ACCENT);
	}

	#[test]
	fn color_alpha_defaults_to_opaque() {
		let c: Color = serde_json::from_str(r#"{ "r": 1, "g": 2, "b": 3 }"#).unwrap();
		assert_eq!(c, Color::rgb(1, 2, 3));
	}
}
