//! Drawing for the particle field.
//!
//! Rendering uses two passes so links sit on top of the dots:
//! 1. Particles as filled circles, alpha taken from each particle's opacity
//! 2. Proximity links between every pair closer than the link threshold

use super::particles::ParticleField;
use super::surface::DrawingSurface;
use super::theme::Theme;

/// Clears the surface and draws the field in its current state.
pub fn render<S: DrawingSurface + ?Sized>(field: &ParticleField, surface: &mut S, theme: &Theme) {
	surface.clear();
	draw_particles(field, surface, theme);
	draw_links(field, surface, theme);
}

fn draw_particles<S: DrawingSurface + ?Sized>(field: &ParticleField, surface: &mut S, theme: &Theme) {
	let color = theme.particles.color;

	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.size, color.with_alpha(p.opacity));
	}
}

fn draw_links<S: DrawingSurface + ?Sized>(field: &ParticleField, surface: &mut S, theme: &Theme) {
	let style = &theme.links;

	for link in field.links(style) {
		let (a, b) = (&field.particles[link.a], &field.particles[link.b]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			style.line_width,
			style.color.with_alpha(link.alpha),
		);
	}
}
