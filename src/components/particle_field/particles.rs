//! Drifting background particles and their proximity links.

use rand::Rng;

use super::theme::{LinkStyle, ParticleStyle};

/// A single floating particle.
///
/// Only the position changes from frame to frame; everything else is fixed
/// until [`Particle::reset`] is called.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub opacity: f64,
}

impl Particle {
	/// Creates a particle with every attribute randomized.
	pub fn spawn<R: Rng + ?Sized>(rng: &mut R, style: &ParticleStyle, width: f64, height: f64) -> Self {
		let mut particle = Self::default();
		particle.reset(rng, style, width, height);
		particle
	}

	/// Re-randomizes position, size, velocity and opacity.
	pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, style: &ParticleStyle, width: f64, height: f64) {
		self.x = rng.r#gen::<f64>() * width;
		self.y = rng.r#gen::<f64>() * height;
		self.size = lerp(style.size_min, style.size_max, rng.r#gen());
		self.speed_x = (rng.r#gen::<f64>() - 0.5) * 2.0 * style.speed;
		self.speed_y = (rng.r#gen::<f64>() - 0.5) * 2.0 * style.speed;
		self.opacity = lerp(style.opacity_min, style.opacity_max, rng.r#gen());
	}

	/// Moves one step along the velocity, wrapping around the surface edges.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.speed_x, width);
		self.y = wrap(self.y + self.speed_y, height);
	}
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
	min + t * (max - min)
}

/// Toroidal wrap: leaving through the low edge re-enters at `extent`, leaving
/// through the high edge re-enters at 0.
fn wrap(value: f64, extent: f64) -> f64 {
	if value < 0.0 {
		let wrapped = value + extent;
		// Tiny negatives can round onto the far edge itself.
		if wrapped < extent { wrapped } else { 0.0 }
	} else if value >= extent {
		0.0
	} else {
		value
	}
}

/// Number of particles for a surface: one per `area_per_particle` px², capped.
pub fn particle_count(style: &ParticleStyle, width: f64, height: f64) -> usize {
	let by_area = (width * height / style.area_per_particle).floor();
	// NaN and negatives saturate to 0 in the cast.
	(by_area as usize).min(style.max_count)
}

/// A connecting line between two particles closer than the link threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub alpha: f64,
}

/// Fixed-size set of particles living on a surface of known dimensions.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new<R: Rng + ?Sized>(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let count = particle_count(style, width, height);
		let particles = (0..count)
			.map(|_| Particle::spawn(&mut *rng, style, width, height))
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advances every particle by one frame.
	pub fn update(&mut self) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
		}
	}

	/// Adopts new surface bounds.
	///
	/// Particles are neither recounted nor moved; anything now outside the
	/// bounds is brought back by the wrap in [`Particle::advance`].
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Every unordered pair closer than `links.max_distance`, with its line alpha.
	pub fn links<'a>(&'a self, links: &'a LinkStyle) -> impl Iterator<Item = Link> + 'a {
		let ps = &self.particles;
		(0..ps.len()).flat_map(move |a| {
			((a + 1)..ps.len()).filter_map(move |b| {
				let (dx, dy) = (ps[a].x - ps[b].x, ps[a].y - ps[b].y);
				let distance = (dx * dx + dy * dy).sqrt();
				links.alpha_at(distance).map(|alpha| Link { a, b, alpha })
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;
	use rand::SeedableRng;
	use rand_pcg::Pcg64;

	use super::*;

	fn rng() -> Pcg64 {
		Pcg64::seed_from_u64(7)
	}

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			size: 1.0,
			opacity: 0.5,
			..Default::default()
		}
	}

	fn field_of(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
		ParticleField {
			particles,
			width,
			height,
		}
	}

	#[test]
	fn count_follows_area_and_cap() {
		let style = ParticleStyle::default();
		assert_eq!(particle_count(&style, 0.0, 0.0), 0);
		assert_eq!(particle_count(&style, 1500.0, 1000.0), 100);
		assert_eq!(particle_count(&style, 500.0, 300.0), 10);
		assert_eq!(particle_count(&style, 500.0, 299.0), 9);
		assert_eq!(particle_count(&style, 3840.0, 2160.0), 100);
	}

	#[test]
	fn spawned_attributes_stay_in_range() {
		let style = ParticleStyle::default();
		let mut rng = rng();
		for _ in 0..1000 {
			let p = Particle::spawn(&mut rng, &style, 800.0, 600.0);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((0.5..2.5).contains(&p.size));
			assert!((-0.25..0.25).contains(&p.speed_x));
			assert!((-0.25..0.25).contains(&p.speed_y));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn reset_rerolls_attributes() {
		let style = ParticleStyle::default();
		let mut rng = rng();
		let mut p = Particle::spawn(&mut rng, &style, 800.0, 600.0);
		let before = p.clone();
		p.reset(&mut rng, &style, 800.0, 600.0);
		assert_ne!(p, before);
	}

	#[test]
	fn update_moves_position_only() {
		let style = ParticleStyle::default();
		let mut field = ParticleField::new(&style, 600.0, 500.0, &mut rng());
		let before = field.particles.clone();
		field.update();
		for (old, new) in before.iter().zip(&field.particles) {
			assert_eq!(old.size, new.size);
			assert_eq!(old.speed_x, new.speed_x);
			assert_eq!(old.speed_y, new.speed_y);
			assert_eq!(old.opacity, new.opacity);
		}
	}

	#[test]
	fn positions_stay_on_the_torus() {
		let style = ParticleStyle::default();
		let mut field = ParticleField::new(&style, 400.0, 400.0, &mut rng());
		assert_eq!(field.len(), 10);
		for _ in 0..5000 {
			field.update();
			for p in &field.particles {
				assert!(p.x >= 0.0 && p.x < 400.0, "x out of range: {}", p.x);
				assert!(p.y >= 0.0 && p.y < 400.0, "y out of range: {}", p.y);
			}
		}
	}

	#[test]
	fn wraps_to_the_opposite_edge() {
		let mut low = Particle {
			speed_x: -0.2,
			speed_y: -0.2,
			..at(0.1, 0.1)
		};
		low.advance(100.0, 50.0);
		assert_relative_eq!(low.x, 99.9, epsilon = 1e-9);
		assert_relative_eq!(low.y, 49.9, epsilon = 1e-9);

		let mut high = Particle {
			speed_x: 0.2,
			speed_y: 0.2,
			..at(99.9, 49.9)
		};
		high.advance(100.0, 50.0);
		assert_eq!((high.x, high.y), (0.0, 0.0));
	}

	#[test]
	fn resize_keeps_particles_and_positions() {
		let style = ParticleStyle::default();
		let mut field = ParticleField::new(&style, 1000.0, 600.0, &mut rng());
		assert_eq!(field.len(), 40);
		let before = field.particles.clone();

		field.resize(300.0, 200.0);
		assert_eq!(field.len(), 40);
		assert_eq!(field.particles, before);
		assert_eq!((field.width(), field.height()), (300.0, 200.0));

		field.resize(4000.0, 3000.0);
		assert_eq!(field.len(), 40);
	}

	#[test]
	fn out_of_bounds_particles_come_back_after_shrink() {
		let mut field = field_of(vec![at(250.0, 20.0)], 300.0, 300.0);
		field.resize(200.0, 100.0);
		field.update();
		assert_eq!(field.particles[0].x, 0.0);
		assert_relative_eq!(field.particles[0].y, 20.0);
	}

	#[test]
	fn far_outside_particle_returns_in_one_frame() {
		let far = Particle {
			speed_x: 0.1,
			..at(1000.0, 1000.0)
		};
		let mut field = field_of(vec![far], 1500.0, 1500.0);
		field.resize(200.0, 300.0);
		field.update();
		let p = &field.particles[0];
		assert!(p.x >= 0.0 && p.x < 200.0, "x still off-surface: {}", p.x);
		assert!(p.y >= 0.0 && p.y < 300.0, "y still off-surface: {}", p.y);
	}

	#[test]
	fn links_respect_the_distance_threshold() {
		let links = LinkStyle::default();
		let field = field_of(
			vec![at(0.0, 0.0), at(149.999, 0.0), at(0.0, 150.0), at(0.0, 400.0)],
			1000.0,
			1000.0,
		);
		let found: Vec<Link> = field.links(&links).collect();

		assert_eq!(found.len(), 1);
		assert_eq!((found[0].a, found[0].b), (0, 1));
		assert_relative_eq!(found[0].alpha, 0.15 * (0.001 / 150.0), max_relative = 1e-6);
	}

	#[test]
	fn every_close_pair_is_linked_once() {
		let links = LinkStyle::default();
		let field = field_of(vec![at(10.0, 10.0), at(20.0, 10.0), at(10.0, 30.0)], 100.0, 100.0);
		let pairs: Vec<(usize, usize)> = field.links(&links).map(|l| (l.a, l.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
	}

	#[test]
	fn empty_surface_has_no_particles() {
		let field = ParticleField::new(&ParticleStyle::default(), 0.0, 0.0, &mut rng());
		assert!(field.is_empty());
		assert_eq!(field.links(&LinkStyle::default()).count(), 0);
	}
}
