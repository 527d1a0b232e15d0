//! Drifting background particles.
//!
//! Particles are plain values: [`Particle::step`] returns the next state
//! instead of mutating in place, so the motion rules can be exercised without
//! a canvas. A particle that leaves the visible area is respawned at a fresh
//! random position rather than clamped or bounced.

use rand::Rng;

use super::theme::{Color, FieldStyle};

/// Visible drawing area in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Inclusive on both edges.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// A single floating particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub size: f64,
	pub color: Color,
	pub opacity: f64,
}

impl Particle {
	/// A fresh particle somewhere inside `bounds`.
	pub fn spawn<R: Rng>(rng: &mut R, bounds: Bounds, style: &FieldStyle) -> Self {
		let color = match style.palette.len() {
			0 => style.color(0),
			n => style.color(rng.random_range(0..n)),
		};
		Self {
			x: rng.random::<f64>() * bounds.width,
			y: rng.random::<f64>() * bounds.height,
			speed_x: style.speed.lerp(rng.random()),
			speed_y: style.speed.lerp(rng.random()),
			size: style.size.lerp(rng.random()),
			color,
			opacity: style.opacity.lerp(rng.random()),
		}
	}

	/// Advance one frame. Leaving `bounds` on either axis yields a respawned
	/// particle, so the result always lies inside `bounds`.
	pub fn step<R: Rng>(self, bounds: Bounds, style: &FieldStyle, rng: &mut R) -> Self {
		let (x, y) = (self.x + self.speed_x, self.y + self.speed_y);
		if bounds.contains(x, y) {
			Self { x, y, ..self }
		} else {
			Self::spawn(rng, bounds, style)
		}
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Number of particles for a viewport `width` pixels wide: one per
/// `width_per_particle` pixels, capped at `max_count`.
pub fn particle_count(width: f64, style: &FieldStyle) -> usize {
	if style.width_per_particle <= 0.0 {
		return style.max_count;
	}
	// `as` saturates: negative or NaN widths give zero.
	let scaled = (width / style.width_per_particle).floor() as usize;
	scaled.min(style.max_count)
}

/// The fixed-size particle collection plus the surface it drifts over.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub style: FieldStyle,
	bounds: Bounds,
}

impl ParticleField {
	/// Populate the field once. The count depends on the viewport width at
	/// startup and is never recomputed afterwards.
	pub fn new<R: Rng>(
		style: FieldStyle,
		bounds: Bounds,
		viewport_width: f64,
		rng: &mut R,
	) -> Self {
		let count = particle_count(viewport_width, &style);
		let particles = (0..count)
			.map(|_| Particle::spawn(rng, bounds, &style))
			.collect();

		Self {
			particles,
			style,
			bounds,
		}
	}

	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Move every particle one frame, respawning any that left the bounds.
	pub fn step<R: Rng>(&mut self, rng: &mut R) {
		let (bounds, style) = (self.bounds, &self.style);
		for p in &mut self.particles {
			*p = p.step(bounds, style, rng);
		}
	}

	/// Track a new surface size. Existing particles keep their positions and
	/// may sit outside the new bounds until their next step respawns them.
	pub fn resize(&mut self, bounds: Bounds) {
		self.bounds = bounds;
	}

	/// Every unordered pair `(i, j)`, `i < j`, closer than the link distance.
	pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		let threshold = self.style.link_distance;
		let ps = &self.particles;
		(0..ps.len()).flat_map(move |i| {
			((i + 1)..ps.len())
				.filter(move |&j| ps[i].distance_to(&ps[j]) < threshold)
				.map(move |j| (i, j))
		})
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			size: 2.0,
			color: Color::rgba(121, 24, 191, 0.3),
			opacity: 0.5,
		}
	}

	fn field_of(particles: Vec<Particle>) -> ParticleField {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut field = ParticleField::new(
			FieldStyle::default(),
			Bounds::new(1000.0, 1000.0),
			0.0,
			&mut rng,
		);
		field.particles = particles;
		field
	}

	#[test]
	fn count_scales_with_width_and_caps() {
		let style = FieldStyle::default();
		assert_eq!(particle_count(800.0, &style), 40);
		assert_eq!(particle_count(2000.0, &style), 60);
		assert_eq!(particle_count(300.0, &style), 15);
		assert_eq!(particle_count(19.0, &style), 0);
		assert_eq!(particle_count(-5.0, &style), 0);
		assert_eq!(particle_count(f64::NAN, &style), 0);
	}

	#[test]
	fn spawn_respects_style_ranges() {
		let style = FieldStyle::default();
		let bounds = Bounds::new(640.0, 480.0);
		let mut rng = SmallRng::seed_from_u64(7);
		for _ in 0..500 {
			let p = Particle::spawn(&mut rng, bounds, &style);
			assert!(bounds.contains(p.x, p.y));
			assert!((1.0..4.0).contains(&p.size));
			assert!((0.1..0.6).contains(&p.opacity));
			assert!(style.speed.contains(p.speed_x));
			assert!(style.speed.contains(p.speed_y));
			assert!(style.palette.contains(&p.color));
		}
	}

	#[test]
	fn step_moves_by_velocity_inside_bounds() {
		let style = FieldStyle::default();
		let mut rng = SmallRng::seed_from_u64(3);
		let p = Particle {
			speed_x: 0.2,
			speed_y: -0.1,
			..at(10.0, 10.0)
		};
		let next = p.step(Bounds::new(100.0, 100.0), &style, &mut rng);
		assert!((next.x - 10.2).abs() < 1e-9);
		assert!((next.y - 9.9).abs() < 1e-9);
		assert_eq!(next.size, p.size);
		assert_eq!(next.color, p.color);
	}

	#[test]
	fn leaving_bounds_respawns_inside() {
		let style = FieldStyle::default();
		let bounds = Bounds::new(100.0, 100.0);
		let mut rng = SmallRng::seed_from_u64(11);
		let escaping = [
			Particle { speed_x: -0.2, ..at(0.1, 50.0) },
			Particle { speed_x: 0.2, ..at(99.9, 50.0) },
			Particle { speed_y: -0.2, ..at(50.0, 0.1) },
			Particle { speed_y: 0.2, ..at(50.0, 99.9) },
		];
		for p in escaping {
			let next = p.step(bounds, &style, &mut rng);
			assert!(bounds.contains(next.x, next.y), "{next:?} escaped");
		}
	}

	#[test]
	fn field_stays_in_bounds_over_many_frames() {
		let bounds = Bounds::new(320.0, 200.0);
		let mut rng = SmallRng::seed_from_u64(42);
		let mut field = ParticleField::new(FieldStyle::default(), bounds, 1280.0, &mut rng);
		assert_eq!(field.particles.len(), 60);
		for _ in 0..5000 {
			field.step(&mut rng);
			assert!(field.particles.iter().all(|p| bounds.contains(p.x, p.y)));
		}
		assert_eq!(field.particles.len(), 60);
	}

	#[test]
	fn resize_keeps_particles_until_they_step() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut field = field_of(vec![at(900.0, 900.0)]);
		field.resize(Bounds::new(400.0, 300.0));
		assert_eq!(field.particles[0], at(900.0, 900.0));
		assert_eq!(field.particles.len(), 1);

		field.step(&mut rng);
		let p = field.particles[0];
		assert!(field.bounds().contains(p.x, p.y));
	}

	#[test]
	fn links_follow_distance_threshold() {
		let field = field_of(vec![at(0.0, 0.0), at(100.0, 0.0)]);
		assert_eq!(field.links().collect::<Vec<_>>(), vec![(0, 1)]);

		let field = field_of(vec![at(0.0, 0.0), at(200.0, 0.0)]);
		assert_eq!(field.links().count(), 0);

		// Exactly on the threshold is not linked.
		let field = field_of(vec![at(0.0, 0.0), at(150.0, 0.0)]);
		assert_eq!(field.links().count(), 0);
	}

	#[test]
	fn links_are_unordered_pairs() {
		let field = field_of(vec![at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0), at(500.0, 500.0)]);
		let links: Vec<_> = field.links().collect();
		assert_eq!(links, vec![(0, 1), (0, 2), (1, 2)]);
	}
}
