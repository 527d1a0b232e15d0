//! Visual styling for the particle field.
//!
//! Provides the translucent colour palette and the motion/size ranges used
//! when particles are (re)spawned.

use crate::components::landing::config::ParticleSettings;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A half-open numeric range `[min, max)` sampled uniformly on spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Map a unit sample `t` in `[0, 1)` onto the range.
	pub fn lerp(self, t: f64) -> f64 {
		self.min + (self.max - self.min) * t
	}

	pub fn contains(self, v: f64) -> bool {
		v >= self.min && v <= self.max
	}
}

/// Complete particle field style.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Colors picked uniformly at spawn.
	pub palette: Vec<Color>,
	/// Per-frame velocity on each axis.
	pub speed: Range,
	/// Circle radius.
	pub size: Range,
	/// Global alpha applied while filling a particle.
	pub opacity: Range,
	/// Hard cap on the number of particles.
	pub max_count: usize,
	/// Viewport pixels per particle before the cap applies.
	pub width_per_particle: f64,
	/// Particles closer than this are joined by a line.
	pub link_distance: f64,
	pub link_color: Color,
	pub link_width: f64,
}

impl FieldStyle {
	/// Purple/orange glow used on the marketing pages (default).
	pub fn aurora() -> Self {
		Self {
			palette: vec![
				Color::rgba(121, 24, 191, 0.3),  // Violet
				Color::rgba(147, 50, 209, 0.2),  // Orchid
				Color::rgba(249, 115, 22, 0.2),  // Ember
				Color::rgba(236, 72, 153, 0.15), // Rose
			],
			speed: Range::new(-0.25, 0.25),
			size: Range::new(1.0, 4.0),
			opacity: Range::new(0.1, 0.6),
			max_count: 60,
			width_per_particle: 20.0,
			link_distance: 150.0,
			link_color: Color::rgba(121, 24, 191, 0.05),
			link_width: 0.5,
		}
	}

	/// Apply page-level overrides on top of this style.
	pub fn with_settings(self, settings: &ParticleSettings) -> Self {
		Self {
			max_count: settings.max_count,
			width_per_particle: settings.width_per_particle,
			link_distance: settings.link_distance,
			..self
		}
	}

	/// Palette entry for `index`, wrapping around. An empty palette falls
	/// back to the link color.
	pub fn color(&self, index: usize) -> Color {
		match self.palette.len() {
			0 => self.link_color,
			n => self.palette[index % n],
		}
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::aurora()
	}
}
