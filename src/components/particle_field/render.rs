//! Canvas rendering for the particle field.
//!
//! Each frame is drawn in three passes:
//! 1. Clear the whole surface
//! 2. Particles as filled circles, each under its own global alpha
//! 3. Faint straight links between nearby particles

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Bounds, ParticleField};
use super::theme::Color;

/// The handful of 2D drawing calls the field needs.
///
/// Implemented for the browser canvas context; tests substitute a recorder.
pub trait Painter {
	fn clear(&self, bounds: Bounds);
	fn set_alpha(&self, alpha: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn set_alpha(&self, alpha: f64) {
		self.set_global_alpha(alpha);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Draws the complete field onto `painter`.
pub fn render<P: Painter + ?Sized>(field: &ParticleField, painter: &P) {
	painter.clear(field.bounds());
	draw_particles(field, painter);
	draw_links(field, painter);
}

fn draw_particles<P: Painter + ?Sized>(field: &ParticleField, painter: &P) {
	for p in &field.particles {
		painter.set_alpha(p.opacity);
		painter.fill_circle(p.x, p.y, p.size, p.color);
		// Alpha is canvas-global; never let it leak into the next draw.
		painter.set_alpha(1.0);
	}
}

fn draw_links<P: Painter + ?Sized>(field: &ParticleField, painter: &P) {
	let (color, width) = (field.style.link_color, field.style.link_width);
	for (i, j) in field.links() {
		let (a, b) = (&field.particles[i], &field.particles[j]);
		painter.stroke_line((a.x, a.y), (b.x, b.y), color, width);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::particle_field::particles::Particle;
	use crate::components::particle_field::theme::FieldStyle;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Alpha(f64),
		Circle(f64, f64),
		Line((f64, f64), (f64, f64)),
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Painter for Recorder {
		fn clear(&self, _: Bounds) {
			self.0.borrow_mut().push(Op::Clear);
		}
		fn set_alpha(&self, alpha: f64) {
			self.0.borrow_mut().push(Op::Alpha(alpha));
		}
		fn fill_circle(&self, x: f64, y: f64, _: f64, _: Color) {
			self.0.borrow_mut().push(Op::Circle(x, y));
		}
		fn stroke_line(&self, from: (f64, f64), to: (f64, f64), _: Color, _: f64) {
			self.0.borrow_mut().push(Op::Line(from, to));
		}
	}

	fn field(points: &[(f64, f64, f64)]) -> ParticleField {
		let mut rng = SmallRng::seed_from_u64(9);
		let mut field = ParticleField::new(
			FieldStyle::default(),
			Bounds::new(800.0, 600.0),
			0.0,
			&mut rng,
		);
		field.particles = points
			.iter()
			.map(|&(x, y, opacity)| Particle {
				x,
				y,
				speed_x: 0.0,
				speed_y: 0.0,
				size: 2.0,
				color: Color::rgba(121, 24, 191, 0.3),
				opacity,
			})
			.collect();
		field
	}

	#[test]
	fn frame_clears_then_draws_particles_then_links() {
		let recorder = Recorder::default();
		render(&field(&[(0.0, 0.0, 0.2), (100.0, 0.0, 0.4)]), &recorder);

		assert_eq!(
			recorder.0.into_inner(),
			vec![
				Op::Clear,
				Op::Alpha(0.2),
				Op::Circle(0.0, 0.0),
				Op::Alpha(1.0),
				Op::Alpha(0.4),
				Op::Circle(100.0, 0.0),
				Op::Alpha(1.0),
				Op::Line((0.0, 0.0), (100.0, 0.0)),
			]
		);
	}

	#[test]
	fn distant_particles_are_not_linked() {
		let recorder = Recorder::default();
		render(&field(&[(0.0, 0.0, 0.3), (200.0, 0.0, 0.3)]), &recorder);

		let ops = recorder.0.into_inner();
		assert!(!ops.iter().any(|op| matches!(op, Op::Line(..))));
		assert_eq!(ops.last(), Some(&Op::Alpha(1.0)));
	}

	#[test]
	fn empty_field_only_clears() {
		let recorder = Recorder::default();
		render(&field(&[]), &recorder);
		assert_eq!(recorder.0.into_inner(), vec![Op::Clear]);
	}

	#[test]
	fn css_colors() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgba(121, 24, 191, 0.05).to_css(),
			"rgba(121, 24, 191, 0.05)"
		);
	}
}
