//! Softly pulsing particles.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::FieldConfig;
use super::surface::Surface;
use super::theme::PaintStyle;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Per-frame behavior of something drawn in a particle field.
pub trait Pulse {
	/// Advance one frame.
	fn update(&mut self);
	/// Draw at the current state. Writes fill, glow and global alpha.
	fn draw(&self, surface: &mut dyn Surface, paint: &PaintStyle);
}

/// A circle at a fixed relative position whose opacity follows a sine wave.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	x_ratio: f64,
	y_ratio: f64,
	radius: f64,
	phase: f64,
	phase_speed: f64,
	alpha: f64,
}

impl Particle {
	/// Build a particle directly from its parts.
	pub fn new(x_ratio: f64, y_ratio: f64, radius: f64, phase: f64, phase_speed: f64) -> Self {
		Self {
			x_ratio: unit_ratio(x_ratio),
			y_ratio: unit_ratio(y_ratio),
			radius,
			phase,
			phase_speed,
			alpha: alpha_at(phase),
		}
	}

	/// Place a particle at a random point inside cell `(row, col)` of a
	/// `rows x cols` grid laid over the canvas.
	pub fn in_cell<R: Rng>(
		row: usize,
		col: usize,
		rows: usize,
		cols: usize,
		config: &FieldConfig,
		rng: &mut R,
	) -> Self {
		let (rows, cols) = (rows.max(1) as f64, cols.max(1) as f64);
		let x_ratio = (rng.gen_range(0.0..1.0) + col as f64) / cols;
		let y_ratio = (rng.gen_range(0.0..1.0) + row as f64) / rows;
		let radius = config.radius.lerp(rng.gen_range(0.0..1.0));
		let phase = rng.gen_range(0.0..TAU);
		let phase_speed = config.phase_speed.lerp(rng.gen_range(0.0..1.0));

		Self::new(x_ratio, y_ratio, radius, phase, phase_speed)
	}

	/// Horizontal position as a fraction of canvas width.
	pub fn x_ratio(&self) -> f64 {
		self.x_ratio
	}

	/// Vertical position as a fraction of canvas height.
	pub fn y_ratio(&self) -> f64 {
		self.y_ratio
	}

	/// Radius in pixels.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Current phase angle, in radians.
	pub fn phase(&self) -> f64 {
		self.phase
	}

	/// Phase advance per frame, in radians.
	pub fn phase_speed(&self) -> f64 {
		self.phase_speed
	}

	/// Current opacity in `[0, 1]`.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}
}

impl Pulse for Particle {
	fn update(&mut self) {
		self.phase += self.phase_speed;
		self.alpha = alpha_at(self.phase);
	}

	fn draw(&self, surface: &mut dyn Surface, paint: &PaintStyle) {
		let size = surface.size();
		if !size.is_drawable() || !self.radius.is_finite() || self.radius <= 0.0 {
			return;
		}
		let (x, y) = size.to_absolute(self.x_ratio, self.y_ratio);
		surface.apply_paint(paint);
		surface.set_global_alpha(self.alpha);
		surface.fill_circle(x, y, self.radius);
	}
}

/// Opacity for a phase angle: `(sin + 1) / 2`, held to `[0, 1]`.
fn alpha_at(phase: f64) -> f64 {
	let alpha = (phase.sin() + 1.0) / 2.0;
	if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) }
}

/// Keep a ratio in `[0, 1)`; rounding in the cell arithmetic can land on 1.0.
fn unit_ratio(v: f64) -> f64 {
	if v.is_finite() { v.clamp(0.0, BELOW_ONE) } else { 0.0 }
}
