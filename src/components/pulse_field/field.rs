//! A set of pulsing particles bound to one canvas.
//!
//! The field owns its particles and the surface it draws to. Each frame it
//! clears the surface, then draws and advances every particle in grid order.

use rand::Rng;

use super::config::FieldConfig;
use super::particle::{Particle, Pulse};
use super::resize::Resizable;
use super::sizing::CanvasSize;
use super::surface::Surface;
use super::theme::PaintStyle;

/// Particles laid out on a grid over one canvas.
pub struct ParticleField<S: Surface> {
	surface: S,
	particles: Vec<Particle>,
	paint: PaintStyle,
}

impl<S: Surface> ParticleField<S> {
	/// Size `surface` to `region`, then place one particle per grid cell.
	///
	/// A grid with zero rows or columns yields an empty field; an oversized
	/// grid falls back to the default one.
	pub fn new<R: Rng>(surface: S, region: CanvasSize, config: &FieldConfig, rng: &mut R) -> Self {
		let (rows, cols) = config.grid();
		let mut particles = Vec::with_capacity(rows * cols);
		for row in 0..rows {
			for col in 0..cols {
				particles.push(Particle::in_cell(row, col, rows, cols, config, rng));
			}
		}

		let mut field = Self {
			surface,
			particles,
			paint: config.paint(),
		};
		field.resize_to(region);
		field
	}

	/// Clear the canvas, then draw and advance each particle.
	///
	/// Drawing happens before the update, so the visible frame trails the
	/// particle state by one tick.
	pub fn render_frame(&mut self) {
		self.surface.clear();
		for p in &mut self.particles {
			p.draw(&mut self.surface, &self.paint);
			p.update();
		}
	}

	/// Particles in grid order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// The surface drawn to.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Paint applied before each particle and after each resize.
	pub fn paint(&self) -> &PaintStyle {
		&self.paint
	}
}

impl<S: Surface> Resizable for ParticleField<S> {
	/// Resize buffer and CSS box, then restore paint state, which the canvas
	/// resets whenever its buffer dimensions are assigned.
	fn resize_to(&mut self, size: CanvasSize) {
		self.surface.set_buffer_size(size);
		self.surface.set_style_size(size);
		self.surface.apply_paint(&self.paint);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::pulse_field::surface::recording::{Call, RecordingSurface};

	fn field(width: f64, height: f64, config: &FieldConfig, seed: u64) -> ParticleField<RecordingSurface> {
		let mut rng = SmallRng::seed_from_u64(seed);
		ParticleField::new(
			RecordingSurface::default(),
			CanvasSize::from_region(width, height),
			config,
			&mut rng,
		)
	}

	#[test]
	fn default_grid_has_one_particle_per_cell() {
		let f = field(800.0, 600.0, &FieldConfig::default(), 3);
		assert_eq!(f.particles().len(), 24);
		for (i, p) in f.particles().iter().enumerate() {
			let (row, col) = (i / 6, i % 6);
			assert!(p.x_ratio() >= col as f64 / 6.0 && p.x_ratio() <= (col + 1) as f64 / 6.0);
			assert!(p.y_ratio() >= row as f64 / 4.0 && p.y_ratio() <= (row + 1) as f64 / 4.0);
		}
	}

	#[test]
	fn overflowing_grid_builds_the_default_field() {
		let config = FieldConfig {
			rows: usize::MAX / 2 + 1,
			cols: 2,
			..FieldConfig::default()
		};
		let f = field(800.0, 600.0, &config, 4);
		assert_eq!(f.particles().len(), 24);
	}

	#[test]
	fn same_seed_same_layout() {
		let config = FieldConfig::default();
		let a = field(800.0, 600.0, &config, 11);
		let b = field(800.0, 600.0, &config, 11);
		assert_eq!(a.particles(), b.particles());
		let c = field(800.0, 600.0, &config, 12);
		assert_ne!(a.particles(), c.particles());
	}

	#[test]
	fn construction_sizes_surface_and_applies_paint() {
		let f = field(800.0, 600.0, &FieldConfig::default(), 0);
		let size = CanvasSize::from_region(800.0, 600.0);
		assert_eq!(
			f.surface().calls,
			vec![Call::BufferSize(size), Call::StyleSize(size), Call::Paint(f.paint().clone())]
		);
	}

	#[test]
	fn empty_grid_renders_only_a_clear() {
		let config = FieldConfig { rows: 0, ..FieldConfig::default() };
		let mut f = field(800.0, 600.0, &config, 0);
		assert!(f.particles().is_empty());
		f.render_frame();
		assert_eq!(f.surface().calls.last(), Some(&Call::Clear));
	}

	#[test]
	fn frame_clears_then_draws_each_particle_before_advancing_it() {
		let mut f = field(800.0, 600.0, &FieldConfig::default(), 5);
		let before: Vec<Particle> = f.particles().to_vec();
		let start = f.surface().calls.len();
		f.render_frame();

		let calls = &f.surface().calls[start..];
		assert_eq!(calls[0], Call::Clear);
		assert_eq!(calls.len(), 1 + 3 * before.len());
		for (i, p) in before.iter().enumerate() {
			let chunk = &calls[1 + 3 * i..4 + 3 * i];
			assert_eq!(chunk[0], Call::Paint(f.paint().clone()));
			assert_eq!(chunk[1], Call::Alpha(p.alpha()));
			assert_eq!(
				chunk[2],
				Call::Circle {
					x: p.x_ratio() * 800.0,
					y: p.y_ratio() * 600.0,
					radius: p.radius(),
				}
			);
		}
		for (old, new) in before.iter().zip(f.particles()) {
			assert!((new.phase() - (old.phase() + old.phase_speed())).abs() < 1e-12);
		}
	}

	#[test]
	fn zero_size_canvas_draws_nothing_but_keeps_pulsing() {
		let mut f = field(0.0, 0.0, &FieldConfig::default(), 8);
		let before: Vec<f64> = f.particles().iter().map(Particle::phase).collect();
		let start = f.surface().calls.len();
		f.render_frame();
		assert_eq!(&f.surface().calls[start..], &[Call::Clear]);
		for (phase, p) in before.iter().zip(f.particles()) {
			assert!(p.phase() > *phase);
		}
	}

	#[test]
	fn resize_keeps_relative_positions() {
		let mut f = field(800.0, 600.0, &FieldConfig::default(), 21);
		let ratios: Vec<(f64, f64)> = f.particles().iter().map(|p| (p.x_ratio(), p.y_ratio())).collect();
		let small = CanvasSize::from_region(400.0, 300.0);
		f.resize_to(small);
		f.resize_to(small);
		let after: Vec<(f64, f64)> = f.particles().iter().map(|p| (p.x_ratio(), p.y_ratio())).collect();
		assert_eq!(ratios, after);
		assert_eq!(f.surface().buffer, small);
		assert_eq!(f.surface().style, small);
	}

	#[test]
	fn centered_particle_tracks_the_canvas_across_resize() {
		let mut f = ParticleField {
			surface: RecordingSurface::default(),
			particles: vec![Particle::new(0.5, 0.5, 3.0, 0.0, 0.01)],
			paint: PaintStyle::default(),
		};
		f.resize_to(CanvasSize::from_region(800.0, 600.0));
		f.render_frame();
		f.resize_to(CanvasSize::from_region(400.0, 300.0));
		f.render_frame();

		let circles = f.surface().circles();
		assert_eq!(circles, vec![(400.0, 300.0, 3.0), (200.0, 150.0, 3.0)]);
	}

	#[test]
	fn resize_reapplies_paint_after_sizing() {
		let mut f = field(800.0, 600.0, &FieldConfig::default(), 2);
		let start = f.surface().calls.len();
		let size = CanvasSize::from_region(1024.0, 512.0);
		f.resize_to(size);
		assert_eq!(
			&f.surface().calls[start..],
			&[Call::BufferSize(size), Call::StyleSize(size), Call::Paint(f.paint().clone())]
		);
	}
}
