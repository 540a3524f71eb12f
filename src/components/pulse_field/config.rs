//! Particle field configuration, deserialized from the page.

use serde::Deserialize;

use super::theme::{Color, PaintStyle};

/// An inclusive-exclusive `[min, max)` sampling range.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Range {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Range {
	/// Range from `min` to `max`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Map a unit sample `u` in `[0, 1)` into the range.
	pub fn lerp(&self, u: f64) -> f64 {
		self.min + u * (self.max - self.min)
	}

	/// Whether `v` can be sampled from this range.
	pub fn contains(&self, v: f64) -> bool {
		v >= self.min && (v < self.max || (self.min == self.max && v == self.min))
	}

	/// Swap inverted bounds; fall back to `default` for negative or non-finite bounds.
	fn normalized(self, default: Range) -> Range {
		if !(self.min.is_finite() && self.max.is_finite()) || self.min < 0.0 || self.max < 0.0 {
			return default;
		}
		if self.min > self.max {
			Range::new(self.max, self.min)
		} else {
			self
		}
	}
}

/// Configuration shared by every particle field on the page.
///
/// Every field is optional in the JSON; missing values take the defaults below.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Grid rows; one particle per cell.
	pub rows: usize,
	/// Grid columns.
	pub cols: usize,
	/// Particle radius in pixels.
	pub radius: Range,
	/// Phase advance per frame, in radians.
	pub phase_speed: Range,
	/// CSS fill color, also used for the glow.
	pub color: String,
	/// Glow (shadow) blur in pixels.
	pub glow_blur: f64,
	/// Fixed RNG seed. Unset means a fresh layout on every load.
	pub seed: Option<u64>,
}

impl FieldConfig {
	/// Default particle radius range, in pixels.
	pub const DEFAULT_RADIUS: Range = Range::new(2.0, 4.0);
	/// Default phase advance range, in radians per frame.
	pub const DEFAULT_PHASE_SPEED: Range = Range::new(0.005, 0.055);
	/// Default glow blur, in pixels.
	pub const DEFAULT_GLOW_BLUR: f64 = 10.0;
	/// Largest grid (rows x cols) a single field will build.
	pub const MAX_PARTICLES: usize = 1024;

	/// Grid dimensions, or the 4x6 default when `rows * cols` overflows or
	/// exceeds [`Self::MAX_PARTICLES`].
	pub fn grid(&self) -> (usize, usize) {
		match self.rows.checked_mul(self.cols) {
			Some(n) if n <= Self::MAX_PARTICLES => (self.rows, self.cols),
			_ => {
				let d = FieldConfig::default();
				(d.rows, d.cols)
			}
		}
	}

	/// Number of particles a field built from this config holds.
	pub fn particle_count(&self) -> usize {
		let (rows, cols) = self.grid();
		rows * cols
	}

	/// Repair out-of-range values so sampling never panics or yields NaN.
	pub fn normalized(mut self) -> Self {
		(self.rows, self.cols) = self.grid();
		self.radius = self.radius.normalized(Self::DEFAULT_RADIUS);
		self.phase_speed = self.phase_speed.normalized(Self::DEFAULT_PHASE_SPEED);
		if !self.glow_blur.is_finite() || self.glow_blur < 0.0 {
			self.glow_blur = Self::DEFAULT_GLOW_BLUR;
		}
		self
	}

	/// Paint derived from `color` and `glow_blur`. Unparseable colors use the accent.
	pub fn paint(&self) -> PaintStyle {
		let color = Color::parse(&self.color).unwrap_or_else(|| {
			log::warn!("pulse-field: unrecognized color {:?}, using accent", self.color);
			Color::ACCENT
		});
		PaintStyle::new(color, self.glow_blur)
	}

	/// Parse from JSON, normalizing the result.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<FieldConfig>(json).map(FieldConfig::normalized)
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			rows: 4,
			cols: 6,
			radius: Self::DEFAULT_RADIUS,
			phase_speed: Self::DEFAULT_PHASE_SPEED,
			color: Color::ACCENT.to_css(),
			glow_blur: Self::DEFAULT_GLOW_BLUR,
			seed: None,
		}
	}
}
