//! Paint configuration for particle fields.
//!
//! Colors are parsed from CSS once and their CSS strings cached, so drawing a
//! frame never formats or allocates.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// The accent orange used across the landing page.
	pub const ACCENT: Color = Color::rgb(0xfc, 0x8a, 0x46);

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`, `#RGB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse(color_str: &str) -> Option<Self> {
		let s = color_str.trim();
		if let Some(hex) = s.strip_prefix('#') {
			if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
				return None;
			}
			return match hex.len() {
				6 => Some(Color::rgb(
					u8::from_str_radix(&hex[0..2], 16).ok()?,
					u8::from_str_radix(&hex[2..4], 16).ok()?,
					u8::from_str_radix(&hex[4..6], 16).ok()?,
				)),
				3 => {
					let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
					Some(Color::rgb(digit(0)?, digit(1)?, digit(2)?))
				}
				_ => None,
			};
		}
		if s.starts_with("rgb") {
			let nums: Vec<&str> = s
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.map(str::trim)
				.collect();
			if nums.len() < 3 {
				return None;
			}
			let r = nums[0].parse().ok()?;
			let g = nums[1].parse().ok()?;
			let b = nums[2].parse().ok()?;
			let a = match nums.get(3) {
				Some(a) => a.parse::<f64>().ok()?.clamp(0.0, 1.0),
				None => 1.0,
			};
			return Some(Color::rgba(r, g, b, a));
		}
		None
	}

	/// CSS form: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Paint state a particle field writes before drawing: accent fill plus a
/// soft glow (canvas shadow) in the same color.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintStyle {
	/// Fill and glow color.
	pub fill: Color,
	/// Glow (shadow) blur in pixels.
	pub glow_blur: f64,
	fill_css: String,
	glow_css: String,
}

impl PaintStyle {
	/// Paint with `fill` and a glow of the same color.
	pub fn new(fill: Color, glow_blur: f64) -> Self {
		let css = fill.to_css();
		Self {
			fill,
			glow_blur: glow_blur.max(0.0),
			glow_css: css.clone(),
			fill_css: css,
		}
	}

	/// Cached CSS fill color.
	pub fn fill_css(&self) -> &str {
		&self.fill_css
	}

	/// Cached CSS glow color.
	pub fn glow_css(&self) -> &str {
		&self.glow_css
	}
}

impl Default for PaintStyle {
	fn default() -> Self {
		Self::new(Color::ACCENT, 10.0)
	}
}
