//! Canvas sizing derived from the containing layout region.
//!
//! A canvas is always sized to the section that contains it. The layout query
//! sits behind [`LayoutRegion`] so the sizing rules can be exercised without a
//! browser.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Pixel dimensions of a canvas buffer (and its matching CSS box).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl CanvasSize {
	/// Build a size from raw layout measurements.
	///
	/// Canvas buffers hold whole pixels, so values are floored. Negative and
	/// non-finite measurements collapse to zero.
	pub fn from_region(width: f64, height: f64) -> Self {
		Self {
			width: sanitize(width),
			height: sanitize(height),
		}
	}

	/// Whether anything drawn at this size could be visible.
	pub fn is_drawable(&self) -> bool {
		self.width > 0.0 && self.height > 0.0
	}

	/// Buffer dimensions as the `u32` pair the canvas element expects.
	pub fn buffer_px(&self) -> (u32, u32) {
		(self.width as u32, self.height as u32)
	}

	/// Map a relative position onto this size.
	pub fn to_absolute(&self, x_ratio: f64, y_ratio: f64) -> (f64, f64) {
		(x_ratio * self.width, y_ratio * self.height)
	}
}

fn sanitize(v: f64) -> f64 {
	if v.is_finite() && v > 0.0 { v.floor() } else { 0.0 }
}

/// Read-only query for the current rendered size of a layout region.
pub trait LayoutRegion {
	/// Current rendered size of the region.
	fn measure(&self) -> CanvasSize;
}

/// The region a canvas fills: its nearest `section` ancestor, or its parent.
pub struct SectionRegion {
	element: HtmlElement,
}

impl SectionRegion {
	/// Find the region for `canvas`. Returns `None` for a detached canvas.
	pub fn containing(canvas: &Element) -> Option<Self> {
		let section = canvas.closest("section").ok().flatten();
		let element = section.or_else(|| canvas.parent_element())?;
		let element: HtmlElement = element.dyn_into().ok()?;
		Some(Self { element })
	}
}

impl LayoutRegion for SectionRegion {
	fn measure(&self) -> CanvasSize {
		CanvasSize::from_region(
			self.element.offset_width() as f64,
			self.element.offset_height() as f64,
		)
	}
}
