//! The drawing surface a particle field paints onto.

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::sizing::CanvasSize;
use super::theme::PaintStyle;

/// Canvas operations used by the particle renderer.
///
/// Paint state (fill, glow, global alpha) is a single mutable register on the
/// surface; every draw sets what it needs instead of assuming it persists.
pub trait Surface {
	/// Current pixel-buffer size.
	fn size(&self) -> CanvasSize;
	/// Assign the pixel-buffer dimensions. Clears pixels and resets paint state.
	fn set_buffer_size(&mut self, size: CanvasSize);
	/// Assign the displayed (CSS) dimensions.
	fn set_style_size(&mut self, size: CanvasSize);
	/// Clear the whole pixel buffer.
	fn clear(&mut self);
	/// Set fill color and glow (shadow color and blur).
	fn apply_paint(&mut self, paint: &PaintStyle);
	/// Set the opacity of subsequent draws.
	fn set_global_alpha(&mut self, alpha: f64);
	/// Fill a circle centered at `(x, y)` with the current paint.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// A `<canvas>` element with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas` and its 2D context.
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> CanvasSize {
		CanvasSize::from_region(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn set_buffer_size(&mut self, size: CanvasSize) {
		let (w, h) = size.buffer_px();
		self.canvas.set_width(w);
		self.canvas.set_height(h);
	}

	fn set_style_size(&mut self, size: CanvasSize) {
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", size.width));
		let _ = style.set_property("height", &format!("{}px", size.height));
	}

	fn clear(&mut self) {
		let size = self.size();
		self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn apply_paint(&mut self, paint: &PaintStyle) {
		self.ctx.set_fill_style_str(paint.fill_css());
		self.ctx.set_shadow_color(paint.glow_css());
		self.ctx.set_shadow_blur(paint.glow_blur);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}
}

/// Surface double that records every call.
#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Call {
		BufferSize(CanvasSize),
		StyleSize(CanvasSize),
		Clear,
		Paint(PaintStyle),
		Alpha(f64),
		Circle { x: f64, y: f64, radius: f64 },
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub buffer: CanvasSize,
		pub style: CanvasSize,
		pub calls: Vec<Call>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> Vec<(f64, f64, f64)> {
			self.calls
				.iter()
				.filter_map(|c| match *c {
					Call::Circle { x, y, radius } => Some((x, y, radius)),
					_ => None,
				})
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn size(&self) -> CanvasSize {
			self.buffer
		}

		fn set_buffer_size(&mut self, size: CanvasSize) {
			self.buffer = size;
			self.calls.push(Call::BufferSize(size));
		}

		fn set_style_size(&mut self, size: CanvasSize) {
			self.style = size;
			self.calls.push(Call::StyleSize(size));
		}

		fn clear(&mut self) {
			self.calls.push(Call::Clear);
		}

		fn apply_paint(&mut self, paint: &PaintStyle) {
			self.calls.push(Call::Paint(paint.clone()));
		}

		fn set_global_alpha(&mut self, alpha: f64) {
			self.calls.push(Call::Alpha(alpha));
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
			self.calls.push(Call::Circle { x, y, radius });
		}
	}
}
