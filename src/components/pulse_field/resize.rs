//! Keeps canvases sized to their sections as the viewport changes.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::sizing::{CanvasSize, LayoutRegion};
use super::surface::Surface;

/// Something whose canvas follows the size of a layout region.
pub trait Resizable {
	/// Match the canvas to `size`.
	fn resize_to(&mut self, size: CanvasSize);
}

/// A canvas that is kept sized but carries no animation.
pub struct PlainCanvas<S: Surface> {
	surface: S,
}

impl<S: Surface> PlainCanvas<S> {
	/// Wrap `surface`.
	pub fn new(surface: S) -> Self {
		Self { surface }
	}

	/// The wrapped surface.
	pub fn surface(&self) -> &S {
		&self.surface
	}
}

impl<S: Surface> Resizable for PlainCanvas<S> {
	fn resize_to(&mut self, size: CanvasSize) {
		self.surface.set_buffer_size(size);
		self.surface.set_style_size(size);
	}
}

struct Tracked {
	region: Box<dyn LayoutRegion>,
	target: Rc<RefCell<dyn Resizable>>,
}

/// Resynchronizes every tracked canvas with its region on viewport resize.
///
/// Region sizes are always re-measured; the resize event itself carries
/// nothing the coordinator trusts.
#[derive(Default)]
pub struct ResizeCoordinator {
	tracked: Vec<Tracked>,
}

impl ResizeCoordinator {
	/// An empty coordinator.
	pub fn new() -> Self {
		Self::default()
	}

	/// Keep `target` sized to `region` from now on.
	pub fn track(&mut self, region: Box<dyn LayoutRegion>, target: Rc<RefCell<dyn Resizable>>) {
		self.tracked.push(Tracked { region, target });
	}

	/// Number of canvases kept in sync.
	pub fn tracked_count(&self) -> usize {
		self.tracked.len()
	}

	/// Measure each region and resize its canvas to match.
	pub fn on_resize(&self) {
		for (i, t) in self.tracked.iter().enumerate() {
			let size = t.region.measure();
			match t.target.try_borrow_mut() {
				Ok(mut target) => target.resize_to(size),
				Err(_) => debug!("pulse-field: canvas {} busy, skipping resize", i),
			}
		}
		debug!("pulse-field: resized {} canvases", self.tracked.len());
	}
}
