//! Frame scheduling via `requestAnimationFrame`.
//!
//! A [`FrameLoop`] re-requests itself from inside its own callback, so at
//! most one frame is ever pending per loop. There is no stop: the loop runs
//! until the page goes away.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::{SetupError, SetupResult};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running animation loop.
pub struct FrameLoop {
	_callback: FrameCallback,
}

impl FrameLoop {
	/// Run `frame` once per display refresh, starting with the next one.
	pub fn start<F>(window: &Window, mut frame: F) -> SetupResult<Self>
	where
		F: FnMut() + 'static,
	{
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let inner = callback.clone();
		*callback.borrow_mut() = Some(Closure::new(move || {
			frame();
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *inner.borrow() {
				if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					warn!("pulse-field: frame loop stopped: {}", SetupError::js("requestAnimationFrame", e));
				}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.map_err(|e| SetupError::js("requestAnimationFrame", e))?;
		}

		Ok(Self { _callback: callback })
	}
}
