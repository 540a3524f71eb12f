//! Errors raised while wiring particle fields into the page.
//!
//! The animation itself cannot fail; only browser setup can.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures attaching to the browser environment.
#[derive(Debug, Error)]
pub enum SetupError {
	/// No global `window` (not running in a browser main thread).
	#[error("no window available")]
	NoWindow,
	/// `getContext("2d")` returned nothing or a non-2D context.
	#[error("canvas has no 2d context")]
	NoContext,
	/// A browser API call threw.
	#[error("{call} failed: {message}")]
	Js {
		/// The API that was called.
		call: &'static str,
		/// Message of the thrown value.
		message: String,
	},
}

impl SetupError {
	/// Wrap a thrown `JsValue`, keeping its message when it is an `Error`.
	pub fn js(call: &'static str, value: JsValue) -> Self {
		let message = match value.dyn_ref::<js_sys::Error>() {
			Some(err) => String::from(err.message()),
			None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
		};
		Self::Js { call, message }
	}
}

/// Result alias for page setup.
pub type SetupResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_failure() {
		assert_eq!(SetupError::NoContext.to_string(), "canvas has no 2d context");
		let err = SetupError::Js {
			call: "requestAnimationFrame",
			message: "denied".into(),
		};
		assert_eq!(err.to_string(), "requestAnimationFrame failed: denied");
	}
}
