//! pulse-field: a landing page with pulsing particle canvas backgrounds.
//!
//! This crate renders the page shell with Leptos and animates every
//! `.circle-canvas` on it with a grid of softly pulsing particles.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

#[cfg(target_arch = "wasm32")]
use getrandom as _;

use components::landing::PulseSection;
pub use components::pulse_field::{FieldConfig, PageController, ParticleField};
pub use error::{SetupError, SetupResult};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("pulse-field: logging initialized");
}

/// Load field configuration from a script element with id="pulse-config".
/// Expected format: JSON object, every key optional (see [`FieldConfig`]).
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("pulse-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"pulse-field: loaded config, {}x{} grid, seed {:?}",
				config.rows, config.cols, config.seed
			);
			Some(config)
		}
		Err(e) => {
			warn!("pulse-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the page sections, then attaches particle fields to their canvases.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let root_ref = NodeRef::<leptos::html::Main>::new();
	let page: Rc<RefCell<Option<PageController>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(root) = root_ref.get() else {
			return;
		};
		if page.borrow().is_some() {
			return;
		}
		match PageController::attach(&root, &config) {
			Ok(controller) => *page.borrow_mut() = Some(controller),
			Err(e) => error!("pulse-field: page setup failed: {}", e),
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Pulse" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main node_ref=root_ref class="landing">
			<PulseSection id="hero" meteors=true>
				<h1>"Made to glow."</h1>
				<p class="subtitle">"A closer look at what sets it apart."</p>
			</PulseSection>
			<PulseSection id="benefits">
				<h2>"Why it works"</h2>
			</PulseSection>
			<PulseSection id="reviews">
				<h2>"What people say"</h2>
			</PulseSection>
		</main>
	}
}
