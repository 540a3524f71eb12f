//! Per-page wiring of particle fields.
//!
//! [`PageController`] finds the canvases under a root element, builds a
//! [`ParticleField`] for each `.circle-canvas`, starts its frame loop, and
//! keeps every canvas (including decorative `.meteor-canvas` ones) sized to
//! its section through one window `resize` listener.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::resize::{PlainCanvas, Resizable, ResizeCoordinator};
use super::scheduler::FrameLoop;
use super::sizing::{LayoutRegion, SectionRegion};
use super::surface::CanvasSurface;
use crate::error::{SetupError, SetupResult};

/// Selector for canvases that get a pulsing particle field.
pub const FIELD_SELECTOR: &str = ".circle-canvas";
/// Selector for canvases that are only kept sized.
pub const PLAIN_SELECTOR: &str = ".meteor-canvas";

/// Page-session state: fields, their loops, and the resize listener.
///
/// Created once after mount and kept for the life of the page.
pub struct PageController {
	_fields: Vec<Rc<RefCell<ParticleField<CanvasSurface>>>>,
	_loops: Vec<FrameLoop>,
	_coordinator: Rc<ResizeCoordinator>,
	_on_resize: Closure<dyn FnMut()>,
}

impl PageController {
	/// Attach to every matching canvas under `root`.
	///
	/// A canvas that cannot be set up is logged and skipped; only failures
	/// affecting the whole page are returned.
	pub fn attach(root: &Element, config: &FieldConfig) -> SetupResult<Self> {
		let window: Window = web_sys::window().ok_or(SetupError::NoWindow)?;
		let mut coordinator = ResizeCoordinator::new();
		let mut fields = Vec::new();
		let mut loops = Vec::new();

		for (i, canvas) in canvases(root, FIELD_SELECTOR)?.into_iter().enumerate() {
			let Some(region) = SectionRegion::containing(&canvas) else {
				warn!("pulse-field: field canvas {} is detached, skipping", i);
				continue;
			};
			let ctx = match context_2d(&canvas) {
				Ok(ctx) => ctx,
				Err(e) => {
					warn!("pulse-field: field canvas {} skipped: {}", i, e);
					continue;
				}
			};

			let mut rng = match config.seed {
				Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(i as u64)),
				None => SmallRng::from_entropy(),
			};
			let field = Rc::new(RefCell::new(ParticleField::new(
				CanvasSurface::new(canvas, ctx),
				region.measure(),
				config,
				&mut rng,
			)));

			let frame_field = field.clone();
			let frame_loop = FrameLoop::start(&window, move || {
				if let Ok(mut f) = frame_field.try_borrow_mut() {
					f.render_frame();
				}
			});
			match frame_loop {
				Ok(l) => loops.push(l),
				Err(e) => {
					warn!("pulse-field: field canvas {} not animated: {}", i, e);
					continue;
				}
			}

			coordinator.track(Box::new(region), field.clone());
			fields.push(field);
		}

		let mut plain = 0;
		for (i, canvas) in canvases(root, PLAIN_SELECTOR)?.into_iter().enumerate() {
			let Some(region) = SectionRegion::containing(&canvas) else {
				warn!("pulse-field: plain canvas {} is detached, skipping", i);
				continue;
			};
			let ctx = match context_2d(&canvas) {
				Ok(ctx) => ctx,
				Err(e) => {
					warn!("pulse-field: plain canvas {} skipped: {}", i, e);
					continue;
				}
			};
			let mut target = PlainCanvas::new(CanvasSurface::new(canvas, ctx));
			target.resize_to(region.measure());
			coordinator.track(Box::new(region), Rc::new(RefCell::new(target)));
			plain += 1;
		}

		let coordinator = Rc::new(coordinator);
		let resize_coordinator = coordinator.clone();
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || resize_coordinator.on_resize());
		window
			.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
			.map_err(|e| SetupError::js("addEventListener(resize)", e))?;

		info!(
			"pulse-field: {} animated fields, {} plain canvases, {} particles each, {} canvases tracked",
			fields.len(),
			plain,
			config.particle_count(),
			coordinator.tracked_count()
		);

		Ok(Self {
			_fields: fields,
			_loops: loops,
			_coordinator: coordinator,
			_on_resize: on_resize,
		})
	}
}

fn canvases(root: &Element, selector: &str) -> SetupResult<Vec<HtmlCanvasElement>> {
	let list = root
		.query_selector_all(selector)
		.map_err(|e| SetupError::js("querySelectorAll", e))?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlCanvasElement>().ok())
		.collect())
}

fn context_2d(canvas: &HtmlCanvasElement) -> SetupResult<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(|e| SetupError::js("getContext", e))?
		.ok_or(SetupError::NoContext)?
		.dyn_into()
		.map_err(|_| SetupError::NoContext)
}
