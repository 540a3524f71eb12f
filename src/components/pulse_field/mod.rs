//! Pulsing particle backgrounds for canvas elements.
//!
//! Each `.circle-canvas` on the page gets a grid of softly pulsing particles:
//! - Particles sit at positions relative to the canvas, so layouts survive resizes
//! - Opacity follows a per-particle sine phase, advanced once per frame
//! - Frames are driven by `requestAnimationFrame`, one pending frame per canvas
//! - Canvases follow their containing section through a single resize listener
//!
//! # Example
//!
//! ```ignore
//! use pulse_field::components::pulse_field::{FieldConfig, PageController};
//!
//! let root = document.body().unwrap();
//! let page = PageController::attach(&root, &FieldConfig::default())?;
//! ```

mod config;
mod field;
mod page;
mod particle;
mod resize;
mod scheduler;
pub mod sizing;
pub mod surface;
pub mod theme;

pub use config::{FieldConfig, Range};
pub use field::ParticleField;
pub use page::{FIELD_SELECTOR, PLAIN_SELECTOR, PageController};
pub use particle::{Particle, Pulse};
pub use resize::{PlainCanvas, Resizable, ResizeCoordinator};
pub use scheduler::FrameLoop;
pub use theme::{Color, PaintStyle};
