//! UI components for the landing page.

pub mod landing;
pub mod pulse_field;
