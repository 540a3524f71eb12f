//! Landing page sections that host the particle canvases.

use leptos::prelude::*;

/// A full-width page section with a pulsing particle background.
///
/// The canvases are plain markup; [`super::pulse_field::PageController`]
/// discovers and animates them after mount.
#[component]
pub fn PulseSection(
	#[prop(into)] id: String,
	#[prop(default = false)] meteors: bool,
	children: Children,
) -> impl IntoView {
	view! {
		<section id=id class="pulse-section" style="position: relative; overflow: hidden;">
			<canvas class="circle-canvas" style="position: absolute; inset: 0; pointer-events: none;" />
			{meteors.then(|| view! {
				<canvas class="meteor-canvas" style="position: absolute; inset: 0; pointer-events: none;" />
			})}
			<div class="section-content" style="position: relative;">{children()}</div>
		</section>
	}
}
