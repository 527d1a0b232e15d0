//! Leptos component wrapping the particle field canvas.
//!
//! The component sizes a full-viewport canvas, seeds the particles once and
//! drives them from a [`FrameLoop`]. A window `resize` listener keeps the
//! canvas matched to the viewport. Both are released when the component is
//! cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame_loop::{FrameLoop, Tick};
use super::particles::{Bounds, ParticleField};
use super::render;
use super::theme::FieldStyle;
use crate::components::landing::dom;

/// Particle field state plus the randomness used to respawn particles.
struct FieldContext {
	field: ParticleField,
	rng: SmallRng,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders a decorative field of drifting particles behind the page.
///
/// Without a 2D context the canvas stays blank and nothing is scheduled.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] style: Option<FieldStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let style = style.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			debug!("particle field: no 2d context, skipping");
			return;
		};
		let Some((w, h)) = dom::viewport_size() else {
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut rng = SmallRng::seed_from_u64(dom::entropy_seed());
		let field = ParticleField::new(style.clone(), Bounds::new(w, h), w, &mut rng);
		info!("particle field: {} particles", field.particles.len());

		let context = Rc::new(RefCell::new(FieldContext { field, rng }));

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		let resize = window_event_listener(ev::resize, move |_| {
			let Some((nw, nh)) = dom::viewport_size() else {
				return;
			};
			// Assigning the size also wipes whatever was drawn.
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			context_resize.borrow_mut().field.resize(Bounds::new(nw, nh));
		});

		let frames = FrameLoop::start(move |_| {
			let mut guard = context.borrow_mut();
			let FieldContext { field, rng } = &mut *guard;
			field.step(rng);
			render::render(field, &ctx);
			Tick::Continue
		});

		on_cleanup(move || {
			frames.cancel();
			resize.remove();
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particles-canvas"
			class="particles-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}
