//! Small browser queries shared by the page behaviours.
//!
//! Every helper tolerates a missing window/document and falls back to a
//! neutral value instead of failing.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Inner width and height of the browser window.
pub fn viewport_size() -> Option<(f64, f64)> {
	let window = web_sys::window()?;
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Smooth-scroll the window so its top edge lands at `top`.
pub fn smooth_scroll_to(top: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Rendered height of the element with `id`, or 0 when it is absent.
pub fn element_height(id: &str) -> f64 {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.map(|el| el.offset_height() as f64)
		.unwrap_or(0.0)
}

/// Top edge of the element with `id` relative to the viewport.
pub fn element_top(id: &str) -> Option<f64> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(id)?;
	Some(element.get_bounding_client_rect().top())
}

/// Whether the window `load` event has already fired.
pub fn document_loaded() -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.map(|d| d.ready_state() == "complete")
		.unwrap_or(false)
}

/// Seed for per-page randomness.
pub fn entropy_seed() -> u64 {
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let now = js_sys::Date::now() as u64;
	(noise << 32) ^ now
}
