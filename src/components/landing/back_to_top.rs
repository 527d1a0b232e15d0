//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use super::config::Settings;
use super::dom;
use super::scroll::use_scroll_position;

/// Shown once the page is scrolled past the configured offset.
#[component]
pub fn BackToTop() -> impl IntoView {
	let threshold = use_context::<Settings>()
		.unwrap_or_default()
		.back_to_top_threshold;
	let scroll = use_scroll_position();

	view! {
		<button
			id="backToTop"
			class="back-to-top"
			class:visible=move || scroll.past(threshold)
			aria-label="Back to top"
			on:click=move |_| dom::smooth_scroll_to(0.0)
		>
			"↑"
		</button>
	}
}
