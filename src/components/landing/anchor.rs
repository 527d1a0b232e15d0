//! In-page links that glide to their target instead of jumping.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::config::Settings;
use super::dom;
use super::header::HEADER_ID;

/// The element id an in-page `href` points at, if any.
pub fn anchor_id(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just below the header.
///
/// `target_top` is the target's viewport-relative top edge.
pub fn scroll_target(target_top: f64, scroll_y: f64, header_height: f64, margin: f64) -> f64 {
	target_top + scroll_y - header_height - margin
}

/// An `<a>` that smooth-scrolls to an in-page target.
///
/// Links to anything other than an element on this page keep the browser's
/// default behaviour. `on_follow` runs on every click either way.
#[component]
pub fn AnchorLink(
	#[prop(into)] href: String,
	#[prop(optional, into)] class: String,
	#[prop(optional)] on_follow: Option<Callback<()>>,
	children: Children,
) -> impl IntoView {
	let margin = use_context::<Settings>().unwrap_or_default().anchor_margin;
	let target = href.clone();

	let on_click = move |ev: MouseEvent| {
		if let Some(top) = anchor_id(&target).and_then(dom::element_top) {
			ev.prevent_default();
			let header = dom::element_height(HEADER_ID);
			dom::smooth_scroll_to(scroll_target(top, dom::scroll_y(), header, margin));
		}
		if let Some(follow) = on_follow {
			follow.run(());
		}
	};

	view! {
		<a href=href class=class on:click=on_click>
			{children()}
		</a>
	}
}
