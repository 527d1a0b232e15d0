//! Fixed page header with scroll styling and the mobile navigation menu.

use leptos::prelude::*;

use super::anchor::AnchorLink;
use super::config::Settings;
use super::scroll::use_scroll_position;
use super::types::NavLink;

/// DOM id of the header; anchor scrolling measures it for its offset.
pub const HEADER_ID: &str = "header";

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	pub open: bool,
}

impl MenuState {
	pub fn toggled(self) -> Self {
		Self { open: !self.open }
	}

	pub fn closed(self) -> Self {
		Self { open: false }
	}
}

/// Site header: brand, navigation links and the hamburger toggle.
///
/// Gains the `scrolled` class past the configured scroll offset. Following
/// any navigation link closes the mobile menu.
#[component]
pub fn Header(#[prop(into)] brand: String, nav: Vec<NavLink>) -> impl IntoView {
	let threshold = use_context::<Settings>()
		.unwrap_or_default()
		.header_scroll_threshold;
	let scroll = use_scroll_position();
	let (menu, set_menu) = signal(MenuState::default());

	let close_menu = Callback::new(move |_: ()| set_menu.update(|m| *m = m.closed()));
	let links = nav
		.into_iter()
		.map(|link| {
			view! {
				<li>
					<AnchorLink href=link.href class="nav-link" on_follow=close_menu>
						{link.label}
					</AnchorLink>
				</li>
			}
		})
		.collect_view();

	view! {
		<header id=HEADER_ID class="header" class:scrolled=move || scroll.past(threshold)>
			<nav class="nav container">
				<a href="#" class="logo">{brand}</a>
				<ul id="navLinks" class="nav-links" class:active=move || menu.get().open>
					{links}
				</ul>
				<button
					id="hamburger"
					class="hamburger"
					class:active=move || menu.get().open
					aria-label="Toggle navigation"
					aria-expanded=move || menu.get().open.to_string()
					on:click=move |_| set_menu.update(|m| *m = m.toggled())
				>
					<span></span>
					<span></span>
					<span></span>
				</button>
			</nav>
		</header>
	}
}
