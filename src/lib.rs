//! landing-fx: animated particle background and interactive landing page.
//!
//! This crate provides a WASM-based landing page whose content comes from a
//! JSON island in the host document, decorated with a drifting particle
//! canvas, scroll reveals, an FAQ accordion, a pricing switch and the other
//! small behaviours marketing pages expect.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::landing::{PageData, Settings};
pub use components::particle_field::{FieldStyle, ParticleFieldCanvas};

use components::landing::{
	BackToTop, FaqSection, FeaturesSection, Header, HeroSection, Preloader, PricingSection,
	StatsSection, provide_reveal_observer, provide_scroll_position,
};

/// Id of the `<script type="application/json">` element holding [`PageData`].
pub const PAGE_DATA_ID: &str = "page-data";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("landing-fx: logging initialized");
}

/// Parse page data from JSON. Malformed input yields `None`.
pub fn parse_page_data(json: &str) -> Option<PageData> {
	match serde_json::from_str::<PageData>(json) {
		Ok(data) => Some(data),
		Err(e) => {
			warn!("landing-fx: failed to parse page data: {}", e);
			None
		}
	}
}

/// Load page data from the script element with id="page-data".
fn load_page_data() -> Option<PageData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(PAGE_DATA_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let data = parse_page_data(&json_text)?;
	info!(
		"landing-fx: loaded {} features, {} plans, {} faq entries",
		data.features.len(),
		data.plans.len(),
		data.faq.len()
	);
	Some(data)
}

/// Main application component.
/// Loads page data from the DOM and renders every section that has content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PageData {
		settings,
		brand,
		nav,
		hero,
		features,
		stats,
		plans,
		faq,
	} = load_page_data().unwrap_or_default();

	provide_context(settings.clone());
	provide_scroll_position();
	provide_reveal_observer(&settings);

	let particles = settings.particles.enabled.then(|| {
		let style = FieldStyle::default().with_settings(&settings.particles);
		view! { <ParticleFieldCanvas style=style /> }
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=brand.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Preloader />
		{particles}
		<Header brand=brand nav=nav />
		<main class="page">
			{hero.map(|hero| view! { <HeroSection hero=hero /> })}
			{(!features.is_empty()).then(|| view! { <FeaturesSection cards=features /> })}
			{(!stats.is_empty()).then(|| view! { <StatsSection stats=stats /> })}
			{(!plans.is_empty()).then(|| view! { <PricingSection plans=plans /> })}
			{(!faq.is_empty()).then(|| view! { <FaqSection entries=faq /> })}
		</main>
		<BackToTop />
	}
}
