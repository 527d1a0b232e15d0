//! Page sections assembled from the content model.

use leptos::prelude::*;

use super::anchor::AnchorLink;
use super::counter::Counter;
use super::faq::Faq;
use super::pricing::Pricing;
use super::reveal::Reveal;
use super::tilt::TiltCard;
use super::types::{Card, FaqEntry, Hero, Plan, Stat};

/// Reveal stagger between neighbouring cards without an explicit delay.
const STAGGER_MS: u32 = 100;

#[component]
pub fn HeroSection(hero: Hero) -> impl IntoView {
	let cta = hero.cta.map(|cta| {
		view! {
			<AnchorLink href=cta.href class="btn btn-primary">
				{cta.label}
			</AnchorLink>
		}
	});

	view! {
		<section id="hero" class="hero">
			<Reveal class="hero-content">
				<h1 class="hero-title">{hero.title}</h1>
				<p class="hero-subtitle">{hero.subtitle}</p>
				{cta}
			</Reveal>
		</section>
	}
}

#[component]
pub fn FeaturesSection(cards: Vec<Card>) -> impl IntoView {
	let cards = cards
		.into_iter()
		.enumerate()
		.map(|(index, card)| {
			let delay = match card.delay_ms {
				0 => index as u32 * STAGGER_MS,
				ms => ms,
			};
			view! {
				<Reveal delay_ms=delay>
					<TiltCard class="feature-card">
						<div class="feature-icon">{card.icon}</div>
						<h3>{card.title}</h3>
						<p>{card.body}</p>
					</TiltCard>
				</Reveal>
			}
		})
		.collect_view();

	view! {
		<section id="features" class="features">
			<div class="features-grid container">{cards}</div>
		</section>
	}
}

#[component]
pub fn StatsSection(stats: Vec<Stat>) -> impl IntoView {
	let stats = stats
		.into_iter()
		.map(|stat| {
			view! {
				<div class="stat">
					<Counter value=stat.value suffix=stat.suffix />
					<span class="stat-label">{stat.label}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="stats" class="stats">
			<div class="stats-grid container">{stats}</div>
		</section>
	}
}

#[component]
pub fn PricingSection(plans: Vec<Plan>) -> impl IntoView {
	view! {
		<section id="pricing" class="pricing">
			<div class="container">
				<Reveal class="section-header">
					<h2>"Pricing"</h2>
				</Reveal>
				<Pricing plans=plans />
			</div>
		</section>
	}
}

#[component]
pub fn FaqSection(entries: Vec<FaqEntry>) -> impl IntoView {
	view! {
		<section id="faq" class="faq">
			<div class="container">
				<Reveal class="section-header">
					<h2>"Frequently asked questions"</h2>
				</Reveal>
				<Faq entries=entries />
			</div>
		</section>
	}
}
