//! Page content supplied as JSON in the host document.

use serde::Deserialize;

use super::config::Settings;

/// A navigation or call-to-action link.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
	pub label: String,
	/// Either an in-page anchor (`#pricing`) or any other URL.
	pub href: String,
}

/// Top-of-page headline block.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
	pub title: String,
	#[serde(default)]
	pub subtitle: String,
	pub cta: Option<NavLink>,
}

/// A feature card. Cards reveal on scroll and tilt under the pointer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Card {
	#[serde(default)]
	pub icon: String,
	pub title: String,
	#[serde(default)]
	pub body: String,
	/// Extra wait before this card's reveal transition.
	#[serde(default)]
	pub delay_ms: u32,
}

/// A headline number that counts up when scrolled into view.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
	pub label: String,
	pub value: u64,
	#[serde(default)]
	pub suffix: String,
}

/// A pricing plan with both billing periods.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Plan {
	pub name: String,
	pub monthly: String,
	pub yearly: String,
	#[serde(default)]
	pub features: Vec<String>,
	#[serde(default)]
	pub highlighted: bool,
}

/// One question/answer pair of the FAQ accordion.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FaqEntry {
	pub question: String,
	pub answer: String,
}

/// Everything the page renders. Empty sections are left out entirely.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageData {
	pub settings: Settings,
	pub brand: String,
	pub nav: Vec<NavLink>,
	pub hero: Option<Hero>,
	pub features: Vec<Card>,
	pub stats: Vec<Stat>,
	pub plans: Vec<Plan>,
	pub faq: Vec<FaqEntry>,
}
