//! Tunable thresholds and timings for the page behaviours.
//!
//! Every field has a default, so the `settings` object in the page data may
//! omit any or all of them.

use serde::Deserialize;

/// Page-wide behaviour settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
	/// Scroll offset (px) past which the header gets its `scrolled` state.
	pub header_scroll_threshold: f64,
	/// Scroll offset (px) past which the back-to-top button shows.
	pub back_to_top_threshold: f64,
	/// Wait after the load event before hiding the preloader.
	pub preloader_delay_ms: u32,
	/// Fade time between hiding the preloader and removing it from layout.
	pub preloader_fade_ms: u32,
	/// Hide the preloader after this long even if `load` never fires.
	pub preloader_fallback_ms: u32,
	/// Extra gap (px) left above an anchor target after subtracting the header.
	pub anchor_margin: f64,
	pub counter_duration_ms: u32,
	/// Pointer offset (px) per degree of card rotation.
	pub tilt_divisor: f64,
	pub tilt_perspective: f64,
	/// Upward shift (px) of a tilted card.
	pub tilt_lift: f64,
	/// Visible fraction that triggers a reveal.
	pub reveal_threshold: f64,
	pub reveal_root_margin: String,
	pub particles: ParticleSettings,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			header_scroll_threshold: 60.0,
			back_to_top_threshold: 500.0,
			preloader_delay_ms: 1200,
			preloader_fade_ms: 500,
			preloader_fallback_ms: 3000,
			anchor_margin: 20.0,
			counter_duration_ms: 2000,
			tilt_divisor: 20.0,
			tilt_perspective: 1000.0,
			tilt_lift: 5.0,
			reveal_threshold: 0.1,
			reveal_root_margin: "0px 0px -50px 0px".to_string(),
			particles: ParticleSettings::default(),
		}
	}
}

/// Overrides for the background particle field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleSettings {
	pub enabled: bool,
	pub max_count: usize,
	pub width_per_particle: f64,
	pub link_distance: f64,
}

impl Default for ParticleSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			max_count: 60,
			width_per_particle: 20.0,
			link_distance: 150.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		let settings: Settings = serde_json::from_str("{}").unwrap();
		assert_eq!(settings, Settings::default());
	}

	#[test]
	fn partial_overrides_keep_other_defaults() {
		let settings: Settings = serde_json::from_str(
			r#"{ "back_to_top_threshold": 800, "particles": { "max_count": 24 } }"#,
		)
		.unwrap();
		assert_eq!(settings.back_to_top_threshold, 800.0);
		assert_eq!(settings.header_scroll_threshold, 60.0);
		assert_eq!(settings.particles.max_count, 24);
		assert_eq!(settings.particles.link_distance, 150.0);
		assert!(settings.particles.enabled);
	}
}
