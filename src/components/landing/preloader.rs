//! Full-screen preloader that fades out once the page has loaded.
//!
//! Hiding is triggered by the window `load` event (plus a short delay) or by
//! a fallback timeout, whichever comes first. The phase only ever moves
//! forward, so the second trigger is a no-op.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use super::config::Settings;
use super::dom;

/// Lifecycle of the preloader overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
	/// Covering the page.
	#[default]
	Loading,
	/// Fading out; still occupies layout.
	Hidden,
	/// Gone from layout.
	Removed,
}

impl PreloaderPhase {
	/// `Loading -> Hidden`; any later phase refuses.
	pub fn hide(self) -> Option<Self> {
		match self {
			Self::Loading => Some(Self::Hidden),
			_ => None,
		}
	}

	/// `Hidden -> Removed`; any other phase refuses.
	pub fn remove(self) -> Option<Self> {
		match self {
			Self::Hidden => Some(Self::Removed),
			_ => None,
		}
	}

	pub fn is_hidden(self) -> bool {
		self != Self::Loading
	}
}

/// Preloader overlay driven by the load event and a fallback timer.
#[component]
pub fn Preloader() -> impl IntoView {
	let settings = use_context::<Settings>().unwrap_or_default();
	let fade = Duration::from_millis(settings.preloader_fade_ms.into());
	let delay = Duration::from_millis(settings.preloader_delay_ms.into());
	let fallback = Duration::from_millis(settings.preloader_fallback_ms.into());

	let (phase, set_phase) = signal(PreloaderPhase::default());

	let hide = move || {
		let Some(next) = phase.get_untracked().hide() else {
			return;
		};
		set_phase.set(next);
		set_timeout(
			move || {
				if let Some(next) = phase.get_untracked().remove() {
					set_phase.set(next);
				}
			},
			fade,
		);
	};

	if dom::document_loaded() {
		set_timeout(hide, delay);
	} else {
		let load = window_event_listener(ev::load, move |_| set_timeout(hide, delay));
		on_cleanup(move || load.remove());
	}
	set_timeout(hide, fallback);

	let display = move || match phase.get() {
		PreloaderPhase::Removed => "none",
		_ => "flex",
	};

	view! {
		<div
			id="preloader"
			class="preloader"
			class:hidden=move || phase.get().is_hidden()
			style:display=display
		>
			<div class="preloader-spinner"></div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn phases_only_move_forward() {
		let phase = PreloaderPhase::Loading;
		let hidden = phase.hide().unwrap();
		assert_eq!(hidden, PreloaderPhase::Hidden);
		assert_eq!(hidden.remove(), Some(PreloaderPhase::Removed));

		assert_eq!(PreloaderPhase::Loading.remove(), None);
		assert_eq!(PreloaderPhase::Removed.hide(), None);
		assert_eq!(PreloaderPhase::Removed.remove(), None);
	}

	#[test]
	fn second_trigger_is_ignored() {
		// Load path fires first, then the fallback timer.
		let mut phase = PreloaderPhase::Loading;
		let mut transitions = 0;
		for _trigger in ["load", "fallback"] {
			if let Some(next) = phase.hide() {
				phase = next;
				transitions += 1;
			}
		}
		assert_eq!(transitions, 1);
		assert_eq!(phase, PreloaderPhase::Hidden);

		// A late trigger after removal does not resurrect the overlay.
		phase = phase.remove().unwrap();
		assert_eq!(phase.hide(), None);
		assert!(phase.is_hidden());
	}
}
