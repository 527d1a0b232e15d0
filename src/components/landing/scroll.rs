//! Window scroll offset shared by every scroll-dependent behaviour.
//!
//! One listener feeds a signal; the header and the back-to-top button derive
//! their state from it instead of each subscribing to `scroll`.

use leptos::ev;
use leptos::prelude::*;

use super::dom;

/// Latest vertical scroll offset, provided through context.
#[derive(Clone, Copy, Debug)]
pub struct ScrollPosition(pub ReadSignal<f64>);

impl ScrollPosition {
	/// Whether the page is scrolled strictly beyond `threshold`.
	pub fn past(self, threshold: f64) -> bool {
		past(self.0.get(), threshold)
	}
}

pub fn past(scroll_y: f64, threshold: f64) -> bool {
	scroll_y > threshold
}

/// Start tracking the window scroll offset and provide it as context.
pub fn provide_scroll_position() -> ScrollPosition {
	let (scroll_y, set_scroll_y) = signal(dom::scroll_y());
	let listener = window_event_listener(ev::scroll, move |_| set_scroll_y.set(dom::scroll_y()));
	on_cleanup(move || listener.remove());

	let position = ScrollPosition(scroll_y);
	provide_context(position);
	position
}

/// The shared scroll position, or a constant zero when none was provided.
pub fn use_scroll_position() -> ScrollPosition {
	use_context::<ScrollPosition>().unwrap_or_else(|| ScrollPosition(signal(0.0).0))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn threshold_is_exclusive() {
		assert!(!past(0.0, 60.0));
		assert!(!past(60.0, 60.0));
		assert!(past(60.5, 60.0));
		assert!(past(501.0, 500.0));
		assert!(!past(500.0, 500.0));
	}
}
