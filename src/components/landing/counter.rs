//! Stat counters that tick up from zero when scrolled into view.

use std::time::Duration;

use leptos::prelude::*;

use super::config::Settings;
use super::reveal::on_reveal;
use crate::components::particle_field::{FrameLoop, Tick};

/// One sampled frame of a counter animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
	pub value: u64,
	pub done: bool,
}

/// Linear count from zero to `target` over a fixed duration.
///
/// The clock starts at the first sampled timestamp, and once the target is
/// reached every later sample stays there.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
	target: u64,
	duration_ms: f64,
	start: Option<f64>,
}

impl CounterAnimation {
	pub fn new(target: u64, duration_ms: f64) -> Self {
		Self {
			target,
			duration_ms,
			start: None,
		}
	}

	/// Displayed value at timestamp `now` (milliseconds).
	pub fn sample(&mut self, now: f64) -> CounterFrame {
		let start = *self.start.get_or_insert(now);
		let progress = if self.duration_ms > 0.0 {
			((now - start) / self.duration_ms).clamp(0.0, 1.0)
		} else {
			1.0
		};
		CounterFrame {
			value: (progress * self.target as f64).floor() as u64,
			done: progress >= 1.0,
		}
	}
}

/// A number that counts up to `value` the first time it becomes visible.
#[component]
pub fn Counter(value: u64, #[prop(optional, into)] suffix: String) -> impl IntoView {
	let duration_ms = use_context::<Settings>()
		.unwrap_or_default()
		.counter_duration_ms as f64;
	let node = NodeRef::<leptos::html::Span>::new();
	let (shown, set_shown) = signal(0u64);
	let frames = StoredValue::new(None::<FrameLoop>);

	Effect::new(move |_| {
		let Some(el) = node.get() else {
			return;
		};
		on_reveal(&el, Duration::ZERO, move || {
			if frames.with_value(Option::is_some) {
				return;
			}
			let mut animation = CounterAnimation::new(value, duration_ms);
			let handle = FrameLoop::start(move |now| {
				let frame = animation.sample(now);
				set_shown.set(frame.value);
				if frame.done { Tick::Done } else { Tick::Continue }
			});
			frames.set_value(Some(handle));
		});
	});

	on_cleanup(move || {
		if let Some(Some(handle)) = frames.try_get_value() {
			handle.cancel();
		}
	});

	view! {
		<span node_ref=node class="stat-number">
			{move || shown.get()}
			{suffix}
		</span>
	}
}
