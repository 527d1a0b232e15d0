//! One-shot reveal transitions triggered by scrolling elements into view.
//!
//! A single `IntersectionObserver` watches every registered element. Watched
//! elements live in a [`PendingSet`]; the first intersection removes the
//! entry and unobserves the element, so each reveal fires at most once.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::config::Settings;

/// Attribute linking an observed element back to its pending entry.
const REVEAL_ATTR: &str = "data-reveal-id";

/// Entries waiting for their first trigger.
#[derive(Debug)]
pub struct PendingSet<K, V> {
	entries: HashMap<K, V>,
}

impl<K, V> Default for PendingSet<K, V> {
	fn default() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}
}

impl<K: Eq + Hash, V> PendingSet<K, V> {
	/// Start watching `key`. A key already pending keeps its first value.
	pub fn watch(&mut self, key: K, value: V) -> bool {
		if self.entries.contains_key(&key) {
			return false;
		}
		self.entries.insert(key, value);
		true
	}

	/// Fire `key`: yields its value the first time, `None` ever after.
	pub fn take(&mut self, key: &K) -> Option<V> {
		self.entries.remove(key)
	}

	pub fn contains(&self, key: &K) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// A reveal waiting for its element to become visible.
struct PendingReveal {
	delay: Duration,
	action: Box<dyn FnOnce()>,
}

impl PendingReveal {
	fn run(self) {
		if self.delay.is_zero() {
			(self.action)();
		} else {
			set_timeout(self.action, self.delay);
		}
	}
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Shared viewport observer for all reveal targets on the page.
pub struct RevealObserver {
	observer: IntersectionObserver,
	pending: Rc<RefCell<PendingSet<u32, PendingReveal>>>,
	next_id: Cell<u32>,
	_callback: IntersectionCallback,
}

impl RevealObserver {
	/// `None` when the browser has no `IntersectionObserver`.
	pub fn new(threshold: f64, root_margin: &str) -> Option<Self> {
		let pending: Rc<RefCell<PendingSet<u32, PendingReveal>>> = Rc::default();
		let pending_cb = pending.clone();

		let callback: IntersectionCallback = Closure::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if !entry.is_intersecting() {
						continue;
					}
					let target = entry.target();
					observer.unobserve(&target);
					let Some(id) = reveal_id(&target) else {
						continue;
					};
					let fired = pending_cb.borrow_mut().take(&id);
					if let Some(reveal) = fired {
						reveal.run();
					}
				}
			},
		);

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(threshold));
		init.set_root_margin(root_margin);
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

		Some(Self {
			observer,
			pending,
			next_id: Cell::new(0),
			_callback: callback,
		})
	}

	/// Run `action` (after `delay`) the first time `element` scrolls into view.
	pub fn watch(&self, element: &Element, delay: Duration, action: impl FnOnce() + 'static) {
		let id = self.next_id.get();
		self.next_id.set(id.wrapping_add(1));
		let _ = element.set_attribute(REVEAL_ATTR, &id.to_string());
		self.pending.borrow_mut().watch(
			id,
			PendingReveal {
				delay,
				action: Box::new(action),
			},
		);
		self.observer.observe(element);
	}

	/// Number of elements still waiting to be revealed.
	pub fn pending(&self) -> usize {
		self.pending.borrow().len()
	}
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

fn reveal_id(element: &Element) -> Option<u32> {
	element.get_attribute(REVEAL_ATTR)?.parse().ok()
}

/// Context handle to the page's reveal observer.
#[derive(Clone, Copy)]
pub struct RevealContext(StoredValue<RevealObserver, LocalStorage>);

/// Create the shared observer and provide it to descendants.
///
/// Without observer support nothing is provided and every reveal fires
/// immediately.
pub fn provide_reveal_observer(settings: &Settings) {
	match RevealObserver::new(settings.reveal_threshold, &settings.reveal_root_margin) {
		Some(observer) => provide_context(RevealContext(StoredValue::new_local(observer))),
		None => debug!("reveal: IntersectionObserver unavailable, revealing eagerly"),
	}
}

/// Run `action` once `element` first becomes visible.
pub fn on_reveal(element: &Element, delay: Duration, action: impl FnOnce() + 'static) {
	match use_context::<RevealContext>() {
		Some(RevealContext(observer)) => observer.with_value(|o| o.watch(element, delay, action)),
		None => action(),
	}
}

/// Wraps content that animates in the first time it is scrolled into view.
///
/// Adds the `animated` class once, after `delay_ms`.
#[component]
pub fn Reveal(
	#[prop(optional)] delay_ms: u32,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	let node = NodeRef::<leptos::html::Div>::new();
	let (revealed, set_revealed) = signal(false);
	let delay = Duration::from_millis(delay_ms.into());

	Effect::new(move |_| {
		if let Some(el) = node.get() {
			on_reveal(&el, delay, move || set_revealed.set(true));
		}
	});

	view! {
		<div node_ref=node class=class data-animate="" class:animated=move || revealed.get()>
			{children()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn each_key_fires_once() {
		let mut pending = PendingSet::default();
		assert!(pending.watch("hero", 0));
		assert!(pending.watch("pricing", 150));
		assert_eq!(pending.len(), 2);

		// Repeated intersections for the same element.
		assert_eq!(pending.take(&"hero"), Some(0));
		assert_eq!(pending.take(&"hero"), None);
		assert_eq!(pending.take(&"hero"), None);
		assert!(!pending.contains(&"hero"));

		assert_eq!(pending.take(&"pricing"), Some(150));
		assert!(pending.is_empty());
	}

	#[test]
	fn rewatching_keeps_first_entry() {
		let mut pending = PendingSet::default();
		assert!(pending.watch(1u32, "first"));
		assert!(!pending.watch(1u32, "second"));
		assert_eq!(pending.take(&1), Some("first"));
	}

	#[test]
	fn unknown_keys_are_ignored() {
		let mut pending: PendingSet<u32, ()> = PendingSet::default();
		assert_eq!(pending.take(&7), None);
		assert!(pending.is_empty());
	}

	#[test]
	fn zero_delay_runs_inline() {
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let reveal = PendingReveal {
			delay: Duration::ZERO,
			action: Box::new(move || counter.set(counter.get() + 1)),
		};
		reveal.run();
		assert_eq!(hits.get(), 1);
	}
}
