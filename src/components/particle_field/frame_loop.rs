//! Display-synchronised repeating callback with an explicit stop handle.
//!
//! Each frame is requested with `requestAnimationFrame`; the tick decides
//! whether another frame follows. The returned [`FrameLoop`] is `Send + Sync`
//! so it can be captured by `on_cleanup`, which cancels the pending request
//! when the owning view is torn down.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use leptos::prelude::{AnimationFrameRequestHandle, request_animation_frame_with_handle};
use log::debug;

/// What a tick wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
	Continue,
	Done,
}

#[derive(Default)]
struct Slot {
	stopped: bool,
	pending: Option<AnimationFrameRequestHandle>,
}

/// Handle to a running frame loop.
#[derive(Clone, Default)]
pub struct FrameLoop {
	slot: Arc<Mutex<Slot>>,
}

impl FrameLoop {
	/// Start calling `tick` once per display refresh with the current
	/// timestamp in milliseconds, until it returns [`Tick::Done`] or the
	/// handle is cancelled.
	pub fn start<F>(tick: F) -> Self
	where
		F: FnMut(f64) -> Tick + 'static,
	{
		let handle = Self::default();
		schedule(handle.clone(), Rc::new(RefCell::new(tick)));
		handle
	}

	/// Stop the loop and drop the already-requested frame. Idempotent.
	pub fn cancel(&self) {
		if let Ok(mut slot) = self.slot.lock() {
			slot.stopped = true;
			if let Some(request) = slot.pending.take() {
				request.cancel();
			}
		}
	}

	pub fn is_running(&self) -> bool {
		self.slot.lock().map(|slot| !slot.stopped).unwrap_or(false)
	}

	fn finish(&self) {
		if let Ok(mut slot) = self.slot.lock() {
			slot.stopped = true;
			slot.pending = None;
		}
	}

	/// Called at the top of a frame: forget the request that just fired and
	/// report whether the tick should run.
	fn begin_frame(&self) -> bool {
		match self.slot.lock() {
			Ok(mut slot) => {
				slot.pending = None;
				!slot.stopped
			}
			Err(_) => false,
		}
	}

	fn set_pending(&self, request: AnimationFrameRequestHandle) {
		if let Ok(mut slot) = self.slot.lock() {
			slot.pending = Some(request);
		}
	}
}

fn schedule<F>(handle: FrameLoop, tick: Rc<RefCell<F>>)
where
	F: FnMut(f64) -> Tick + 'static,
{
	if !handle.is_running() {
		return;
	}

	let next = handle.clone();
	let request = request_animation_frame_with_handle(move || {
		if !next.begin_frame() {
			return;
		}
		let step = (tick.borrow_mut())(js_sys::Date::now());
		match step {
			Tick::Continue => schedule(next, tick),
			Tick::Done => next.finish(),
		}
	});

	match request {
		Ok(request) => handle.set_pending(request),
		Err(e) => {
			debug!("frame loop: requestAnimationFrame unavailable: {:?}", e);
			handle.finish();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_handle_runs_until_cancelled() {
		let handle = FrameLoop::default();
		assert!(handle.is_running());
		assert!(handle.begin_frame());

		handle.cancel();
		assert!(!handle.is_running());
		assert!(!handle.begin_frame());

		handle.cancel();
		assert!(!handle.is_running());
	}

	#[test]
	fn clones_share_state() {
		let handle = FrameLoop::default();
		let owner_copy = handle.clone();
		owner_copy.cancel();
		assert!(!handle.is_running());
	}

	#[test]
	fn finishing_stops_the_loop() {
		let handle = FrameLoop::default();
		handle.finish();
		assert!(!handle.is_running());
		assert!(!handle.begin_frame());
	}

	#[test]
	fn handle_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<FrameLoop>();
	}
}
