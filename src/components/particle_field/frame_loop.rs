//! Animation-frame driven loop with visibility suspension.
//!
//! The loop never recurses: each frame callback asks for exactly one more
//! frame after its work is done, so there is at most one pending request at
//! any time. Hiding the document cancels that request; showing it again
//! requests a fresh one.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

/// Host primitive that runs a callback on the next display refresh.
pub trait FrameScheduler {
	/// Identifies a pending request so it can be cancelled.
	type Handle: Copy;

	/// Requests one callback. `None` if the host refused.
	fn request_frame(&mut self) -> Option<Self::Handle>;
	/// Drops a pending request before it fires.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Tracks the single pending frame and whether the document is hidden.
pub struct AnimationLoop<S: FrameScheduler> {
	scheduler: S,
	pending: Option<S::Handle>,
	hidden: bool,
}

impl<S: FrameScheduler> AnimationLoop<S> {
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			pending: None,
			hidden: false,
		}
	}

	/// Requests a frame unless one is already pending or the document is hidden.
	pub fn start(&mut self) {
		if self.pending.is_none() && !self.hidden {
			self.pending = self.scheduler.request_frame();
		}
	}

	/// Called first thing in the frame callback. Returns whether the frame
	/// should do any work.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		!self.hidden
	}

	/// Called last in the frame callback to keep the loop going.
	pub fn end_frame(&mut self) {
		self.start();
	}

	/// Applies a document visibility change.
	pub fn set_hidden(&mut self, hidden: bool) {
		self.hidden = hidden;
		if hidden {
			if let Some(handle) = self.pending.take() {
				self.scheduler.cancel_frame(handle);
			}
		} else {
			self.start();
		}
	}

	pub fn is_running(&self) -> bool {
		self.pending.is_some()
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}
}

/// The frame callback shared between the scheduler and whoever builds it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `window.requestAnimationFrame` / `cancelAnimationFrame`.
///
/// The callback slot is filled in after construction because the closure
/// itself needs to reach the state that owns this scheduler.
pub struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl RafScheduler {
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameScheduler for RafScheduler {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let slot = self.callback.borrow();
		let cb = slot.as_ref()?;
		match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => Some(id),
			Err(e) => {
				warn!("portfolio-fx: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

#[cfg(test)]
pub mod counting {
	use super::*;

	/// Shared tally of scheduler traffic.
	#[derive(Debug, Default)]
	pub struct Tally {
		pub requested: u32,
		pub cancelled: Vec<u32>,
	}

	/// Scheduler that only counts; frames are fired by hand in tests.
	#[derive(Clone, Default)]
	pub struct CountingScheduler {
		pub tally: Rc<RefCell<Tally>>,
	}

	impl FrameScheduler for CountingScheduler {
		type Handle = u32;

		fn request_frame(&mut self) -> Option<u32> {
			let mut tally = self.tally.borrow_mut();
			tally.requested += 1;
			Some(tally.requested)
		}

		fn cancel_frame(&mut self, handle: u32) {
			self.tally.borrow_mut().cancelled.push(handle);
		}
	}
}
