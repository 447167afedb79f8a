use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

/// A `requestAnimationFrame` loop owned through the `Rc` returned by
/// [`FrameLoop::start`].
///
/// The browser callback only holds a `Weak` to the loop, so dropping the
/// owning `Rc` frees the callback and cancels the pending frame.
#[derive(Default)]
pub struct FrameLoop {
	callback: Option<Closure<dyn FnMut()>>,
	pending: Option<i32>,
}

impl FrameLoop {
	/// Call `frame` once per animation frame for as long as the handle lives.
	pub fn start(mut frame: impl FnMut() + 'static) -> Rc<RefCell<FrameLoop>> {
		let this = Rc::new(RefCell::new(FrameLoop::default()));
		let weak: Weak<RefCell<FrameLoop>> = Rc::downgrade(&this);
		let callback = Closure::new(move || {
			let Some(this) = weak.upgrade() else {
				return;
			};
			this.borrow_mut().pending = None;
			frame();
			this.borrow_mut().request();
		});
		this.borrow_mut().callback = Some(callback);
		this.borrow_mut().request();
		this
	}

	fn request(&mut self) {
		let Some(cb) = self.callback.as_ref() else {
			return;
		};
		if let Some(window) = web_sys::window() {
			self.pending = window.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
		}
	}

	fn cancel(&mut self) {
		let Some(id) = self.pending.take() else {
			return;
		};
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idle_loop_is_freed_with_its_owner() {
		let owner = Rc::new(RefCell::new(FrameLoop::default()));
		let weak = Rc::downgrade(&owner);
		owner.borrow_mut().request();
		assert!(owner.borrow().pending.is_none());
		drop(owner);
		assert!(weak.upgrade().is_none());
	}
}
