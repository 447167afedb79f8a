use std::time::Duration;

use log::{error, warn};
use wasm_bindgen::prelude::*;

use crate::routing::Scheduler;

/// [`Scheduler`] backed by `window.setInterval`.
#[derive(Default)]
pub struct IntervalScheduler {
	callback: Option<Closure<dyn FnMut()>>,
	handle: Option<i32>,
}

impl IntervalScheduler {
	/// Set what runs on every interval. Must be called before `start`.
	pub fn set_callback(&mut self, cb: impl FnMut() + 'static) {
		self.callback = Some(Closure::new(cb));
	}
}

impl Scheduler for IntervalScheduler {
	fn start(&mut self, period: Duration) {
		self.stop();
		let Some(cb) = self.callback.as_ref() else {
			warn!("interval started without a callback");
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		match window.set_interval_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			interval_millis(period),
		) {
			Ok(handle) => self.handle = Some(handle),
			Err(e) => error!("setInterval failed: {e:?}"),
		}
	}

	fn stop(&mut self) {
		if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
			window.clear_interval_with_handle(handle);
		}
	}
}

/// `setInterval` takes a signed 32-bit delay; longer periods are capped.
fn interval_millis(period: Duration) -> i32 {
	i32::try_from(period.as_millis()).unwrap_or(i32::MAX)
}

impl Drop for IntervalScheduler {
	fn drop(&mut self) {
		self.stop();
	}
}
