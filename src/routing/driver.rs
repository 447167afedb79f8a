//! Tick-driven marker animation.
//!
//! The driver is a small state machine. It never owns or borrows the
//! [`RouteSession`] between ticks; the caller hands the session in on every
//! tick, so clearing the session can never leave a driver pointing at stale
//! playback state. Timing comes from a [`Scheduler`] owned by the caller.

use std::time::Duration;

use log::debug;

use super::session::RouteSession;

/// Repeating timer that calls back into the route controller.
///
/// Implementations fire the controller's tick handler every `period` between
/// `start` and `stop`.
pub trait Scheduler {
	/// Start firing every `period`. A running timer is replaced, not doubled.
	fn start(&mut self, period: Duration);
	/// Stop firing. Calling this while stopped does nothing.
	fn stop(&mut self);
}

/// Lifecycle of the marker animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
	/// Nothing to animate.
	#[default]
	Idle,
	/// Advancing on every tick.
	Running,
	/// The marker reached the destination.
	Completed,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
	/// The driver was not running; nothing changed.
	Ignored,
	/// The marker moved; the map should be redrawn.
	Redraw,
	/// The marker reached the destination on this tick.
	Completed,
}

/// Advances a session's playback by a fixed step per tick.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
	state: Playback,
	step: f64,
}

impl AnimationDriver {
	/// Idle driver covering `step` of a road per tick.
	pub fn new(step: f64) -> Self {
		Self {
			state: Playback::Idle,
			step,
		}
	}

	/// Current state.
	pub fn state(&self) -> Playback {
		self.state
	}

	/// Begin animating a freshly started session.
	///
	/// A session already on its destination (a one-city route) completes
	/// immediately, so no tick ever runs on a zero-length segment. An empty
	/// session leaves the driver idle.
	pub fn begin(&mut self, session: &RouteSession) -> Playback {
		self.state = match session.route() {
			None => Playback::Idle,
			Some(_) if session.is_complete() => Playback::Completed,
			Some(_) => Playback::Running,
		};
		debug!("animation driver begins in {:?}", self.state);
		self.state
	}

	/// Advance the marker by one step.
	pub fn tick(&mut self, session: &mut RouteSession) -> Tick {
		if self.state != Playback::Running {
			return Tick::Ignored;
		}
		session.advance(self.step);
		if session.is_complete() {
			self.state = Playback::Completed;
			Tick::Completed
		} else {
			Tick::Redraw
		}
	}

	/// Return to idle. Safe to call repeatedly.
	pub fn halt(&mut self) {
		self.state = Playback::Idle;
	}
}
