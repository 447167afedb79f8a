use std::time::Duration;

use log::warn;

/// Tuning knobs for the route animation and the map view.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteConfig {
	/// Wall-clock time between animation ticks.
	pub tick_interval: Duration,
	/// Fraction of a road the marker covers per tick.
	pub progress_step: f64,
	/// Smallest zoom factor.
	pub zoom_min: f64,
	/// Largest zoom factor.
	pub zoom_max: f64,
	/// Multiplier applied for a wheel step towards the user.
	pub zoom_in_factor: f64,
	/// Multiplier applied for a wheel step away from the user.
	pub zoom_out_factor: f64,
}

impl Default for RouteConfig {
	fn default() -> Self {
		Self {
			tick_interval: Duration::from_millis(30),
			progress_step: 0.04,
			zoom_min: 0.4,
			zoom_max: 2.5,
			zoom_in_factor: 1.1,
			zoom_out_factor: 0.9,
		}
	}
}

fn positive(v: f64) -> bool {
	v.is_finite() && v > 0.0
}

impl RouteConfig {
	/// Replace settings that would stall the animation or break zoom
	/// clamping with their defaults.
	///
	/// A non-positive or non-finite step would never reach the next city, a
	/// zero interval would spin the timer, and inverted zoom bounds would make
	/// clamping panic.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		let mut config = self;
		if !positive(config.progress_step) {
			warn!("progress step {} ignored", config.progress_step);
			config.progress_step = defaults.progress_step;
		}
		if config.tick_interval.is_zero() {
			warn!("zero tick interval ignored");
			config.tick_interval = defaults.tick_interval;
		}
		if !positive(config.zoom_min) || !positive(config.zoom_max) || config.zoom_min > config.zoom_max {
			warn!("zoom bounds [{}, {}] ignored", config.zoom_min, config.zoom_max);
			config.zoom_min = defaults.zoom_min;
			config.zoom_max = defaults.zoom_max;
		}
		if !positive(config.zoom_in_factor) {
			config.zoom_in_factor = defaults.zoom_in_factor;
		}
		if !positive(config.zoom_out_factor) {
			config.zoom_out_factor = defaults.zoom_out_factor;
		}
		config
	}
}
