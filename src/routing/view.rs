use super::config::RouteConfig;

/// Zoom and pan of the map, driven only by pointer input.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
	zoom: f64,
	pan: (i32, i32),
	drag_from: Option<(i32, i32)>,
	zoom_min: f64,
	zoom_max: f64,
	zoom_in_factor: f64,
	zoom_out_factor: f64,
}

impl ViewState {
	/// Unzoomed, unpanned view using the zoom settings of `config`.
	pub fn new(config: &RouteConfig) -> Self {
		Self {
			zoom: 1.0_f64.clamp(config.zoom_min, config.zoom_max),
			pan: (0, 0),
			drag_from: None,
			zoom_min: config.zoom_min,
			zoom_max: config.zoom_max,
			zoom_in_factor: config.zoom_in_factor,
			zoom_out_factor: config.zoom_out_factor,
		}
	}

	/// Current zoom factor.
	pub fn zoom(&self) -> f64 {
		self.zoom
	}

	/// Current pan offset in screen pixels.
	pub fn pan(&self) -> (i32, i32) {
		self.pan
	}

	/// Zoom out for positive wheel deltas and in for negative ones.
	pub fn pointer_wheel(&mut self, delta: f64) {
		let factor = if delta > 0.0 {
			self.zoom_out_factor
		} else if delta < 0.0 {
			self.zoom_in_factor
		} else {
			return;
		};
		self.zoom = (self.zoom * factor).clamp(self.zoom_min, self.zoom_max);
	}

	/// Remember where a drag started.
	pub fn pointer_drag_start(&mut self, at: (i32, i32)) {
		self.drag_from = Some(at);
	}

	/// Pan by the pointer movement since the last recorded position.
	pub fn pointer_drag_move(&mut self, at: (i32, i32)) {
		let Some(from) = self.drag_from else {
			return;
		};
		self.pan.0 = self.pan.0.saturating_add(at.0.saturating_sub(from.0));
		self.pan.1 = self.pan.1.saturating_add(at.1.saturating_sub(from.1));
		self.drag_from = Some(at);
	}

	/// Stop panning.
	pub fn pointer_drag_end(&mut self) {
		self.drag_from = None;
	}
}
