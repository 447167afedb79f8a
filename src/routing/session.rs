use super::dijkstra::Route;
use super::graph::{Graph, NodeId, Point};

/// One segment of the active route, as handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg {
	/// City the segment starts at.
	pub from: NodeId,
	/// City the segment ends at.
	pub to: NodeId,
	/// Whether the marker has already passed this segment.
	pub traversed: bool,
}

/// The active route and how far the marker has travelled along it.
///
/// `start` replaces everything at once and `clear` drops everything, so a
/// half-replaced route is never observable.
#[derive(Clone, Debug, Default)]
pub struct RouteSession {
	route: Option<Route>,
	index: usize,
	progress: f64,
}

impl RouteSession {
	/// An empty session.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the current route and rewind playback to its source.
	pub fn start(&mut self, route: Route) {
		*self = Self {
			route: Some(route),
			index: 0,
			progress: 0.0,
		};
	}

	/// Drop the route and rewind playback. Safe on an empty session.
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// The active route, if any.
	pub fn route(&self) -> Option<&Route> {
		self.route.as_ref()
	}

	/// Whether no route is active.
	pub fn is_empty(&self) -> bool {
		self.route.is_none()
	}

	/// Index of the city the marker last passed.
	pub fn playback_index(&self) -> usize {
		self.index
	}

	/// Position between the playback city and the next one, in `[0, 1)`.
	pub fn progress(&self) -> f64 {
		self.progress
	}

	/// True once the marker sits on the destination.
	pub fn is_complete(&self) -> bool {
		self.route.as_ref().is_some_and(|r| self.index + 1 == r.len())
	}

	/// Marker position, interpolated along the current segment.
	pub fn current_position(&self, graph: &Graph) -> Option<Point> {
		let nodes = self.route.as_ref()?.nodes();
		let here = graph.city(nodes[self.index]).at;
		Some(match nodes.get(self.index + 1) {
			Some(&next) => here.lerp(graph.city(next).at, self.progress),
			None => here,
		})
	}

	/// Route segments in order; those before the playback index are traversed.
	pub fn legs(&self) -> Vec<Leg> {
		let Some(route) = &self.route else {
			return Vec::new();
		};
		route
			.nodes()
			.windows(2)
			.enumerate()
			.map(|(i, pair)| Leg {
				from: pair[0],
				to: pair[1],
				traversed: i < self.index,
			})
			.collect()
	}

	/// Move the marker forward by `step`, crossing into the next segment once
	/// progress reaches one. Returns true when a city was passed.
	pub(crate) fn advance(&mut self, step: f64) -> bool {
		let Some(route) = &self.route else {
			return false;
		};
		if self.index + 1 >= route.len() {
			return false;
		}
		self.progress += step;
		if self.progress >= 1.0 - PROGRESS_EPSILON {
			self.progress = 0.0;
			self.index += 1;
			true
		} else {
			false
		}
	}
}

/// Absorbs rounding so a step that divides one evenly takes exactly `1 / step` ticks.
const PROGRESS_EPSILON: f64 = 1e-9;
