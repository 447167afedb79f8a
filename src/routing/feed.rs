//! Data the controller hands to the outside world: one [`Frame`] per
//! animation frame and one [`RouteSummary`] per finished route.

use std::fmt;

use super::graph::Point;

/// How a city is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
	/// Selected as the route source.
	Source,
	/// Selected as the route destination.
	Destination,
	/// Any other city.
	Default,
}

/// A city as drawn on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct CityMark {
	/// City name, drawn as a label.
	pub name: String,
	/// Map position.
	pub at: Point,
	/// Fill style.
	pub highlight: Highlight,
}

/// A road as drawn on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadLine {
	/// One end.
	pub a: Point,
	/// Other end.
	pub b: Point,
	/// Length label.
	pub km: u64,
}

/// A segment of the active route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteLine {
	/// Segment start.
	pub from: Point,
	/// Segment end.
	pub to: Point,
	/// Whether the marker has already passed it.
	pub traversed: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	/// All roads, each once.
	pub roads: Vec<RoadLine>,
	/// Active route segments in travel order.
	pub route: Vec<RouteLine>,
	/// Marker position when a route is active.
	pub marker: Option<Point>,
	/// All cities in insertion order.
	pub cities: Vec<CityMark>,
	/// Zoom factor applied after panning.
	pub zoom: f64,
	/// Pan offset in screen pixels.
	pub pan: (i32, i32),
}

/// Textual record of a finished route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSummary {
	/// Source city name.
	pub source: String,
	/// Destination city name.
	pub destination: String,
	/// City names along the route, source first.
	pub route: Vec<String>,
	/// Route length in km.
	pub total_km: u64,
}

impl fmt::Display for RouteSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Source         : {}", self.source)?;
		writeln!(f, "Destination    : {}", self.destination)?;
		writeln!(f, "Route          : {}", self.route.join(" → "))?;
		write!(f, "Total Distance : {} km", self.total_km)
	}
}
