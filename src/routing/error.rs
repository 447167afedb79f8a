use std::fmt;

use thiserror::Error;

/// Which end of a route a selection refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
	/// The city the route starts from.
	Source,
	/// The city the route ends at.
	Destination,
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Endpoint::Source => f.write_str("source"),
			Endpoint::Destination => f.write_str("destination"),
		}
	}
}

/// Errors raised while building the road network or computing a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
	/// A city name that is not part of the network.
	#[error("unknown city: {0}")]
	UnknownNode(String),

	/// A road with a zero or negative length.
	#[error("invalid road length between {a} and {b}: {km} km")]
	InvalidWeight {
		/// First endpoint of the rejected road.
		a: String,
		/// Second endpoint of the rejected road.
		b: String,
		/// The rejected length.
		km: i64,
	},

	/// A city added twice.
	#[error("city already exists: {0}")]
	DuplicateNode(String),

	/// The destination cannot be reached from the source.
	#[error("no route from {from} to {to}")]
	NoPath {
		/// Name of the source city.
		from: String,
		/// Name of the unreachable destination.
		to: String,
	},

	/// A route was requested before both ends were chosen.
	#[error("no {0} city selected")]
	SelectionMissing(Endpoint),
}
