//! Road network store: an arena of cities with symmetric adjacency lists.

use std::collections::HashMap;

use log::error;

use super::error::RoutingError;

/// A position on the map plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Create a point from its coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
	pub fn lerp(self, other: Point, t: f64) -> Point {
		Point {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
		}
	}
}

/// Stable index of a city inside a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Position of the city in insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// A named city with fixed layout coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
	/// Unique name of the city.
	pub name: String,
	/// Layout position, also used to interpolate the route marker.
	pub at: Point,
}

/// One direction of a road as stored in an adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// The city at the other end.
	pub to: NodeId,
	/// Road length in km, always positive.
	pub km: u64,
}

/// An undirected road, listed once per insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Road {
	/// One endpoint.
	pub a: NodeId,
	/// The other endpoint.
	pub b: NodeId,
	/// Road length in km.
	pub km: u64,
}

/// Definition of a city as supplied by a data table.
#[derive(Clone, Copy, Debug)]
pub struct NodeDef<'a> {
	/// City name.
	pub name: &'a str,
	/// Horizontal layout coordinate.
	pub x: f64,
	/// Vertical layout coordinate.
	pub y: f64,
}

/// Definition of a road as supplied by a data table.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDef<'a> {
	/// First endpoint name.
	pub a: &'a str,
	/// Second endpoint name.
	pub b: &'a str,
	/// Length in km.
	pub km: i64,
}

/// Undirected weighted road network.
///
/// Cities live in an arena addressed by [`NodeId`]; adjacency lists store
/// indices, so there is no ownership between cities and roads. Every road is
/// mirrored in both directions with the same length.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	cities: Vec<City>,
	adjacency: Vec<Vec<Edge>>,
	by_name: HashMap<String, NodeId>,
}

impl Graph {
	/// An empty network.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a network from definition tables, stopping at the first bad entry.
	pub fn from_definitions(nodes: &[NodeDef<'_>], edges: &[EdgeDef<'_>]) -> Result<Self, RoutingError> {
		let mut graph = Graph::new();
		for node in nodes {
			graph.add_node(node.name, node.x, node.y).inspect_err(|e| error!("bad city table: {e}"))?;
		}
		for edge in edges {
			graph.connect(edge.a, edge.b, edge.km).inspect_err(|e| error!("bad road table: {e}"))?;
		}
		Ok(graph)
	}

	/// Add a city. Names must be unique.
	pub fn add_node(&mut self, name: &str, x: f64, y: f64) -> Result<NodeId, RoutingError> {
		if self.by_name.contains_key(name) {
			return Err(RoutingError::DuplicateNode(name.to_string()));
		}
		let id = NodeId(self.cities.len());
		self.cities.push(City {
			name: name.to_string(),
			at: Point::new(x, y),
		});
		self.adjacency.push(Vec::new());
		self.by_name.insert(name.to_string(), id);
		Ok(id)
	}

	/// Add a road between two existing cities, in both directions.
	///
	/// A road from a city to itself is stored once.
	pub fn connect(&mut self, a: &str, b: &str, km: i64) -> Result<(), RoutingError> {
		let (from, to) = (self.node_id(a)?, self.node_id(b)?);
		if km <= 0 {
			return Err(RoutingError::InvalidWeight {
				a: a.to_string(),
				b: b.to_string(),
				km,
			});
		}
		let km = km as u64;
		self.adjacency[from.0].push(Edge { to, km });
		if from != to {
			self.adjacency[to.0].push(Edge { to: from, km });
		}
		Ok(())
	}

	/// Look up a city by name.
	pub fn node_id(&self, name: &str) -> Result<NodeId, RoutingError> {
		self.by_name
			.get(name)
			.copied()
			.ok_or_else(|| RoutingError::UnknownNode(name.to_string()))
	}

	/// The city stored under `id`.
	///
	/// Ids only come from this graph, so indexing cannot go out of bounds
	/// unless an id is carried over from a different graph.
	pub fn city(&self, id: NodeId) -> &City {
		&self.cities[id.0]
	}

	/// Roads leaving `id`, in insertion order.
	pub fn neighbors(&self, id: NodeId) -> &[Edge] {
		&self.adjacency[id.0]
	}

	/// Roads leaving the named city, in insertion order.
	pub fn neighbors_of(&self, name: &str) -> Result<&[Edge], RoutingError> {
		Ok(self.neighbors(self.node_id(name)?))
	}

	/// All cities with their ids, in insertion order.
	pub fn cities(&self) -> impl Iterator<Item = (NodeId, &City)> {
		self.cities.iter().enumerate().map(|(i, c)| (NodeId(i), c))
	}

	/// Every road once, regardless of the direction it was stored in.
	pub fn roads(&self) -> impl Iterator<Item = Road> + '_ {
		self.adjacency.iter().enumerate().flat_map(|(i, edges)| {
			edges
				.iter()
				.filter(move |e| i <= e.to.0)
				.map(move |e| Road {
					a: NodeId(i),
					b: e.to,
					km: e.km,
				})
		})
	}

	/// Number of cities.
	pub fn len(&self) -> usize {
		self.cities.len()
	}

	/// Whether the network has no cities.
	pub fn is_empty(&self) -> bool {
		self.cities.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle() -> Graph {
		let mut g = Graph::new();
		g.add_node("A", 0.0, 0.0).unwrap();
		g.add_node("B", 10.0, 0.0).unwrap();
		g.add_node("C", 20.0, 0.0).unwrap();
		g.connect("A", "B", 5).unwrap();
		g.connect("B", "C", 5).unwrap();
		g.connect("A", "C", 20).unwrap();
		g
	}

	#[test]
	fn duplicate_city_is_rejected() {
		let mut g = triangle();
		assert_eq!(
			g.add_node("B", 1.0, 1.0),
			Err(RoutingError::DuplicateNode("B".into()))
		);
		assert_eq!(g.len(), 3);
	}

	#[test]
	fn connect_requires_known_cities() {
		let mut g = triangle();
		assert_eq!(g.connect("A", "Z", 3), Err(RoutingError::UnknownNode("Z".into())));
		assert_eq!(g.connect("Y", "A", 3), Err(RoutingError::UnknownNode("Y".into())));
	}

	#[test]
	fn connect_rejects_non_positive_lengths() {
		let mut g = triangle();
		for km in [0, -4] {
			assert!(matches!(
				g.connect("A", "B", km),
				Err(RoutingError::InvalidWeight { km: k, .. }) if k == km
			));
		}
		assert_eq!(g.neighbors_of("A").unwrap().len(), 2);
	}

	#[test]
	fn roads_are_mirrored_in_insertion_order() {
		let g = triangle();
		let (a, b, c) = (
			g.node_id("A").unwrap(),
			g.node_id("B").unwrap(),
			g.node_id("C").unwrap(),
		);
		assert_eq!(g.neighbors(a), &[Edge { to: b, km: 5 }, Edge { to: c, km: 20 }]);
		assert_eq!(g.neighbors(b), &[Edge { to: a, km: 5 }, Edge { to: c, km: 5 }]);
		assert_eq!(g.neighbors(c), &[Edge { to: b, km: 5 }, Edge { to: a, km: 20 }]);
	}

	#[test]
	fn every_edge_has_a_matching_reverse() {
		let g = triangle();
		for (id, _) in g.cities() {
			for e in g.neighbors(id) {
				assert!(g.neighbors(e.to).iter().any(|back| back.to == id && back.km == e.km));
			}
		}
	}

	#[test]
	fn isolated_city_has_no_neighbors() {
		let mut g = triangle();
		g.add_node("D", 5.0, 5.0).unwrap();
		assert!(g.neighbors_of("D").unwrap().is_empty());
		assert_eq!(g.neighbors_of("E"), Err(RoutingError::UnknownNode("E".into())));
	}

	#[test]
	fn roads_list_each_connection_once() {
		let mut g = triangle();
		g.connect("C", "C", 1).unwrap();
		let roads: Vec<_> = g.roads().collect();
		assert_eq!(roads.len(), 4);
		assert_eq!(roads.iter().map(|r| r.km).sum::<u64>(), 31);
	}

	#[test]
	fn definitions_stop_at_first_error() {
		let nodes = [
			NodeDef { name: "A", x: 0.0, y: 0.0 },
			NodeDef { name: "B", x: 1.0, y: 0.0 },
		];
		let edges = [
			EdgeDef { a: "A", b: "B", km: 3 },
			EdgeDef { a: "B", b: "Q", km: 3 },
		];
		assert_eq!(
			Graph::from_definitions(&nodes, &edges).unwrap_err(),
			RoutingError::UnknownNode("Q".into())
		);
	}

	#[test]
	fn lerp_hits_both_ends() {
		let (p, q) = (Point::new(0.0, 0.0), Point::new(10.0, -4.0));
		assert_eq!(p.lerp(q, 0.0), p);
		assert_eq!(p.lerp(q, 1.0), q);
		assert_eq!(p.lerp(q, 0.5), Point::new(5.0, -2.0));
	}
}
