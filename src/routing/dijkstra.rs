//! Minimum-distance routing over a [`Graph`] with Dijkstra's algorithm.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::error::RoutingError;
use super::graph::{Graph, NodeId};

/// How the next closest city is picked while the search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
	/// Binary heap with lazy deletion of stale entries, O((V + E) log V).
	#[default]
	BinaryHeap,
	/// Linear scan over unvisited cities, O(V²). Same distances as the heap.
	LinearScan,
}

/// A shortest route: the ordered cities from source to destination and its length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
	nodes: Vec<NodeId>,
	total_km: u64,
}

impl Route {
	/// Cities along the route, source first. Never empty.
	pub fn nodes(&self) -> &[NodeId] {
		&self.nodes
	}

	/// Sum of the road lengths along the route.
	pub fn total_km(&self) -> u64 {
		self.total_km
	}

	/// First city.
	pub fn source(&self) -> NodeId {
		self.nodes[0]
	}

	/// Last city.
	pub fn destination(&self) -> NodeId {
		self.nodes[self.nodes.len() - 1]
	}

	/// Number of cities on the route.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Always false; a route holds at least its source.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// City names along the route.
	pub fn names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
		self.nodes.iter().map(|&id| graph.city(id).name.as_str()).collect()
	}
}

/// Shortest route from `source` to `destination` using the binary heap.
pub fn shortest_path(graph: &Graph, source: NodeId, destination: NodeId) -> Result<Route, RoutingError> {
	shortest_path_with(graph, source, destination, Strategy::BinaryHeap)
}

/// Shortest route using an explicit [`Strategy`].
///
/// Fails with [`RoutingError::NoPath`] when the destination is in another
/// component. Ties between equally short routes are broken arbitrarily.
pub fn shortest_path_with(
	graph: &Graph,
	source: NodeId,
	destination: NodeId,
	strategy: Strategy,
) -> Result<Route, RoutingError> {
	if source == destination {
		return Ok(Route {
			nodes: vec![source],
			total_km: 0,
		});
	}

	let (dist, prev) = match strategy {
		Strategy::BinaryHeap => search_heap(graph, source),
		Strategy::LinearScan => search_linear(graph, source),
	};

	let Some(total_km) = dist[destination.index()] else {
		return Err(RoutingError::NoPath {
			from: graph.city(source).name.clone(),
			to: graph.city(destination).name.clone(),
		});
	};

	let mut nodes = vec![destination];
	let mut at = destination;
	while let Some(p) = prev[at.index()] {
		nodes.push(p);
		at = p;
	}
	nodes.reverse();
	debug_assert_eq!(nodes[0], source);

	Ok(Route { nodes, total_km })
}

type Distances = Vec<Option<u64>>;
type Predecessors = Vec<Option<NodeId>>;

fn search_heap(graph: &Graph, source: NodeId) -> (Distances, Predecessors) {
	let mut dist: Distances = vec![None; graph.len()];
	let mut prev: Predecessors = vec![None; graph.len()];
	dist[source.index()] = Some(0);

	let mut heap = BinaryHeap::new();
	heap.push(Reverse((0u64, source)));

	while let Some(Reverse((cost, u))) = heap.pop() {
		// Stale entry: a shorter distance was pushed after this one.
		if dist[u.index()].is_some_and(|best| cost > best) {
			continue;
		}
		for edge in graph.neighbors(u) {
			let candidate = cost.saturating_add(edge.km);
			if dist[edge.to.index()].is_none_or(|d| candidate < d) {
				dist[edge.to.index()] = Some(candidate);
				prev[edge.to.index()] = Some(u);
				heap.push(Reverse((candidate, edge.to)));
			}
		}
	}

	(dist, prev)
}

fn search_linear(graph: &Graph, source: NodeId) -> (Distances, Predecessors) {
	let mut dist: Distances = vec![None; graph.len()];
	let mut prev: Predecessors = vec![None; graph.len()];
	let mut visited = vec![false; graph.len()];
	dist[source.index()] = Some(0);

	loop {
		let next = graph
			.cities()
			.filter(|(id, _)| !visited[id.index()])
			.filter_map(|(id, _)| dist[id.index()].map(|d| (d, id)))
			.min();
		let Some((cost, u)) = next else {
			break;
		};
		visited[u.index()] = true;

		for edge in graph.neighbors(u) {
			let candidate = cost.saturating_add(edge.km);
			if dist[edge.to.index()].is_none_or(|d| candidate < d) {
				dist[edge.to.index()] = Some(candidate);
				prev[edge.to.index()] = Some(u);
			}
		}
	}

	(dist, prev)
}
