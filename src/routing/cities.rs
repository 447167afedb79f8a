//! Built-in road network of north Gujarat.

use super::error::RoutingError;
use super::graph::{EdgeDef, Graph, NodeDef};

const fn city(name: &'static str, x: f64, y: f64) -> NodeDef<'static> {
	NodeDef { name, x, y }
}

const fn road(a: &'static str, b: &'static str, km: i64) -> EdgeDef<'static> {
	EdgeDef { a, b, km }
}

/// City layout in map coordinates.
pub const CITIES: &[NodeDef<'static>] = &[
	city("Ahmedabad", 140.0, 520.0),
	city("Gandhinagar", 260.0, 340.0),
	city("Himatnagar", 380.0, 300.0),
	city("Vijapur", 500.0, 340.0),
	city("Visnagar", 620.0, 340.0),
	city("Mahesana", 740.0, 550.0),
	city("Kalol", 620.0, 450.0),
	city("Unjha", 860.0, 500.0),
	city("Chanshma", 780.0, 200.0),
	city("Patan", 900.0, 260.0),
	city("Palanpur", 980.0, 400.0),
	city("Deesa", 1100.0, 360.0),
	city("Dhanera", 1200.0, 250.0),
	city("Khatraj", 260.0, 550.0),
	city("Kheda", 260.0, 750.0),
	city("Nadiad", 380.0, 560.0),
	city("Anand", 500.0, 560.0),
	city("Vadodara", 620.0, 750.0),
];

/// Roads between the cities above. Some pairs are listed twice with
/// different lengths; the router picks the shorter one.
pub const ROADS: &[EdgeDef<'static>] = &[
	road("Ahmedabad", "Gandhinagar", 25),
	road("Kalol", "Ahmedabad", 25),
	road("Gandhinagar", "Himatnagar", 40),
	road("Himatnagar", "Vijapur", 25),
	road("Vijapur", "Visnagar", 30),
	road("Visnagar", "Mahesana", 35),
	road("Kalol", "Gandhinagar", 25),
	road("Mahesana", "Kalol", 40),
	road("Mahesana", "Unjha", 30),
	road("Mahesana", "Chanshma", 45),
	road("Chanshma", "Patan", 20),
	road("Unjha", "Palanpur", 35),
	road("Unjha", "Patan", 20),
	road("Palanpur", "Deesa", 35),
	road("Patan", "Deesa", 50),
	road("Deesa", "Dhanera", 20),
	road("Ahmedabad", "Khatraj", 30),
	road("Khatraj", "Nadiad", 25),
	road("Ahmedabad", "Kheda", 35),
	road("Kheda", "Nadiad", 20),
	road("Nadiad", "Anand", 15),
	road("Anand", "Vadodara", 45),
	road("Ahmedabad", "Vadodara", 100),
	road("Kheda", "Vadodara", 70),
	road("Unjha", "Visnagar", 25),
	road("Visnagar", "Vijapur", 30),
	road("Vijapur", "Himatnagar", 35),
	road("Himatnagar", "Gandhinagar", 40),
];

/// Load the built-in network.
pub fn gujarat() -> Result<Graph, RoutingError> {
	Graph::from_definitions(CITIES, ROADS)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_network_loads() {
		let g = gujarat().unwrap();
		assert_eq!(g.len(), CITIES.len());
		assert_eq!(g.roads().count(), ROADS.len());
	}

	#[test]
	fn builtin_network_is_connected() {
		let g = gujarat().unwrap();
		let ahmedabad = g.node_id("Ahmedabad").unwrap();
		let mut seen = vec![false; g.len()];
		let mut stack = vec![ahmedabad];
		while let Some(at) = stack.pop() {
			if std::mem::replace(&mut seen[at.index()], true) {
				continue;
			}
			stack.extend(g.neighbors(at).iter().map(|e| e.to));
		}
		assert!(seen.iter().all(|&s| s));
	}
}
