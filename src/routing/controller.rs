//! The route controller: the single owner of route, animation and view state.

use std::rc::Rc;

use log::{debug, info, warn};

use super::config::RouteConfig;
use super::dijkstra::shortest_path;
use super::driver::{AnimationDriver, Playback, Scheduler, Tick};
use super::error::{Endpoint, RoutingError};
use super::feed::{CityMark, Frame, Highlight, RoadLine, RouteLine, RouteSummary};
use super::graph::{Graph, NodeId};
use super::session::RouteSession;
use super::view::ViewState;

/// Handles user commands and timer ticks, and produces render and summary feeds.
///
/// Requesting a route while another one is animating replaces it: the old
/// timer is stopped before the new route is installed.
pub struct RouteController<S: Scheduler> {
	graph: Rc<Graph>,
	config: RouteConfig,
	scheduler: S,
	session: RouteSession,
	driver: AnimationDriver,
	view: ViewState,
	source: Option<NodeId>,
	destination: Option<NodeId>,
	routed: Option<(NodeId, NodeId)>,
	summary: Option<RouteSummary>,
}

impl<S: Scheduler> RouteController<S> {
	/// Controller over `graph` with nothing selected.
	///
	/// Unusable settings in `config` are replaced by their defaults, see
	/// [`RouteConfig::sanitized`].
	pub fn new(graph: Rc<Graph>, scheduler: S, config: RouteConfig) -> Self {
		let config = config.sanitized();
		Self {
			driver: AnimationDriver::new(config.progress_step),
			view: ViewState::new(&config),
			graph,
			config,
			scheduler,
			session: RouteSession::new(),
			source: None,
			destination: None,
			routed: None,
			summary: None,
		}
	}

	/// The road network.
	pub fn graph(&self) -> &Rc<Graph> {
		&self.graph
	}

	/// The active route and playback position.
	pub fn session(&self) -> &RouteSession {
		&self.session
	}

	/// Zoom and pan.
	pub fn view(&self) -> &ViewState {
		&self.view
	}

	/// Animation state.
	pub fn playback(&self) -> Playback {
		self.driver.state()
	}

	/// The timer driving [`Self::on_tick`].
	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// Mutable access to the timer, used to wire its callback.
	pub fn scheduler_mut(&mut self) -> &mut S {
		&mut self.scheduler
	}

	/// Choose the city routes start from.
	pub fn select_source(&mut self, name: &str) -> Result<(), RoutingError> {
		self.source = Some(self.graph.node_id(name)?);
		Ok(())
	}

	/// Choose the city routes end at.
	pub fn select_destination(&mut self, name: &str) -> Result<(), RoutingError> {
		self.destination = Some(self.graph.node_id(name)?);
		Ok(())
	}

	/// Compute the route between the selected cities and start animating it.
	///
	/// Any active route is reset first. The requested cities become the
	/// highlighted endpoints until the next request, even when no route
	/// exists; in that case the session is left empty and the timer is not
	/// started.
	pub fn request_route(&mut self) -> Result<Playback, RoutingError> {
		self.reset_route();

		let source = self.source.ok_or(RoutingError::SelectionMissing(Endpoint::Source))?;
		let destination = self
			.destination
			.ok_or(RoutingError::SelectionMissing(Endpoint::Destination))?;
		self.routed = Some((source, destination));

		let route = shortest_path(&self.graph, source, destination).inspect_err(|e| warn!("{e}"))?;
		info!(
			"route {} -> {}: {} cities, {} km",
			self.graph.city(source).name,
			self.graph.city(destination).name,
			route.len(),
			route.total_km()
		);

		self.session.start(route);
		let state = self.driver.begin(&self.session);
		match state {
			Playback::Running => self.scheduler.start(self.config.tick_interval),
			Playback::Completed => self.publish_summary(),
			Playback::Idle => {}
		}
		Ok(state)
	}

	/// Stop the animation and drop the route. Selections, highlighted
	/// endpoints and view are kept.
	pub fn reset_route(&mut self) {
		self.scheduler.stop();
		self.driver.halt();
		self.session.clear();
		self.summary = None;
		debug!("route reset");
	}

	/// Timer callback: advance the marker one step.
	pub fn on_tick(&mut self) -> Tick {
		let tick = self.driver.tick(&mut self.session);
		match tick {
			Tick::Completed => {
				self.scheduler.stop();
				self.publish_summary();
			}
			Tick::Ignored => self.scheduler.stop(),
			Tick::Redraw => {}
		}
		tick
	}

	/// The summary of the last finished route, handed out once.
	pub fn take_summary(&mut self) -> Option<RouteSummary> {
		self.summary.take()
	}

	/// Zoom the map.
	pub fn pointer_wheel(&mut self, delta: f64) {
		self.view.pointer_wheel(delta);
	}

	/// Start panning from a screen point.
	pub fn pointer_drag_start(&mut self, at: (i32, i32)) {
		self.view.pointer_drag_start(at);
	}

	/// Pan to a screen point.
	pub fn pointer_drag_move(&mut self, at: (i32, i32)) {
		self.view.pointer_drag_move(at);
	}

	/// Stop panning.
	pub fn pointer_drag_end(&mut self) {
		self.view.pointer_drag_end();
	}

	/// Snapshot of everything the renderer draws.
	pub fn frame(&self) -> Frame {
		let graph = &self.graph;
		let at = |id: NodeId| graph.city(id).at;
		Frame {
			roads: graph
				.roads()
				.map(|r| RoadLine {
					a: at(r.a),
					b: at(r.b),
					km: r.km,
				})
				.collect(),
			route: self
				.session
				.legs()
				.into_iter()
				.map(|leg| RouteLine {
					from: at(leg.from),
					to: at(leg.to),
					traversed: leg.traversed,
				})
				.collect(),
			marker: self.session.current_position(graph),
			cities: graph
				.cities()
				.map(|(id, city)| CityMark {
					name: city.name.clone(),
					at: city.at,
					highlight: self.highlight(id),
				})
				.collect(),
			zoom: self.view.zoom(),
			pan: self.view.pan(),
		}
	}

	fn highlight(&self, id: NodeId) -> Highlight {
		match self.routed {
			Some((source, _)) if source == id => Highlight::Source,
			Some((_, destination)) if destination == id => Highlight::Destination,
			_ => Highlight::Default,
		}
	}

	fn publish_summary(&mut self) {
		let Some(route) = self.session.route() else {
			return;
		};
		let names = route.names(&self.graph);
		let summary = RouteSummary {
			source: names[0].to_string(),
			destination: names[names.len() - 1].to_string(),
			route: names.iter().map(|n| n.to_string()).collect(),
			total_km: route.total_km(),
		};
		debug!("route complete: {} km", summary.total_km);
		self.summary = Some(summary);
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::routing::cities;
	use crate::routing::graph::Point;

	/// Records timer calls instead of firing; tests call `on_tick` by hand.
	#[derive(Debug, Default)]
	struct ManualScheduler {
		running: Option<Duration>,
		starts: usize,
		stops: usize,
	}

	impl Scheduler for ManualScheduler {
		fn start(&mut self, period: Duration) {
			assert!(self.running.is_none(), "timer started twice without a stop");
			self.running = Some(period);
			self.starts += 1;
		}

		fn stop(&mut self) {
			self.running = None;
			self.stops += 1;
		}
	}

	fn controller(graph: Graph) -> RouteController<ManualScheduler> {
		RouteController::new(Rc::new(graph), ManualScheduler::default(), RouteConfig::default())
	}

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

	/// Six cities in a row, so a route has five segments.
	fn six_in_a_row() -> Graph {
		let mut g = Graph::new();
		for (i, name) in ["P", "Q", "R", "S", "T", "U"].into_iter().enumerate() {
			g.add_node(name, i as f64 * 10.0, 0.0).unwrap();
		}
		for pair in ["P", "Q", "R", "S", "T", "U"].windows(2) {
			g.connect(pair[0], pair[1], 7).unwrap();
		}
		g
	}

	fn run_until_city(c: &mut RouteController<ManualScheduler>, index: usize) {
		while c.session().playback_index() < index {
			assert_ne!(c.on_tick(), Tick::Ignored);
		}
	}

	#[test]
	fn route_request_starts_timer_and_completes_with_summary() {
		let mut c = controller(triangle());
		c.select_source("A").unwrap();
		c.select_destination("C").unwrap();

		assert_eq!(c.request_route(), Ok(Playback::Running));
		assert_eq!(c.scheduler().running, Some(Duration::from_millis(30)));
		assert_eq!(c.session().route().unwrap().total_km(), 10);

		let mut ticks = 0;
		while c.on_tick() != Tick::Completed {
			ticks += 1;
			assert!(c.take_summary().is_none());
		}
		assert_eq!(ticks + 1, 50);
		assert_eq!(c.scheduler().running, None);
		assert_eq!(c.playback(), Playback::Completed);

		let summary = c.take_summary().unwrap();
		assert_eq!(summary.route, ["A", "B", "C"]);
		assert_eq!(summary.total_km, 10);
		assert_eq!(c.take_summary(), None);
	}

	#[test]
	fn same_city_completes_immediately_without_timer() {
		let mut c = controller(triangle());
		c.select_source("A").unwrap();
		c.select_destination("A").unwrap();

		assert_eq!(c.request_route(), Ok(Playback::Completed));
		assert_eq!(c.scheduler().starts, 0);
		assert_eq!(c.session().playback_index(), 0);
		assert!(c.session().is_complete());

		let summary = c.take_summary().unwrap();
		assert_eq!(summary.route, ["A"]);
		assert_eq!(summary.total_km, 0);
		assert_eq!(c.frame().marker, Some(Point::new(0.0, 0.0)));
	}

	#[test]
	fn new_request_supersedes_running_route() {
		let mut c = controller(six_in_a_row());
		c.select_source("P").unwrap();
		c.select_destination("U").unwrap();
		c.request_route().unwrap();
		run_until_city(&mut c, 2);
		assert_eq!(c.session().route().unwrap().len(), 6);

		c.select_source("S").unwrap();
		c.select_destination("Q").unwrap();
		assert_eq!(c.request_route(), Ok(Playback::Running));
		assert_eq!(c.session().playback_index(), 0);
		assert_eq!(c.session().progress(), 0.0);
		assert_eq!(c.scheduler().starts, 2);
		assert_eq!(c.scheduler().running, Some(Duration::from_millis(30)));

		let names = c.session().route().unwrap().names(c.graph());
		assert_eq!(names, ["S", "R", "Q"]);
		c.on_tick();
		assert_eq!(c.session().playback_index(), 0);
		assert!(c.frame().marker.unwrap().x < 30.0);
	}

	#[test]
	fn no_path_leaves_session_empty_and_timer_stopped() {
		let mut g = triangle();
		g.add_node("Island", 99.0, 99.0).unwrap();
		let mut c = controller(g);
		c.select_source("A").unwrap();
		c.select_destination("C").unwrap();
		c.request_route().unwrap();
		c.on_tick();

		c.select_destination("Island").unwrap();
		assert!(matches!(c.request_route(), Err(RoutingError::NoPath { .. })));
		assert!(c.session().is_empty());
		assert_eq!(c.playback(), Playback::Idle);
		assert_eq!(c.scheduler().running, None);
		assert_eq!(c.on_tick(), Tick::Ignored);
		assert!(c.frame().route.is_empty());
	}

	#[test]
	fn selection_errors() {
		let mut c = controller(triangle());
		assert_eq!(c.select_source("Nowhere"), Err(RoutingError::UnknownNode("Nowhere".into())));
		assert_eq!(c.request_route(), Err(RoutingError::SelectionMissing(Endpoint::Source)));
		c.select_source("A").unwrap();
		assert_eq!(
			c.request_route(),
			Err(RoutingError::SelectionMissing(Endpoint::Destination))
		);
		assert_eq!(c.scheduler().starts, 0);
	}

	#[test]
	fn reset_is_idempotent_and_keeps_view() {
		let mut c = controller(triangle());
		c.select_source("A").unwrap();
		c.select_destination("C").unwrap();
		c.request_route().unwrap();
		c.on_tick();
		c.pointer_wheel(-1.0);
		c.pointer_drag_start((0, 0));
		c.pointer_drag_move((4, 9));

		c.reset_route();
		c.reset_route();
		assert!(c.session().is_empty());
		assert_eq!(c.playback(), Playback::Idle);
		assert_eq!(c.scheduler().running, None);
		assert_eq!(c.take_summary(), None);
		assert_eq!(c.view().pan(), (4, 9));
		assert!((c.view().zoom() - 1.1).abs() < 1e-12);
	}

	#[test]
	fn view_input_does_not_touch_route() {
		let mut c = controller(triangle());
		c.select_source("A").unwrap();
		c.select_destination("C").unwrap();
		c.request_route().unwrap();
		for _ in 0..10 {
			c.on_tick();
		}
		let before = (c.session().playback_index(), c.session().progress());

		c.pointer_wheel(1.0);
		c.pointer_drag_start((3, 3));
		c.pointer_drag_move((10, -2));
		c.pointer_drag_end();

		assert_eq!((c.session().playback_index(), c.session().progress()), before);
		assert_eq!(c.playback(), Playback::Running);
	}

	#[test]
	fn highlights_follow_the_requested_route_not_the_selection() {
		let mut c = controller(triangle());
		c.select_source("A").unwrap();
		c.select_destination("C").unwrap();
		let highlights = |c: &RouteController<ManualScheduler>| {
			c.frame().cities.into_iter().map(|m| (m.name, m.highlight)).collect::<Vec<_>>()
		};
		assert!(highlights(&c).iter().all(|(_, h)| *h == Highlight::Default));

		c.request_route().unwrap();
		c.on_tick();
		c.select_source("B").unwrap();
		c.select_destination("B").unwrap();
		let expected = vec![
			("A".to_string(), Highlight::Source),
			("B".to_string(), Highlight::Default),
			("C".to_string(), Highlight::Destination),
		];
		assert_eq!(highlights(&c), expected);

		c.reset_route();
		assert_eq!(highlights(&c), expected);

		c.request_route().unwrap();
		let frame = c.frame();
		assert_eq!(frame.cities[1].highlight, Highlight::Source);
		assert!(frame.cities.iter().all(|m| m.highlight != Highlight::Destination));
	}

	#[test]
	fn stalling_progress_step_still_completes() {
		for step in [0.0, -1.0, f64::NAN] {
			let config = RouteConfig {
				progress_step: step,
				..RouteConfig::default()
			};
			let mut c = RouteController::new(Rc::new(triangle()), ManualScheduler::default(), config);
			c.select_source("A").unwrap();
			c.select_destination("C").unwrap();
			c.request_route().unwrap();

			let mut ticks = 0;
			while c.on_tick() != Tick::Completed {
				ticks += 1;
				assert!(ticks < 1000, "driver never completed with step {step}");
			}
			assert_eq!(c.playback(), Playback::Completed);
			assert_eq!(c.scheduler().running, None);
		}
	}

	#[test]
	fn frame_reports_network_route_and_highlights() {
		let mut c = controller(cities::gujarat().unwrap());
		c.select_source("Ahmedabad").unwrap();
		c.select_destination("Nadiad").unwrap();
		c.request_route().unwrap();
		run_until_city(&mut c, 1);

		let frame = c.frame();
		assert_eq!(frame.roads.len(), cities::ROADS.len());
		assert_eq!(frame.cities.len(), cities::CITIES.len());
		let highlight = |name: &str| frame.cities.iter().find(|m| m.name == name).unwrap().highlight;
		assert_eq!(highlight("Ahmedabad"), Highlight::Source);
		assert_eq!(highlight("Nadiad"), Highlight::Destination);
		assert_eq!(highlight("Patan"), Highlight::Default);

		// Ahmedabad -> Kheda -> Nadiad and Ahmedabad -> Khatraj -> Nadiad tie at 55 km.
		assert_eq!(frame.route.len(), 2);
		assert!(frame.route[0].traversed);
		assert!(!frame.route[1].traversed);
		assert_eq!(frame.marker, Some(frame.route[1].from));
		assert_eq!((frame.zoom, frame.pan), (1.0, (0, 0)));
	}
}
