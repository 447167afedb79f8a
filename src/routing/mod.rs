//! Shortest-route engine and the animation state behind the map.
//!
//! Nothing in here touches the browser, so the whole module runs and tests
//! natively. The UI layer feeds user commands and timer ticks into a
//! [`RouteController`] and draws the [`Frame`] it produces.

pub mod cities;
mod config;
mod controller;
mod dijkstra;
mod driver;
mod error;
mod feed;
mod graph;
mod session;
mod view;

pub use config::RouteConfig;
pub use controller::RouteController;
pub use dijkstra::{Route, Strategy, shortest_path, shortest_path_with};
pub use driver::{AnimationDriver, Playback, Scheduler, Tick};
pub use error::{Endpoint, RoutingError};
pub use feed::{CityMark, Frame, Highlight, RoadLine, RouteLine, RouteSummary};
pub use graph::{City, Edge, EdgeDef, Graph, NodeDef, NodeId, Point, Road};
pub use session::{Leg, RouteSession};
pub use view::ViewState;
