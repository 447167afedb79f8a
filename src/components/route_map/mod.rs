mod component;
mod frame_loop;
mod render;
mod scheduler;

pub use component::RouteMap;
