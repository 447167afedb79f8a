pub mod route_map;
