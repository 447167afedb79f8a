use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};

use crate::components::route_map::RouteMap;
use crate::routing::cities;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="route-page">
				// A malformed road table stops here instead of rendering a partial map.
				{cities::gujarat()
					.inspect(|g| info!("loaded {} cities", g.len()))
					.inspect_err(|e| error!("road network failed to load: {e}"))
					.map(|graph| view! { <RouteMap graph=Rc::new(graph) /> })}
			</div>
		</ErrorBoundary>
	}
}
