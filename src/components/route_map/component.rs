use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::frame_loop::FrameLoop;
use super::render;
use super::scheduler::IntervalScheduler;
use crate::routing::{Graph, Playback, RouteConfig, RouteController, RoutingError, Tick};

type Controller = RouteController<IntervalScheduler>;

/// Map of the road network with route selection and an animated route marker.
#[component]
pub fn RouteMap(
	graph: Rc<Graph>,
	#[prop(default = None)] config: Option<RouteConfig>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let names: Vec<String> = graph.cities().map(|(_, c)| c.name.clone()).collect();
	let controller: Rc<RefCell<Controller>> = Rc::new(RefCell::new(RouteController::new(
		graph,
		IntervalScheduler::default(),
		config.unwrap_or_default(),
	)));
	let (summary, set_summary) = signal(String::new());

	// The browser selects the first option of each list until the user picks another.
	if let Some(first) = names.first() {
		let mut c = controller.borrow_mut();
		let _ = c.select_source(first);
		let _ = c.select_destination(first);
	}

	let weak = Rc::downgrade(&controller);
	controller.borrow_mut().scheduler_mut().set_callback(move || {
		let Some(controller) = weak.upgrade() else {
			return;
		};
		let mut c = controller.borrow_mut();
		if c.on_tick() == Tick::Completed {
			if let Some(s) = c.take_summary() {
				info!("route finished: {} km", s.total_km);
				set_summary.set(s.to_string());
			}
		}
	});

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller_init = controller.clone();

	// The effect keeps the render loop as its value: a re-run replaces it and
	// disposing the component drops it, which cancels the pending frame.
	Effect::new(move |_: Option<Option<Rc<RefCell<FrameLoop>>>>| {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();

		let parent = canvas.parent_element();
		let (w, h) = (
			width.unwrap_or_else(|| parent.as_ref().map(|p| p.client_width() as f64).unwrap_or(1300.0)),
			height.unwrap_or(650.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("canvas has no 2d context");
			return None;
		};

		let controller_anim = controller_init.clone();
		let mut flow_time = 0.0;
		Some(FrameLoop::start(move || {
			flow_time += 0.016;
			render::render(&controller_anim.borrow().frame(), &ctx, w, h, flow_time);
		}))
	});

	let c_src = controller.clone();
	let on_source = move |ev: Event| {
		if let Err(e) = c_src.borrow_mut().select_source(&event_target_value(&ev)) {
			warn!("{e}");
		}
	};

	let c_dst = controller.clone();
	let on_destination = move |ev: Event| {
		if let Err(e) = c_dst.borrow_mut().select_destination(&event_target_value(&ev)) {
			warn!("{e}");
		}
	};

	let c_find = controller.clone();
	let on_find = move |_: MouseEvent| {
		let result = c_find.borrow_mut().request_route();
		let text = match result {
			Ok(Playback::Completed) => c_find
				.borrow_mut()
				.take_summary()
				.map(|s| s.to_string())
				.unwrap_or_default(),
			Ok(_) => String::new(),
			Err(e @ RoutingError::NoPath { .. }) => format!("No route available: {e}"),
			Err(e) => e.to_string(),
		};
		set_summary.set(text);
	};

	let c_reset = controller.clone();
	let on_reset = move |_: MouseEvent| {
		c_reset.borrow_mut().reset_route();
		set_summary.set(String::new());
	};

	let c_md = controller.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some(at) = canvas_point(canvas_ref, &ev) {
			c_md.borrow_mut().pointer_drag_start(at);
		}
	};

	let c_mm = controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(at) = canvas_point(canvas_ref, &ev) {
			c_mm.borrow_mut().pointer_drag_move(at);
		}
	};

	let c_mu = controller.clone();
	let on_mouseup = move |_: MouseEvent| c_mu.borrow_mut().pointer_drag_end();

	let c_ml = controller.clone();
	let on_mouseleave = move |_: MouseEvent| c_ml.borrow_mut().pointer_drag_end();

	let c_wh = controller;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		c_wh.borrow_mut().pointer_wheel(ev.delta_y());
	};

	view! {
		<div class="route-map">
			<header class="route-toolbar">
				<h1>"Smart City Route Visualizer (Dijkstra)"</h1>
				<label>"Source" <select on:change=on_source>{city_options(&names)}</select></label>
				<label>
					"Destination" <select on:change=on_destination>{city_options(&names)}</select>
				</label>
				<button on:click=on_find>"Find Shortest Path"</button>
				<button on:click=on_reset>"Reset Route"</button>
			</header>
			<pre class="route-summary">{move || summary.get()}</pre>
			<canvas
				node_ref=canvas_ref
				class="route-map-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}

fn city_options(names: &[String]) -> impl IntoView + use<> {
	names
		.iter()
		.map(|name| {
			let (value, label) = (name.clone(), name.clone());
			view! { <option value=value>{label}</option> }
		})
		.collect_view()
}

/// Pointer position relative to the canvas' top-left corner.
fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(i32, i32)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		(ev.client_x() as f64 - rect.left()) as i32,
		(ev.client_y() as f64 - rect.top()) as i32,
	))
}
