use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::routing::{Frame, Highlight};

const CITY_RADIUS: f64 = 15.0;
const MARKER_RADIUS: f64 = 7.0;
const ROUTE_WIDTH: f64 = 3.0;

pub fn render(frame: &Frame, ctx: &CanvasRenderingContext2d, width: f64, height: f64, flow_time: f64) {
	ctx.set_fill_style_str("black");
	ctx.fill_rect(0.0, 0.0, width, height);
	ctx.save();
	let _ = ctx.translate(frame.pan.0 as f64, frame.pan.1 as f64);
	let _ = ctx.scale(frame.zoom, frame.zoom);
	ctx.set_font("bold 12px 'Segoe UI', sans-serif");
	draw_roads(frame, ctx);
	draw_route(frame, ctx, flow_time);
	draw_marker(frame, ctx);
	draw_cities(frame, ctx);
	ctx.restore();
}

fn draw_roads(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.0);
	for road in &frame.roads {
		ctx.set_stroke_style_str("gray");
		ctx.begin_path();
		ctx.move_to(road.a.x, road.a.y);
		ctx.line_to(road.b.x, road.b.y);
		ctx.stroke();

		let (mx, my) = ((road.a.x + road.b.x) / 2.0, (road.a.y + road.b.y) / 2.0);
		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&format!("{} km", road.km), mx + 6.0, my - 6.0);
	}
}

fn draw_route(frame: &Frame, ctx: &CanvasRenderingContext2d, flow_time: f64) {
	let (dash, gap) = (10.0, 6.0);
	ctx.set_line_width(ROUTE_WIDTH);
	for leg in &frame.route {
		if leg.traversed {
			ctx.set_stroke_style_str("yellow");
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		} else {
			// Legs still ahead of the marker flow towards the destination.
			ctx.set_stroke_style_str("red");
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(-(flow_time * 30.0) % (dash + gap));
		}
		ctx.begin_path();
		ctx.move_to(leg.from.x, leg.from.y);
		ctx.line_to(leg.to.x, leg.to.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_marker(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	let Some(at) = frame.marker else {
		return;
	};
	ctx.set_fill_style_str("orange");
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, MARKER_RADIUS, 0.0, 2.0 * PI);
	ctx.fill();
}

fn draw_cities(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	for city in &frame.cities {
		let fill = match city.highlight {
			Highlight::Source => "lime",
			Highlight::Destination => "cyan",
			Highlight::Default => "lightgray",
		};
		ctx.set_fill_style_str(fill);
		ctx.begin_path();
		let _ = ctx.arc(city.at.x, city.at.y, CITY_RADIUS, 0.0, 2.0 * PI);
		ctx.fill();

		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&city.name, city.at.x - 22.0, city.at.y + 28.0);
	}
}
