use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NODE_RADIUS};

const BACKGROUND: &str = "#ffffff";
/// Particles travelling along each link, source to target.
const PARTICLES_PER_LINK: usize = 2;
/// Fraction of a link a particle covers per second.
const PARTICLE_SPEED: f64 = 0.3;
const PARTICLE_RADIUS: f64 = 1.6;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = ease_out_cubic(state.hover.highlight_t);
	let phase = (state.flow_time * PARTICLE_SPEED).fract();

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		if (dx * dx + dy * dy).sqrt() < 0.001 {
			return;
		}

		// highlighted links darken while the rest fade out
		let alpha = if state.is_highlighted(n1.index()) && state.is_highlighted(n2.index()) {
			0.35 + 0.45 * t
		} else {
			0.35 - 0.25 * t
		};

		ctx.set_stroke_style_str(&format!("rgba(71, 85, 105, {})", alpha));
		ctx.set_line_width(1.0 / k);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		ctx.set_fill_style_str(&format!("rgba(71, 85, 105, {})", (alpha + 0.2).min(1.0)));
		for i in 0..PARTICLES_PER_LINK {
			let p = (phase + i as f64 / PARTICLES_PER_LINK as f64).fract();
			ctx.begin_path();
			let _ = ctx.arc(x1 + dx * p, y1 + dy * p, PARTICLE_RADIUS / k.max(0.5), 0.0, 2.0 * PI);
			ctx.fill();
		}
	});
}

/// Outline marking a node whose children are folded away.
fn draw_collapsed_ring(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, k: f64, alpha: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius + 2.5 / k, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&format!("rgba(15, 23, 42, {})", alpha));
	ctx.set_line_width(1.2 / k);
	ctx.stroke();
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &str, x: f64, y: f64, radius: f64, k: f64, alpha: f64) {
	ctx.set_fill_style_str(&format!("rgba(30, 41, 59, {})", alpha));
	ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
	let _ = ctx.fill_text(label, x + radius + 3.0, y + 3.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	// Dimmed pass first so highlighted nodes end up on top.
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if has_highlight && state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (alpha, radius) = (1.0 - 0.7 * t, NODE_RADIUS * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if info.collapsed {
			draw_collapsed_ring(ctx, x, y, radius, k, 0.8 * alpha);
		}
		if let Some(label) = &info.label {
			draw_label(ctx, label, x, y, radius, k, 0.8 * alpha);
		}
	});

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = state.is_hovered(idx);

		let (radius, halo) = if is_hovered {
			(NODE_RADIUS * (1.0 + 0.35 * t), NODE_RADIUS * (1.8 + 1.2 * t))
		} else {
			(NODE_RADIUS * (1.0 + 0.2 * t), NODE_RADIUS * (1.4 + 0.6 * t))
		};

		if t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, halo, 0.0, 2.0 * PI);
			ctx.set_global_alpha(if is_hovered { 0.25 * t } else { 0.12 * t });
			ctx.set_fill_style_str(&info.color);
			ctx.fill();
			ctx.set_global_alpha(1.0);
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if info.collapsed {
			draw_collapsed_ring(ctx, x, y, radius, k, 0.9);
		}
		if let Some(label) = &info.label {
			draw_label(ctx, label, x, y, radius, k, 1.0);
		}
	});
}
