use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{CLICK_SLOP, ForceGraphState};
use super::types::GraphData;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Empty a shared slot, returning what it held. The frame closure keeps a
/// handle to its own slot, so the slot has to be emptied to free it.
fn release<T>(slot: &Rc<RefCell<Option<T>>>) -> Option<T> {
	slot.borrow_mut().take()
}

/// Canvas size: explicit props win, otherwise the parent's box.
fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(600.0)
		}),
	)
}

/// Pointer position relative to the canvas.
fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Force-directed graph on a canvas.
///
/// `data` is loaded once on mount; later changes re-sync the simulation while
/// keeping node positions. Pressing and releasing on a node without dragging
/// it calls `on_node_click` with the node id.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] on_node_click: Option<Callback<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	// Handle of the pending animation frame.
	let frame = Rc::new(Cell::new(0));
	let (frame_init, frame_drop) = (frame.clone(), SendWrapper::new(frame));

	let (animate_drop, resize_drop, state_drop) = (
		SendWrapper::new(animate.clone()),
		SendWrapper::new(resize_cb.clone()),
		SendWrapper::new(state.clone()),
	);
	on_cleanup(move || {
		if let Some(win) = web_sys::window() {
			let _ = win.cancel_animation_frame(frame_drop.get());
			if let Some(cb) = release(&*resize_drop) {
				let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		release(&*animate_drop);
		release(&*state_drop);
		debug!("force graph: renderer released");
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			error!("force graph: no window");
			return;
		};

		let (w, h) = measure(&canvas, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("force graph: 2d context unavailable");
			return;
		};
		*state_init.borrow_mut() = Some(ForceGraphState::new(&data.get_untracked(), w, h));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = measure(&canvas_resize, width, height);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, resize_anim, canvas_anim, frame_anim) = (
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
			canvas.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			// Canvas left the document (tab switched): stop the loop.
			if !canvas_anim.is_connected() {
				if let Some(ref cb) = *resize_anim.borrow() {
					let _ = win
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				debug!("force graph: canvas detached, animation stopped");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_anim.set(id);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(id);
			}
		}
	});

	let state_sync = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut s) = *state_sync.borrow_mut() {
			s.sync(&data);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.moved = false;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				if let Some(canvas) = canvas_ref.get() {
					let cursor = if hovered.is_some() { "pointer" } else { "grab" };
					let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
				}
			}

			if s.drag.active {
				let (dx, dy) = (x - s.drag.start_x, y - s.drag.start_y);
				if !s.drag.moved && (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
					s.drag.moved = true;
				}
				if let (true, Some(idx)) = (s.drag.moved, s.drag.node_idx) {
					let (nx, ny) = (
						s.drag.node_start_x + (dx / s.transform.k) as f32,
						s.drag.node_start_y + (dy / s.transform.k) as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = {
			let mut guard = state_mu.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			let clicked = match (s.drag.active, s.drag.moved, s.drag.node_idx) {
				(true, false, Some(idx)) => s.node_id(idx),
				_ => None,
			};
			s.drag.active = false;
			s.drag.moved = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			clicked
		};
		// The callback may update `data`, which borrows the state again.
		if let (Some(id), Some(cb)) = (clicked, on_node_click) {
			debug!("force graph: click on `{}`", id);
			cb.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.moved = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct SelfRef(Rc<RefCell<Option<SelfRef>>>);

	#[test]
	fn release_breaks_a_self_referencing_slot() {
		let slot: Rc<RefCell<Option<SelfRef>>> = Rc::new(RefCell::new(None));
		*slot.borrow_mut() = Some(SelfRef(slot.clone()));
		assert_eq!(Rc::strong_count(&slot), 2);

		let held = release(&slot);
		assert!(held.is_some());
		drop(held);
		assert_eq!(Rc::strong_count(&slot), 1);
		assert!(release(&slot).is_none());
	}
}
