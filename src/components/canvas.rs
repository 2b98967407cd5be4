use crate::engine::{PathPrimitive, Sketch};
use crate::util::*;
use leptos::prelude::*;

#[component]
pub fn StrokePath(primitive: PathPrimitive) -> impl IntoView {
	let PathPrimitive {
		d,
		stroke,
		stroke_width,
	} = primitive;
	view! {
		<path
			d=d
			stroke=stroke.to_string()
			stroke-width=stroke_width.to_string()
			fill={PathPrimitive::FILL}
		/>
	}
}

/// The surface strokes are drawn on.
///
/// Only the primary pointer draws. Its position is sampled on every move, relative to the surface.
#[component]
pub fn DrawingCanvas() -> impl IntoView {
	let sketch: RwSignal<Sketch> = expect_context();

	// Keep touch drags from scrolling the page.
	let touchstart = move |e: leptos::ev::TouchEvent| {
		e.prevent_default();
	};

	let pointerdown = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() {
			return;
		}
		e.prevent_default();
		let Some(point) = e.get_point() else {
			return;
		};
		e.set_pointer_capture();
		sketch.maybe_update(|sketch| sketch.start_interaction(point));
	};

	let pointermove = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() {
			return;
		}
		let Some(point) = e.get_point() else {
			return;
		};
		sketch.maybe_update(|sketch| sketch.move_interaction(point));
	};

	let pointerup = move |e: leptos::ev::PointerEvent| {
		if e.is_primary() {
			sketch.maybe_update(Sketch::end_interaction);
		}
	};

	let pointercancel = move |e: leptos::ev::PointerEvent| {
		if e.is_primary() {
			sketch.maybe_update(Sketch::cancel_interaction);
		}
	};

	let paths = move || {
		sketch
			.with(Sketch::render_list)
			.into_iter()
			.map(|primitive| view! { <StrokePath primitive=primitive /> })
			.collect_view()
	};

	view! {
		<div
			class="DrawingCanvas"
			style="touch-action: none"
			on:touchstart=touchstart
			on:pointerdown=pointerdown
			on:pointermove=pointermove
			on:pointerup=pointerup
			on:pointercancel=pointercancel
		>
			<svg class="DrawingSurface" width="100%" height="100%">
				{paths}
			</svg>
		</div>
	}
}
