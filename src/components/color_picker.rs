use crate::engine::{Color, Sketch};
use leptos::prelude::*;

#[component]
pub fn ColorSwatch(color: Color) -> impl IntoView {
	let sketch: RwSignal<Sketch> = expect_context();

	let selected = {
		let color = color.clone();
		move || sketch.with(|sketch| sketch.tool().color() == &color)
	};
	let style = format!("background-color: {color}");
	let label = format!("Draw in {color}");
	let select = move |_: leptos::ev::MouseEvent| {
		let color = color.clone();
		sketch.update(move |sketch| sketch.select_color(color));
	};

	view! {
		<button
			class="ColorSwatch"
			class:selected=selected
			style=style
			aria-label=label
			on:click=select
		></button>
	}
}

/// One swatch per palette color. The selected swatch gets the `selected` class.
#[component]
pub fn ColorPicker(palette: Vec<Color>) -> impl IntoView {
	view! {
		<div class="ColorPicker">
			{palette
				.into_iter()
				.map(|color| view! { <ColorSwatch color=color /> })
				.collect_view()}
		</div>
	}
}
