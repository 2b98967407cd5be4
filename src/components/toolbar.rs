use super::{BrushSetting, ColorPicker};
use crate::config::SketchConfig;
use crate::engine::Sketch;
use crate::util::*;
use leptos::prelude::*;

/// Palette swatches, the width slider and the Clear button.
#[component]
pub fn Toolbar() -> impl IntoView {
	let sketch: RwSignal<Sketch> = expect_context();
	let config: SketchConfig = expect_context();

	let palette = config.palette().to_vec();
	let min = config.min_stroke_width().to_string();
	let max = config.max_stroke_width().to_string();

	let width = Signal::derive(move || sketch.with(|sketch| sketch.tool().stroke_width().to_string()));
	let set_width = move |value: String| {
		if let Some(width) = config.parse_stroke_width(&value).ok_or_log() {
			sketch.update(|sketch| sketch.set_stroke_width(width));
		}
	};

	let clear = move |_: leptos::ev::MouseEvent| sketch.update(Sketch::clear);

	view! {
		<div class="Toolbar">
			<ColorPicker palette=palette />
			<BrushSetting name="Width" value=width>
				<input
					type="range"
					min=min
					max=max
					step="1"
					prop:value=move || width.get()
					on:input=move |ev| set_width(event_target_value(&ev))
				/>
			</BrushSetting>
			<button class="ClearButton" on:click=clear>
				"Clear"
			</button>
		</div>
	}
}
