use leptos::prelude::*;

/// A labelled row in the toolbar holding one brush control.
#[component]
pub fn BrushSetting(
	#[prop(into)] name: String,
	#[prop(optional, into)] value: Option<Signal<String>>,
	children: Children,
) -> impl IntoView {
	view! {
		<label class="BrushSetting">
			<span class="BrushSettingName">{name}</span>
			{children()}
			{value.map(|value| view! { <span class="BrushSettingValue">{move || value.get()}</span> })}
		</label>
	}
}
