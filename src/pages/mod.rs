use crate::components::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="Draw"/>
		<SketchProvider>
			<div class="Home">
				<DrawingCanvas/>
				<Toolbar/>
			</div>
		</SketchProvider>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
