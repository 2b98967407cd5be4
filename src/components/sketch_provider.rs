use crate::config::SketchConfig;
use crate::engine::Sketch;
use leptos::prelude::*;

/// Owns the drawing state for one surface and provides it to its descendants.
///
/// Descendants read `RwSignal<Sketch>` and `SketchConfig` from context. `DrawingCanvas` and
/// `Toolbar` must have this as an ancestor.
#[component]
pub fn SketchProvider(
	#[prop(optional)] config: Option<SketchConfig>,
	children: Children,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	tracing::info!(?config, "SketchProvider");
	provide_context(RwSignal::new(Sketch::new(&config)));
	provide_context(config);
	children()
}
