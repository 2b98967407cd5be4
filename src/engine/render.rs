use super::{Canvas, Color, Stroke, StrokeWidth};

/// One unfilled vector path, ready to become an SVG `<path>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
	pub d: String,
	pub stroke: Color,
	pub stroke_width: StrokeWidth,
}

impl PathPrimitive {
	pub const FILL: &'static str = "none";
}

impl From<&Stroke> for PathPrimitive {
	fn from(stroke: &Stroke) -> Self {
		Self {
			d: stroke.path(),
			stroke: stroke.color().clone(),
			stroke_width: stroke.width(),
		}
	}
}

/// The render tree for `canvas`: completed strokes in order, then the in-progress stroke.
///
/// Single-point strokes are kept with an empty `d`, which draws nothing.
pub fn render_list(canvas: &Canvas) -> Vec<PathPrimitive> {
	canvas.strokes().map(PathPrimitive::from).collect()
}
