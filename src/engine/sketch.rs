use super::{render_list, Canvas, Color, PathPrimitive, StrokeWidth, ToolState};
use crate::config::SketchConfig;
use crate::geom::Point;

/// Everything a drawing surface owns: its strokes and the current tool.
///
/// Gesture operations take the color and width for a new stroke from the tool state at the moment
/// the stroke starts. Changing the tool never touches existing strokes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sketch {
	canvas: Canvas,
	tool: ToolState,
}

// Held in a reactive signal, which requires thread-safe payloads.
static_assertions::assert_impl_all!(Sketch: Send, Sync);

impl Sketch {
	pub fn new(config: &SketchConfig) -> Self {
		Self {
			canvas: Canvas::new(),
			tool: ToolState::new(config.initial_color(), config.stroke_width()),
		}
	}

	pub fn canvas(&self) -> &Canvas {
		&self.canvas
	}

	pub fn tool(&self) -> &ToolState {
		&self.tool
	}

	pub fn start_interaction(&mut self, point: Point) -> bool {
		self.canvas.start_interaction(point, &self.tool)
	}

	pub fn move_interaction(&mut self, point: Point) -> bool {
		self.canvas.move_interaction(point)
	}

	pub fn end_interaction(&mut self) -> bool {
		self.canvas.end_interaction()
	}

	pub fn cancel_interaction(&mut self) -> bool {
		self.canvas.cancel_interaction()
	}

	pub fn select_color(&mut self, color: Color) {
		self.tool.select_color(color);
	}

	pub fn set_stroke_width(&mut self, stroke_width: StrokeWidth) {
		self.tool.set_stroke_width(stroke_width);
	}

	pub fn clear(&mut self) {
		self.canvas.clear();
	}

	pub fn render_list(&self) -> Vec<PathPrimitive> {
		render_list(&self.canvas)
	}
}
