use super::{Color, StrokeWidth};

/// The color and width applied to strokes started from now on.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToolState {
	color: Color,
	stroke_width: StrokeWidth,
}

impl ToolState {
	pub fn new(color: Color, stroke_width: StrokeWidth) -> Self {
		Self {
			color,
			stroke_width,
		}
	}

	pub fn color(&self) -> &Color {
		&self.color
	}

	pub fn stroke_width(&self) -> StrokeWidth {
		self.stroke_width
	}

	pub fn select_color(&mut self, color: Color) {
		tracing::debug!(%color, "select color");
		self.color = color;
	}

	pub fn set_stroke_width(&mut self, stroke_width: StrokeWidth) {
		tracing::debug!(%stroke_width, "set stroke width");
		self.stroke_width = stroke_width;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_black_width_five() {
		let tool = ToolState::default();
		assert_eq!(tool.color(), &Color::black());
		assert_eq!(tool.stroke_width().get(), 5.0);
	}

	#[test]
	fn setters_replace_current_values() -> anyhow::Result<()> {
		let mut tool = ToolState::default();
		tool.select_color(Color::blue());
		tool.set_stroke_width(StrokeWidth::new(12.0)?);
		assert_eq!(tool, ToolState::new(Color::blue(), StrokeWidth::new(12.0)?));
		Ok(())
	}
}
