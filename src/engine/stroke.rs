use super::{path_string, Color};
use crate::geom::Point;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq)]
#[error("stroke width must be finite and positive, got {0}")]
pub struct StrokeWidthError(pub f32);

/// Width of a stroke in surface pixels. Always finite and strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, derive_more::Display)]
pub struct StrokeWidth(f32);

impl StrokeWidth {
	pub const DEFAULT: Self = Self(5.0);

	pub fn new(width: f32) -> Result<Self, StrokeWidthError> {
		if width.is_finite() && width > 0.0 {
			Ok(Self(width))
		} else {
			Err(StrokeWidthError(width))
		}
	}

	pub fn get(self) -> f32 {
		self.0
	}
}

impl Default for StrokeWidth {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl TryFrom<f32> for StrokeWidth {
	type Error = StrokeWidthError;

	fn try_from(width: f32) -> Result<Self, Self::Error> {
		Self::new(width)
	}
}

/// One continuous line from pointer-down to pointer-up.
///
/// Color and width are fixed when the stroke begins. Points are kept in the order they were sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	points: Vec<Point>,
	color: Color,
	width: StrokeWidth,
}

impl Stroke {
	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn color(&self) -> &Color {
		&self.color
	}

	pub fn width(&self) -> StrokeWidth {
		self.width
	}

	pub fn path(&self) -> String {
		path_string(&self.points)
	}
}

/// The stroke under an active pointer. The only way points get added to a [`Stroke`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStroke {
	stroke: Stroke,
}

impl ActiveStroke {
	pub fn begin(point: Point, color: Color, width: StrokeWidth) -> Self {
		Self {
			stroke: Stroke {
				points: vec![point],
				color,
				width,
			},
		}
	}

	pub fn add_point(&mut self, point: Point) {
		self.stroke.points.push(point);
	}

	pub fn stroke(&self) -> &Stroke {
		&self.stroke
	}

	pub fn finish(self) -> Stroke {
		self.stroke
	}
}
