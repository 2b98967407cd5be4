use glam::Vec2;

/// A position in surface-local pixel space.
///
/// Displays as `"{x} {y}"`, which is the coordinate pair syntax of an SVG path.
#[derive(Debug, Default, Clone, Copy, PartialEq, derive_more::Display)]
#[display("{x} {y}")]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

impl From<Vec2> for Point {
	fn from(v: Vec2) -> Self {
		Self::new(v.x, v.y)
	}
}

impl From<Point> for Vec2 {
	fn from(p: Point) -> Self {
		Vec2::new(p.x, p.y)
	}
}

impl From<(f32, f32)> for Point {
	fn from((x, y): (f32, f32)) -> Self {
		Self::new(x, y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_uses_shortest_float_form() {
		assert_eq!(Point::new(10.0, 20.0).to_string(), "10 20");
		assert_eq!(Point::new(10.5, -3.25).to_string(), "10.5 -3.25");
	}

	#[test]
	fn converts_from_vec2() {
		let p: Point = Vec2::new(1.5, 2.0).into();
		assert_eq!(p, Point::new(1.5, 2.0));
		assert_eq!(Vec2::from(p), Vec2::new(1.5, 2.0));
	}
}
