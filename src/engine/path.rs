//! Serialization of sampled points into SVG path data.
//!
//! Consecutive points are joined by straight segments. There is no smoothing and the path is never
//! closed.

use crate::geom::Point;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum PathCommand {
	#[display("M {_0}")]
	MoveTo(Point),
	#[display("L {_0}")]
	LineTo(Point),
}

/// Drawing commands for a polyline through `points`.
///
/// Yields nothing for fewer than two points, so a tap without a drag draws no mark.
pub fn path_commands(points: &[Point]) -> impl Iterator<Item = PathCommand> + '_ {
	let points = if points.len() < 2 { &[][..] } else { points };
	points.iter().enumerate().map(|(i, &point)| {
		if i == 0 {
			PathCommand::MoveTo(point)
		} else {
			PathCommand::LineTo(point)
		}
	})
}

/// The `d` attribute for a polyline through `points`, e.g. `"M 0 0 L 1 1 L 2 2"`.
pub fn path_string(points: &[Point]) -> String {
	path_commands(points).join(" ")
}
