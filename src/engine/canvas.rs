use super::{ActiveStroke, Stroke, ToolState};
use crate::geom::Point;

/// Whether a pointer is currently drawing.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Interaction {
	#[default]
	Idle,
	Drawing(ActiveStroke),
}

/// Completed strokes plus the single in-progress one.
///
/// Every gesture operation returns whether it changed anything. Events that arrive out of sequence
/// (a move or release with nothing being drawn, a second press while drawing) are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Canvas {
	completed: Vec<Stroke>,
	interaction: Interaction,
}

impl Canvas {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn completed(&self) -> &[Stroke] {
		&self.completed
	}

	pub fn interaction(&self) -> &Interaction {
		&self.interaction
	}

	pub fn in_progress(&self) -> Option<&Stroke> {
		match &self.interaction {
			Interaction::Idle => None,
			Interaction::Drawing(active) => Some(active.stroke()),
		}
	}

	pub fn is_drawing(&self) -> bool {
		matches!(self.interaction, Interaction::Drawing(_))
	}

	/// Completed strokes in drawing order, followed by the in-progress stroke if any.
	pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
		self.completed.iter().chain(self.in_progress())
	}

	pub fn start_interaction(&mut self, point: Point, tool: &ToolState) -> bool {
		match self.interaction {
			Interaction::Drawing(_) => {
				tracing::trace!(%point, "start ignored, already drawing");
				false
			}
			Interaction::Idle => {
				tracing::trace!(%point, color = %tool.color(), "start stroke");
				self.interaction = Interaction::Drawing(ActiveStroke::begin(
					point,
					tool.color().clone(),
					tool.stroke_width(),
				));
				true
			}
		}
	}

	pub fn move_interaction(&mut self, point: Point) -> bool {
		match &mut self.interaction {
			Interaction::Idle => false,
			Interaction::Drawing(active) => {
				active.add_point(point);
				true
			}
		}
	}

	pub fn end_interaction(&mut self) -> bool {
		match std::mem::take(&mut self.interaction) {
			Interaction::Idle => {
				tracing::trace!("end ignored, not drawing");
				false
			}
			Interaction::Drawing(active) => {
				let stroke = active.finish();
				tracing::debug!(
					points = stroke.points().len(),
					completed = self.completed.len() + 1,
					"stroke completed"
				);
				self.completed.push(stroke);
				true
			}
		}
	}

	/// Drops the in-progress stroke without keeping it.
	pub fn cancel_interaction(&mut self) -> bool {
		match std::mem::take(&mut self.interaction) {
			Interaction::Idle => false,
			Interaction::Drawing(active) => {
				tracing::debug!(points = active.stroke().points().len(), "stroke cancelled");
				true
			}
		}
	}

	pub fn clear(&mut self) {
		tracing::debug!(completed = self.completed.len(), "clear canvas");
		self.completed.clear();
		self.interaction = Interaction::Idle;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::{Color, StrokeWidth};
	use crate::test::*;

	#[test]
	fn start_move_end_completes_one_stroke() {
		let mut canvas = Canvas::new();
		let tool = ToolState::default();
		assert!(canvas.start_interaction(Point::new(0.0, 0.0), &tool));
		assert!(canvas.move_interaction(Point::new(1.0, 1.0)));
		assert!(canvas.move_interaction(Point::new(2.0, 2.0)));
		assert!(canvas.is_drawing());
		assert!(canvas.end_interaction());

		assert_eq!(canvas.completed().len(), 1);
		let stroke = &canvas.completed()[0];
		assert_eq!(stroke.points(), &points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])[..]);
		assert_eq!(stroke.color(), tool.color());
		assert_eq!(stroke.width(), tool.stroke_width());
		assert!(canvas.in_progress().is_none());
		assert_eq!(canvas.interaction(), &Interaction::Idle);
	}

	#[test]
	fn move_and_end_while_idle_change_nothing() {
		let mut canvas = Canvas::new();
		draw(&mut canvas, &ToolState::default(), &[(0.0, 0.0), (5.0, 5.0)]);
		let before = canvas.clone();

		assert!(!canvas.move_interaction(Point::new(9.0, 9.0)));
		assert!(!canvas.end_interaction());
		assert!(!canvas.cancel_interaction());
		assert_eq!(canvas, before);
	}

	#[test]
	fn start_while_drawing_keeps_active_stroke() {
		let mut canvas = Canvas::new();
		let tool = ToolState::default();
		canvas.start_interaction(Point::new(1.0, 1.0), &tool);
		canvas.move_interaction(Point::new(2.0, 2.0));

		let other = ToolState::new(Color::red(), StrokeWidth::DEFAULT);
		assert!(!canvas.start_interaction(Point::new(50.0, 50.0), &other));

		let active = canvas.in_progress().unwrap();
		assert_eq!(active.points(), &points(&[(1.0, 1.0), (2.0, 2.0)])[..]);
		assert_eq!(active.color(), &Color::black());
	}

	#[test]
	fn cancel_discards_only_the_active_stroke() {
		let mut canvas = Canvas::new();
		let tool = ToolState::default();
		draw(&mut canvas, &tool, &[(0.0, 0.0), (1.0, 0.0)]);
		canvas.start_interaction(Point::new(3.0, 3.0), &tool);
		canvas.move_interaction(Point::new(4.0, 4.0));

		assert!(canvas.cancel_interaction());
		assert!(!canvas.is_drawing());
		assert_eq!(canvas.completed().len(), 1);
		assert_eq!(canvas.strokes().count(), 1);
	}

	#[test]
	fn clear_empties_everything() {
		for n in [0, 1, 7] {
			let mut canvas = Canvas::new();
			let tool = ToolState::default();
			for i in 0..n {
				let offset = i as f32;
				draw(&mut canvas, &tool, &[(offset, 0.0), (offset, 10.0)]);
			}
			canvas.start_interaction(Point::new(0.0, 0.0), &tool);

			canvas.clear();
			assert!(canvas.completed().is_empty());
			assert!(canvas.in_progress().is_none());
			assert_eq!(canvas.strokes().count(), 0);
		}
	}

	#[test]
	fn strokes_lists_in_progress_last() {
		let mut canvas = Canvas::new();
		let tool = ToolState::default();
		draw(&mut canvas, &tool, &[(0.0, 0.0), (1.0, 1.0)]);
		draw(&mut canvas, &tool, &[(2.0, 2.0), (3.0, 3.0)]);
		canvas.start_interaction(Point::new(9.0, 9.0), &tool);

		let firsts: Vec<Point> = canvas.strokes().map(|s| s.points()[0]).collect();
		assert_eq!(firsts, points(&[(0.0, 0.0), (2.0, 2.0), (9.0, 9.0)]));
	}

	#[test]
	fn dense_input_is_not_thinned() {
		let mut canvas = Canvas::new();
		canvas.start_interaction(Point::new(0.0, 0.0), &ToolState::default());
		for i in 1..=1000 {
			canvas.move_interaction(Point::new(i as f32 * 0.01, 0.0));
		}
		canvas.end_interaction();
		assert_eq!(canvas.completed()[0].points().len(), 1001);
	}
}
