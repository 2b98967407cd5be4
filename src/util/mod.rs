mod result_ext;
pub use result_ext::*;

use crate::geom::Point;
use glam::Vec2;
use wasm_bindgen::JsCast;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

#[derive(thiserror::Error, Debug)]
#[error("event has no element as its current target")]
pub struct NoCurrentElement;

fn current_element(event: &web_sys::Event) -> Option<web_sys::Element> {
	event
		.current_target()
		.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
		.ok_or(NoCurrentElement)
		.ok_or_log()
}

pub trait PointerCapture {
	fn set_pointer_capture(&self) -> bool;
}

impl PointerCapture for leptos::ev::PointerEvent {
	fn set_pointer_capture(&self) -> bool {
		current_element(self)
			.and_then(|element| {
				element
					.set_pointer_capture(self.pointer_id())
					.map_err(JsError::from)
					.ok_or_log()
			})
			.is_some()
	}
}

/// Translates a viewport position into the content space of an element.
///
/// `origin` is the top-left corner of the element's border box and `border` the widths of its left
/// and top borders, so the result is relative to what the element's children are laid out in.
pub fn to_local(client: Vec2, origin: Vec2, border: Vec2) -> Vec2 {
	client - origin - border
}

pub trait CoordinateSource {
	/// Position relative to the content box of the element handling the event, in CSS pixels.
	fn get_coordinates(&self) -> Option<Vec2>;

	fn get_point(&self) -> Option<Point> {
		self.get_coordinates().map(Point::from)
	}
}

impl CoordinateSource for leptos::ev::PointerEvent {
	fn get_coordinates(&self) -> Option<Vec2> {
		let element = current_element(self)?;
		let rect = element.get_bounding_client_rect();
		Some(to_local(
			Vec2::new(self.client_x() as f32, self.client_y() as f32),
			Vec2::new(rect.left() as f32, rect.top() as f32),
			Vec2::new(element.client_left() as f32, element.client_top() as f32),
		))
	}
}
