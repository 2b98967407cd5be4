use crate::engine::{Color, StrokeWidth, StrokeWidthError};
use bon::bon;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	#[error("palette must contain at least one color")]
	EmptyPalette,

	#[error(transparent)]
	InvalidWidth(#[from] StrokeWidthError),

	#[error("stroke width is not a number: {0}")]
	UnparsableWidth(#[from] std::num::ParseFloatError),

	#[error("stroke width range {min}..={max} is empty")]
	EmptyRange { min: StrokeWidth, max: StrokeWidth },

	#[error("stroke width {width} is outside {min}..={max}")]
	OutOfRange {
		width: StrokeWidth,
		min: StrokeWidth,
		max: StrokeWidth,
	},
}

/// Palette and brush settings for a drawing surface.
///
/// Built with [`SketchConfig::builder`]; every field has a default, and `build` validates the
/// combination.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
	palette: Vec<Color>,
	stroke_width: StrokeWidth,
	min_stroke_width: StrokeWidth,
	max_stroke_width: StrokeWidth,
}

pub fn default_palette() -> Vec<Color> {
	vec![Color::black(), Color::red(), Color::blue()]
}

const DEFAULT_MIN_STROKE_WIDTH: f32 = 1.0;
const DEFAULT_MAX_STROKE_WIDTH: f32 = 40.0;

#[bon]
impl SketchConfig {
	#[builder]
	pub fn new(
		#[builder(default = default_palette())] palette: Vec<Color>,
		#[builder(default = StrokeWidth::DEFAULT.get())] stroke_width: f32,
		#[builder(default = DEFAULT_MIN_STROKE_WIDTH)] min_stroke_width: f32,
		#[builder(default = DEFAULT_MAX_STROKE_WIDTH)] max_stroke_width: f32,
	) -> Result<Self, ConfigError> {
		use ConfigError::*;
		if palette.is_empty() {
			Err(EmptyPalette)?;
		}
		let stroke_width = StrokeWidth::new(stroke_width)?;
		let min = StrokeWidth::new(min_stroke_width)?;
		let max = StrokeWidth::new(max_stroke_width)?;
		if min > max {
			Err(EmptyRange { min, max })?;
		}
		if stroke_width < min || stroke_width > max {
			Err(OutOfRange {
				width: stroke_width,
				min,
				max,
			})?;
		}
		Ok(Self {
			palette,
			stroke_width,
			min_stroke_width: min,
			max_stroke_width: max,
		})
	}

	pub fn palette(&self) -> &[Color] {
		&self.palette
	}

	/// The color selected before the user picks one: the first swatch.
	pub fn initial_color(&self) -> Color {
		self.palette.first().cloned().unwrap_or_default()
	}

	pub fn stroke_width(&self) -> StrokeWidth {
		self.stroke_width
	}

	pub fn min_stroke_width(&self) -> StrokeWidth {
		self.min_stroke_width
	}

	pub fn max_stroke_width(&self) -> StrokeWidth {
		self.max_stroke_width
	}

	/// Limits `width` to the configured range, for controls that can overshoot it.
	pub fn clamp_stroke_width(&self, width: StrokeWidth) -> StrokeWidth {
		if width < self.min_stroke_width {
			self.min_stroke_width
		} else if width > self.max_stroke_width {
			self.max_stroke_width
		} else {
			width
		}
	}

	/// Reads a width typed or dragged into a control, clamped to the configured range.
	pub fn parse_stroke_width(&self, input: &str) -> Result<StrokeWidth, ConfigError> {
		let width: StrokeWidth = input.trim().parse::<f32>()?.try_into()?;
		Ok(self.clamp_stroke_width(width))
	}
}

impl Default for SketchConfig {
	fn default() -> Self {
		Self {
			palette: default_palette(),
			stroke_width: StrokeWidth::DEFAULT,
			min_stroke_width: StrokeWidth::new(DEFAULT_MIN_STROKE_WIDTH).unwrap_or_default(),
			max_stroke_width: StrokeWidth::new(DEFAULT_MAX_STROKE_WIDTH).unwrap_or_default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn builder_defaults_match_default() -> anyhow::Result<()> {
		let config = SketchConfig::builder().build()?;
		assert_eq!(config, SketchConfig::default());
		assert_eq!(config.palette(), &[Color::black(), Color::red(), Color::blue()]);
		assert_eq!(config.initial_color(), Color::black());
		assert_eq!(config.stroke_width().get(), 5.0);
		Ok(())
	}

	#[test]
	fn builder_overrides() -> anyhow::Result<()> {
		let config = SketchConfig::builder()
			.palette(vec!["green".parse::<Color>()?, Color::red()])
			.stroke_width(3.0)
			.min_stroke_width(2.0)
			.max_stroke_width(8.0)
			.build()?;
		assert_eq!(config.initial_color().as_str(), "#008000");
		assert_eq!(config.min_stroke_width().get(), 2.0);
		assert_eq!(config.max_stroke_width().get(), 8.0);
		Ok(())
	}

	#[test]
	fn rejects_invalid_combinations() {
		assert_eq!(
			SketchConfig::builder().palette(vec![]).build(),
			Err(ConfigError::EmptyPalette)
		);
		assert_eq!(
			SketchConfig::builder().stroke_width(-2.0).build(),
			Err(ConfigError::InvalidWidth(StrokeWidthError(-2.0)))
		);
		assert!(matches!(
			SketchConfig::builder().min_stroke_width(10.0).max_stroke_width(2.0).build(),
			Err(ConfigError::EmptyRange { .. })
		));
		assert!(matches!(
			SketchConfig::builder().stroke_width(50.0).build(),
			Err(ConfigError::OutOfRange { .. })
		));
	}

	#[test]
	fn clamps_to_range() -> anyhow::Result<()> {
		let config = SketchConfig::default();
		let clamp = |w: f32| -> anyhow::Result<f32> { Ok(config.clamp_stroke_width(StrokeWidth::new(w)?).get()) };
		assert_abs_diff_eq!(clamp(0.25)?, 1.0);
		assert_abs_diff_eq!(clamp(12.5)?, 12.5);
		assert_abs_diff_eq!(clamp(99.0)?, 40.0);
		Ok(())
	}

	#[test]
	fn parses_control_input() -> anyhow::Result<()> {
		let config = SketchConfig::default();
		assert_eq!(config.parse_stroke_width("12")?.get(), 12.0);
		assert_eq!(config.parse_stroke_width(" 7.5 ")?.get(), 7.5);
		assert_eq!(config.parse_stroke_width("99")?, config.max_stroke_width());
		assert_eq!(config.parse_stroke_width("0.5")?, config.min_stroke_width());
		assert!(matches!(
			config.parse_stroke_width("wide"),
			Err(ConfigError::UnparsableWidth(_))
		));
		assert_eq!(
			config.parse_stroke_width("-3"),
			Err(ConfigError::InvalidWidth(StrokeWidthError(-3.0)))
		);
		Ok(())
	}
}
