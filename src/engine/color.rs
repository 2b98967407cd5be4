use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
	#[error("invalid color {input:?}")]
	Parse {
		input: String,
		#[source]
		source: csscolorparser::ParseColorError,
	},
}

/// A stroke color, canonicalized to uppercase hex.
///
/// Any CSS color syntax is accepted on input. Opaque colors are stored as `#RRGGBB` and translucent
/// ones as `#RRGGBBAA`, so two spellings of the same color compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct Color(String);

impl Color {
	pub fn parse(input: &str) -> Result<Self, ColorError> {
		let parsed = csscolorparser::parse(input).map_err(|source| ColorError::Parse {
			input: input.to_owned(),
			source,
		})?;
		let [r, g, b, a] = parsed.to_rgba8();
		Ok(Self::from_rgba8(r, g, b, a))
	}

	pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
		Self::from_rgba8(r, g, b, u8::MAX)
	}

	pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
		if a == u8::MAX {
			Self(format!("#{r:02X}{g:02X}{b:02X}"))
		} else {
			Self(format!("#{r:02X}{g:02X}{b:02X}{a:02X}"))
		}
	}

	pub fn black() -> Self {
		Self::from_rgb8(0x00, 0x00, 0x00)
	}

	pub fn red() -> Self {
		Self::from_rgb8(0xFF, 0x00, 0x00)
	}

	pub fn blue() -> Self {
		Self::from_rgb8(0x00, 0x00, 0xFF)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::black()
	}
}

impl FromStr for Color {
	type Err = ColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
