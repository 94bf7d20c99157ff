//! A module containing [`Number`] and the [`Numeric`] domain.

use core::fmt;

use crate::conversion::{
	approx_eq, Domain, NumericConversion, RangeNotation, UniformStep,
};

/// A number that remembers whether it was written as an integer or as a
/// floating point value.
///
/// Integer ranges yield [`Number::Int`]s and ranges with any floating point
/// bound or step yield [`Number::Float`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
	/// An integer value.
	Int(i64),
	/// A floating point value.
	Float(f64),
}

impl Number {
	/// Returns the value as an `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Number::Int(x) => x as f64,
			Number::Float(x) => x,
		}
	}
	/// Returns `true` for [`Number::Float`].
	pub fn is_float(self) -> bool {
		matches!(self, Number::Float(_))
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Int(x) => write!(f, "{x}"),
			// keep a trailing ".0" so the value reads back as a float
			Number::Float(x) if x.is_finite() && x.fract() == 0.0 => {
				write!(f, "{x:.1}")
			}
			Number::Float(x) => write!(f, "{x}"),
		}
	}
}

impl From<i64> for Number {
	fn from(x: i64) -> Self {
		Number::Int(x)
	}
}
impl From<i32> for Number {
	fn from(x: i32) -> Self {
		Number::Int(i64::from(x))
	}
}
impl From<u32> for Number {
	fn from(x: u32) -> Self {
		Number::Int(i64::from(x))
	}
}
impl From<f64> for Number {
	fn from(x: f64) -> Self {
		Number::Float(x)
	}
}
impl From<f32> for Number {
	fn from(x: f32) -> Self {
		Number::Float(f64::from(x))
	}
}

/// The domain of plain numbers.
///
/// `float` is set by [`Domain::refine`] when any bound or the step of a
/// range is a [`Number::Float`], after which every yielded value is a
/// float as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Numeric {
	/// Whether values come back as [`Number::Float`].
	pub float: bool,
}

impl Numeric {
	/// A domain yielding integers wherever the values are integral.
	pub fn new() -> Self {
		Numeric { float: false }
	}
	/// A domain that always yields floats.
	pub fn float() -> Self {
		Numeric { float: true }
	}
}

impl NumericConversion for Numeric {
	type Item = Number;

	fn item_to_num(&self, item: &Number) -> f64 {
		item.as_f64()
	}
	fn num_to_item(&self, num: f64) -> Number {
		if !self.float && approx_eq(num, num.round(), 1.0) {
			if let Some(int) = to_i64(num.round()) {
				return Number::Int(int);
			}
		}
		return Number::Float(tidy(num));
	}
}
impl UniformStep for Numeric {}
impl Domain for Numeric {
	fn refine(
		&self,
		start: &Number,
		stop: Option<&Number>,
		step: Option<&Number>,
	) -> Self {
		let float = self.float
			|| start.is_float()
			|| stop.is_some_and(|x| x.is_float())
			|| step.is_some_and(|x| x.is_float());
		Numeric { float }
	}
}

impl RangeNotation for Numeric {
	fn parse_item(&self, text: &str) -> Option<Number> {
		parse_number(text)
	}
	fn parse_step(&self, text: &str) -> Option<Number> {
		parse_number(text)
	}
	fn format_item(&self, item: &Number) -> String {
		item.to_string()
	}
	fn format_step(&self, step: &Number) -> String {
		step.to_string()
	}
}

/// Parses an optionally signed integer or decimal: `[+-]?(\d+\.?|\d*\.\d+)`.
///
/// Exponents, `inf` and `NaN` are rejected so the range notation stays
/// unambiguous.
pub fn parse_number(text: &str) -> Option<Number> {
	let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
	let (whole, fraction) = match digits.split_once('.') {
		Some((whole, fraction)) => (whole, Some(fraction)),
		None => (digits, None),
	};

	let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
	if !is_digits(whole) || !fraction.map_or(true, is_digits) {
		return None;
	}
	if whole.is_empty() && fraction.map_or(true, str::is_empty) {
		return None;
	}

	let text = text.strip_prefix('+').unwrap_or(text);
	match fraction {
		None => text.parse().ok().map(Number::Int),
		Some(_) => text.parse().ok().map(Number::Float),
	}
}

fn to_i64(x: f64) -> Option<i64> {
	// i64::MAX is not representable, so compare against 2^63 exclusively
	if x >= -9_223_372_036_854_775_808.0 && x < 9_223_372_036_854_775_808.0 {
		Some(x as i64)
	} else {
		None
	}
}

/// Rounds `x` to 12 significant digits, removing the error index
/// arithmetic leaves behind (`1.3000000000000003` becomes `1.3`).
fn tidy(x: f64) -> f64 {
	if x == 0.0 || !x.is_finite() {
		return x;
	}
	let digits = 11 - x.abs().log10().floor() as i32;
	if !(0..=15).contains(&digits) {
		return x;
	}
	let scale = 10f64.powi(digits);
	return (x * scale).round() / scale;
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parse_number_tests() {
		assert_eq!(parse_number("10"), Some(Number::Int(10)));
		assert_eq!(parse_number("-3"), Some(Number::Int(-3)));
		assert_eq!(parse_number("+7"), Some(Number::Int(7)));
		assert_eq!(parse_number(".5"), Some(Number::Float(0.5)));
		assert_eq!(parse_number("2."), Some(Number::Float(2.0)));
		assert_eq!(parse_number("-1.25"), Some(Number::Float(-1.25)));

		assert_eq!(parse_number(""), None);
		assert_eq!(parse_number("-"), None);
		assert_eq!(parse_number("."), None);
		assert_eq!(parse_number("1e5"), None);
		assert_eq!(parse_number("inf"), None);
		assert_eq!(parse_number("1-2"), None);
		assert_eq!(parse_number("1.2.3"), None);
	}

	#[test]
	fn display_keeps_floats_distinct() {
		assert_eq!(Number::Int(4).to_string(), "4");
		assert_eq!(Number::Float(4.0).to_string(), "4.0");
		assert_eq!(Number::Float(0.1).to_string(), "0.1");
		assert_eq!(Number::Float(-2.5).to_string(), "-2.5");
	}

	#[test]
	fn num_to_item_tests() {
		assert_eq!(Numeric::new().num_to_item(4.0), Number::Int(4));
		assert_eq!(Numeric::new().num_to_item(0.5), Number::Float(0.5));
		assert_eq!(Numeric::float().num_to_item(4.0), Number::Float(4.0));
		assert_eq!(
			Numeric::float().num_to_item(1.0 + 3.0 * 0.1),
			Number::Float(1.3)
		);
		assert_eq!(
			Numeric::float().num_to_item(9.0 + 7.0 * 0.1),
			Number::Float(9.7)
		);
	}

	#[test]
	fn refine_detects_floats() {
		let domain = Numeric::new();
		assert_eq!(domain.refine(&Number::Int(1), None, None), Numeric::new());
		assert_eq!(
			domain.refine(&Number::Int(1), Some(&Number::Int(2)), None),
			Numeric::new()
		);
		assert_eq!(
			domain.refine(
				&Number::Int(1),
				Some(&Number::Int(2)),
				Some(&Number::Float(0.5))
			),
			Numeric::float()
		);
	}
}
