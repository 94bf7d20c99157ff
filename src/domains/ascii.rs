//! A module containing the [`Ascii`] character domain.

use core::ops::RangeInclusive;

use crate::conversion::{
	Domain, NumericConversion, RangeNotation, StepConversion,
};

/// The domain of characters, ordered by code point, stepped by integers.
///
/// # Examples
/// ```
/// use rangetools::domains::Ascii;
/// use rangetools::{Range, RangeSpec};
///
/// let range = Range::new(Ascii, RangeSpec::new('a').stop('z').step(4)).unwrap();
///
/// assert_eq!(range.iter().collect::<String>(), "aeimquy");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

impl NumericConversion for Ascii {
	type Item = char;

	fn item_to_num(&self, item: &char) -> f64 {
		f64::from(u32::from(*item))
	}
	fn num_to_item(&self, num: f64) -> char {
		char::from_u32(num.round() as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
	}
}
impl StepConversion for Ascii {
	type Step = i64;

	fn step_to_num(&self, step: &i64) -> f64 {
		*step as f64
	}
	fn num_to_step(&self, num: f64) -> i64 {
		num.round() as i64
	}
}
impl Domain for Ascii {
	fn bounds(&self) -> Option<RangeInclusive<f64>> {
		Some(0.0..=f64::from(u32::from(char::MAX)))
	}
}

impl RangeNotation for Ascii {
	fn parse_item(&self, text: &str) -> Option<char> {
		let mut chars = text.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Some(c),
			_ => None,
		}
	}
	fn parse_step(&self, text: &str) -> Option<i64> {
		text.parse().ok()
	}
	fn format_item(&self, item: &char) -> String {
		item.to_string()
	}
	fn format_step(&self, step: &i64) -> String {
		step.to_string()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::{Range, RangeSpec};

	use super::*;

	#[test]
	fn every_fifth_capital() {
		let range = Range::new(Ascii, RangeSpec::new('B').stop('Z').step(5))
			.unwrap();
		assert_eq!(range.iter().collect::<Vec<_>>(), ['B', 'G', 'L', 'Q', 'V']);
		assert_eq!(range.to_string(), "B-Z:5");
	}

	#[test]
	fn notation() {
		let range: Range<Ascii> = "z-a:-5".parse().unwrap();
		assert_eq!(range.iter().collect::<String>(), "zupkfa");
		assert!("ab-c".parse::<Range<Ascii>>().is_err());
	}
}
