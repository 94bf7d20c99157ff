//! A module containing the text notation for ranges: `start`,
//! `start-stop` or `start-stop:step`.
//!
//! The delimiters come from [`RangeNotation`], so domains whose items
//! contain `-` or `:` (dates and times) pick different ones. A delimiter is
//! never searched for in the first character of a part, which leaves room
//! for a leading minus sign: `-5--1` is the range from `-5` to `-1`.

use core::str::FromStr;

use log::trace;

use crate::conversion::{approx_eq, RangeNotation};
use crate::{Range, RangeError, RangeSpec};

/// Parses range notation into a [`RangeSpec`] using the items and steps of
/// `domain`.
///
/// Whitespace around the whole text and around each part is ignored.
///
/// # Errors
///
/// [`RangeError::MalformedRangeText`] if a part is empty or is not a valid
/// item or step of `domain`.
///
/// # Examples
/// ```
/// use rangetools::domains::{Number, Numeric};
/// use rangetools::notation::parse_range_spec;
/// use rangetools::RangeSpec;
///
/// assert_eq!(
/// 	parse_range_spec(&Numeric::new(), "10-0:-2"),
/// 	Ok(RangeSpec::new(10).stop(0).step(-2))
/// );
/// assert_eq!(
/// 	parse_range_spec(&Numeric::new(), " 7 "),
/// 	Ok(RangeSpec::<Number, Number>::new(7))
/// );
/// assert!(parse_range_spec(&Numeric::new(), "1-").is_err());
/// ```
pub fn parse_range_spec<D>(
	domain: &D,
	text: &str,
) -> Result<RangeSpec<D::Item, D::Step>, RangeError>
where
	D: RangeNotation,
{
	let malformed = || RangeError::MalformedRangeText(text.to_string());

	let trimmed = text.trim();
	let (start, rest) = match split_once_after_first(trimmed, D::BOUND_DELIMITER)
	{
		Some((start, rest)) => (start, Some(rest)),
		None => (trimmed, None),
	};
	let (stop, step) = match rest {
		Some(rest) => match split_once_after_first(rest.trim(), D::STEP_DELIMITER)
		{
			Some((stop, step)) => (Some(stop), Some(step)),
			None => (Some(rest), None),
		},
		None => (None, None),
	};
	trace!("split {text:?} into {start:?}, {stop:?}, {step:?}");

	let start = non_empty(start)
		.and_then(|x| domain.parse_item(x))
		.ok_or_else(malformed)?;

	let mut spec = RangeSpec::new(start);
	if let Some(stop) = stop {
		spec.stop = Some(
			non_empty(stop)
				.and_then(|x| domain.parse_item(x))
				.ok_or_else(malformed)?,
		);
	}
	if let Some(step) = step {
		spec.step = Some(
			non_empty(step)
				.and_then(|x| domain.parse_step(x))
				.ok_or_else(malformed)?,
		);
	}

	return Ok(spec);
}

/// Renders a range in the shortest notation that parses back into an
/// equal range.
///
/// The step is left out when it is the domain's default, and so is the
/// stop when it equals the start. `repeat` and `wrap` have no notation and
/// are not rendered.
pub fn format_range<D>(range: &Range<D>) -> String
where
	D: RangeNotation,
{
	let domain = range.domain();
	let spec = range.spec();
	let start = domain.format_item(&spec.start);

	let Some(stop) = &spec.stop else {
		return start;
	};
	let same = approx_eq(
		domain.item_to_num(stop),
		domain.item_to_num(&spec.start),
		1.0,
	);
	if same && range.has_default_step() {
		return start;
	}
	let stop = domain.format_item(stop);

	if range.has_default_step() {
		format!("{start}{}{stop}", D::BOUND_DELIMITER)
	} else {
		format!(
			"{start}{}{stop}{}{}",
			D::BOUND_DELIMITER,
			D::STEP_DELIMITER,
			domain.format_step(&range.step())
		)
	}
}

impl<D> FromStr for Range<D>
where
	D: RangeNotation + Default,
{
	type Err = RangeError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let domain = D::default();
		let spec = parse_range_spec(&domain, text)?;
		Range::new(domain, spec)
	}
}

fn non_empty(text: &str) -> Option<&str> {
	let text = text.trim();
	(!text.is_empty()).then_some(text)
}

/// Splits on the first `delimiter` that is not the first character.
fn split_once_after_first(text: &str, delimiter: char) -> Option<(&str, &str)> {
	let mut chars = text.char_indices();
	chars.next();
	let (index, _) = chars.find(|(_, c)| *c == delimiter)?;
	Some((&text[..index], &text[index + delimiter.len_utf8()..]))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;
	use crate::domains::{Number, Numeric};

	fn parse(text: &str) -> Result<RangeSpec<Number, Number>, RangeError> {
		parse_range_spec(&Numeric::new(), text)
	}
	fn malformed(text: &str) -> Result<RangeSpec<Number, Number>, RangeError> {
		Err(RangeError::MalformedRangeText(text.to_string()))
	}

	#[test]
	fn parse_tests() {
		assert_eq!(parse("5"), Ok(RangeSpec::new(5)));
		assert_eq!(parse("-5"), Ok(RangeSpec::new(-5)));
		assert_eq!(parse("1-10"), Ok(RangeSpec::new(1).stop(10)));
		assert_eq!(parse("-5--1"), Ok(RangeSpec::new(-5).stop(-1)));
		assert_eq!(parse("10-0:-2"), Ok(RangeSpec::new(10).stop(0).step(-2)));
		assert_eq!(
			parse("9-10:.1"),
			Ok(RangeSpec::new(9).stop(10).step(0.1))
		);
		assert_eq!(
			parse(" 1 - 10 : 2 "),
			Ok(RangeSpec::new(1).stop(10).step(2))
		);
	}

	#[test]
	fn malformed_tests() {
		for text in ["", " ", "-", "1-", "-1-", "1-2:", "1:2", "a-b", "1-2:x", "1-2-3"] {
			assert_eq!(parse(text), malformed(text));
		}
	}

	#[test]
	fn from_str_tests() {
		let range: Range<Numeric> = "1-50:2".parse().unwrap();
		assert_eq!(range.len(), 25);
		assert_eq!(range.last(), Number::Int(49));

		assert_eq!(
			"1-2:0".parse::<Range<Numeric>>(),
			Err(RangeError::InvalidStep)
		);
		assert!(matches!(
			"1-5:-1".parse::<Range<Numeric>>(),
			Err(RangeError::InvalidDirection { .. })
		));
	}

	#[test]
	fn format_tests() {
		let format = |text: &str| text.parse::<Range<Numeric>>().unwrap().to_string();

		assert_eq!(format("5"), "5");
		assert_eq!(format("1-4"), "1-4");
		assert_eq!(format("4-1"), "4-1");
		assert_eq!(format("6-12:2"), "6-12:2");
		assert_eq!(format("0-11:2"), "0-11:2");
		assert_eq!(format("3-3"), "3");
		assert_eq!(format("3-3:7"), "3-3:7");
		assert_eq!(format("0-1:5"), "0-1:5");
		assert_eq!(format("0.5-2:.5"), "0.5-2:0.5");
		assert_eq!(format("0.5-2.5"), "0.5-2.5");
		assert_eq!(format(" 1 - 10 : 1 "), "1-10");
	}

	proptest! {
		#[test]
		fn notation_round_trips(
			start in -1000i64..1000,
			step in 1i64..50,
			count in 0i64..100,
			descending in any::<bool>(),
		) {
			let (stop, step) = match descending {
				false => (start + count * step, step),
				true => (start - count * step, -step),
			};
			let range = Range::new(
				Numeric::new(),
				RangeSpec::new(start).stop(stop).step(step),
			)
			.unwrap();

			let reparsed = range.to_string().parse::<Range<Numeric>>().unwrap();
			prop_assert_eq!(&reparsed, &range);
			prop_assert_eq!(
				reparsed.iter().collect::<Vec<_>>(),
				range.iter().collect::<Vec<_>>()
			);
		}
	}
}
