//! A module containing shortcut functions for the common case of plain
//! numbers.

use crate::domains::{Number, Numeric};
use crate::{
	Range, RangeArg, RangeError, RangeList, RangeListOptions, RangeSpec,
};

/// Builds a numeric [`Range`] from a spec.
///
/// # Errors
///
/// Any error [`Range::new()`] returns.
///
/// # Examples
/// ```
/// use rangetools::domains::Number;
/// use rangetools::{make_range, RangeSpec};
///
/// let range = make_range(RangeSpec::new(0).stop(10).step(2)).unwrap();
/// assert_eq!(range.len(), 6);
/// assert_eq!(range.last(), Number::Int(10));
/// ```
pub fn make_range(
	spec: RangeSpec<Number, Number>,
) -> Result<Range<Numeric>, RangeError> {
	Range::new(Numeric::new(), spec)
}

/// Builds the numeric [`Range`] from `start` to `stop`, both inclusive.
///
/// # Errors
///
/// Any error [`Range::new()`] returns.
pub fn make_inclusive_range(
	start: impl Into<Number>,
	stop: impl Into<Number>,
	step: impl Into<Number>,
) -> Result<Range<Numeric>, RangeError> {
	make_range(RangeSpec::new(start).stop(stop).step(step))
}

/// Compacts numeric ranges and renders the result, separated by
/// `separator` (`","` when `None`).
///
/// Text arguments are split on `separator` as well.
///
/// # Errors
///
/// Any error building the [`RangeList`] returns.
///
/// # Examples
/// ```
/// use rangetools::format_compacted;
///
/// assert_eq!(
/// 	format_compacted("1,2,3,4,6,8,10,12", None),
/// 	Ok(String::from("1-4,6-12:2"))
/// );
/// assert_eq!(
/// 	format_compacted("9 8 7 1", Some(" ")),
/// 	Ok(String::from("1 7-9"))
/// );
/// ```
pub fn format_compacted(
	arg: impl Into<RangeArg<Numeric>>,
	separator: Option<&str>,
) -> Result<String, RangeError> {
	let mut options = RangeListOptions::default();
	if let Some(separator) = separator {
		options.separator = separator.to_string();
	}

	let mut list = RangeList::with_options(Numeric::new(), arg, options)?;
	list.compact();
	Ok(list.to_string())
}
