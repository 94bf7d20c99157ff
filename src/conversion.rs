//! A module containing the conversion traits every domain implements to
//! plug into [`Range`](crate::Range), along with the shared numeric
//! tolerance.
//!
//! A domain only has to say how its items map onto `f64` and back. The
//! progression engine does all of its arithmetic on those numbers, so the
//! mapping must be monotonic: `a < b` on items must mean
//! `item_to_num(a) < item_to_num(b)`.

use core::fmt::Debug;
use core::ops::RangeInclusive;

/// The relative tolerance used for every numeric comparison in this crate.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if `a` and `b` are within [`TOLERANCE`] of each other,
/// scaled by `scale` (but never by less than one).
///
/// # Examples
/// ```
/// use rangetools::conversion::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 0.1));
/// assert!(!approx_eq(1.0, 1.001, 1.0));
/// ```
pub fn approx_eq(a: f64, b: f64, scale: f64) -> bool {
	(a - b).abs() < TOLERANCE * scale.abs().max(1.0)
}

/// Conversion between the items of a domain and the numbers the
/// progression engine computes with.
///
/// Conversions must round trip: `num_to_item(item_to_num(x)) == x` for
/// every valid `x`. Items with no numeric meaning should map to
/// [`f64::NAN`], which range constructors reject.
pub trait NumericConversion {
	/// The type of the values a range over this domain yields.
	type Item: Clone + Debug;

	/// Maps an item onto the number line.
	fn item_to_num(&self, item: &Self::Item) -> f64;
	/// Maps a number back onto an item.
	fn num_to_item(&self, num: f64) -> Self::Item;
}

/// Conversion between the steps of a domain and numbers.
///
/// Domains whose steps are items themselves should implement
/// [`UniformStep`] instead and receive this trait for free.
pub trait StepConversion: NumericConversion {
	/// The type of the distance between two consecutive items.
	type Step: Clone + Debug;

	/// Maps a step onto the number line.
	fn step_to_num(&self, step: &Self::Step) -> f64;
	/// Maps a number back onto a step.
	fn num_to_step(&self, num: f64) -> Self::Step;
}

/// The marker trait for domains whose step type is their item type.
///
/// A blanket implementation of [`StepConversion`] is provided for these
/// domains that delegates to the item conversions.
pub trait UniformStep: NumericConversion {}

impl<D> StepConversion for D
where
	D: UniformStep,
{
	type Step = D::Item;

	fn step_to_num(&self, step: &Self::Step) -> f64 {
		self.item_to_num(step)
	}
	fn num_to_step(&self, num: f64) -> Self::Step {
		self.num_to_item(num)
	}
}

/// A complete domain a [`Range`](crate::Range) can iterate over.
///
/// Every method has a default, so most domains only implement the
/// conversion traits and an empty `impl Domain for X {}`.
pub trait Domain: StepConversion + Clone + Debug {
	/// The numeric step used when a range is given a stop but no step.
	fn default_step(&self) -> f64 {
		1.0
	}

	/// The length of one cycle for domains that wrap around, such as the
	/// time of day.
	fn period(&self) -> Option<f64> {
		None
	}

	/// The numbers items of a bounded domain map onto, inclusive.
	///
	/// Ranges whose values would leave these bounds, for example by
	/// wrapping past the end of a sequence, are rejected.
	fn bounds(&self) -> Option<RangeInclusive<f64>> {
		None
	}

	/// Returns the domain a range with the given bounds should use.
	///
	/// This lets a domain carry information learnt from the values it was
	/// given, such as whether a numeric range is floating point.
	fn refine(
		&self,
		_start: &Self::Item,
		_stop: Option<&Self::Item>,
		_step: Option<&Self::Step>,
	) -> Self {
		self.clone()
	}
}

/// The textual form of a domain's items and steps, used by the range
/// notation parser and formatter.
pub trait RangeNotation: Domain {
	/// The delimiter between the start and stop of a range.
	const BOUND_DELIMITER: char = '-';
	/// The delimiter between the stop and the step of a range.
	const STEP_DELIMITER: char = ':';

	/// Parses a single item, returning `None` if the text is not one.
	fn parse_item(&self, text: &str) -> Option<Self::Item>;
	/// Parses a single step, returning `None` if the text is not one.
	fn parse_step(&self, text: &str) -> Option<Self::Step>;
	/// Renders a single item.
	fn format_item(&self, item: &Self::Item) -> String;
	/// Renders a single step.
	fn format_step(&self, step: &Self::Step) -> String;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone)]
	struct Halves;

	impl NumericConversion for Halves {
		type Item = i32;

		fn item_to_num(&self, item: &i32) -> f64 {
			f64::from(*item) / 2.0
		}
		fn num_to_item(&self, num: f64) -> i32 {
			(num * 2.0).round() as i32
		}
	}
	impl UniformStep for Halves {}
	impl Domain for Halves {}

	#[test]
	fn uniform_step_delegates_to_items() {
		assert_eq!(Halves.step_to_num(&3), 1.5);
		assert_eq!(Halves.num_to_step(2.5), 5);
		assert_eq!(Halves.default_step(), 1.0);
		assert_eq!(Halves.period(), None);
		assert_eq!(Halves.bounds(), None);
	}

	#[test]
	fn tolerance_scales_with_magnitude() {
		assert!(approx_eq(1e6, 1e6 + 1e-4, 1e6));
		assert!(!approx_eq(1e6, 1e6 + 1e-4, 1.0));
		assert!(approx_eq(0.0, 5e-10, 0.0));
	}
}
