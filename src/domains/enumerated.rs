//! A module containing the [`Enumerated`] sequence domain.

use core::fmt::{Debug, Display};
use core::ops::RangeInclusive;
use std::sync::Arc;

use crate::conversion::{
	Domain, NumericConversion, RangeNotation, StepConversion,
};

/// The domain of the elements of a fixed sequence, ordered by their
/// position in it.
///
/// Items that are not part of the sequence have no numeric value, so
/// ranges cannot start or stop on them and never contain them.
///
/// # Examples
/// ```
/// use rangetools::domains::Enumerated;
/// use rangetools::{Range, RangeSpec};
///
/// let weekdays = Enumerated::new(["mon", "tue", "wed", "thu", "fri"]);
/// let range = Range::new(weekdays, RangeSpec::new("mon").stop("fri").step(2))
/// 	.unwrap();
///
/// assert_eq!(range.iter().collect::<Vec<_>>(), ["mon", "wed", "fri"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Enumerated<T> {
	sequence: Arc<[T]>,
}

impl<T> Enumerated<T> {
	/// Creates a domain over the given sequence.
	pub fn new(sequence: impl IntoIterator<Item = T>) -> Self {
		Enumerated {
			sequence: sequence.into_iter().collect(),
		}
	}
	/// The sequence the domain enumerates.
	pub fn sequence(&self) -> &[T] {
		&self.sequence
	}
}

impl<T> NumericConversion for Enumerated<T>
where
	T: Clone + Debug + PartialEq,
{
	type Item = T;

	fn item_to_num(&self, item: &T) -> f64 {
		match self.sequence.iter().position(|x| x == item) {
			Some(index) => index as f64,
			None => f64::NAN,
		}
	}
	fn num_to_item(&self, num: f64) -> T {
		let last = self.sequence.len().saturating_sub(1);
		let index = (num.round().max(0.0) as usize).min(last);
		self.sequence[index].clone()
	}
}
impl<T> StepConversion for Enumerated<T>
where
	T: Clone + Debug + PartialEq,
{
	type Step = i64;

	fn step_to_num(&self, step: &i64) -> f64 {
		*step as f64
	}
	fn num_to_step(&self, num: f64) -> i64 {
		num.round() as i64
	}
}
impl<T> Domain for Enumerated<T>
where
	T: Clone + Debug + PartialEq,
{
	fn bounds(&self) -> Option<RangeInclusive<f64>> {
		Some(0.0..=self.sequence.len().saturating_sub(1) as f64)
	}
}

impl<T> RangeNotation for Enumerated<T>
where
	T: Clone + Debug + PartialEq + Display,
{
	fn parse_item(&self, text: &str) -> Option<T> {
		self.sequence.iter().find(|x| x.to_string() == text).cloned()
	}
	fn parse_step(&self, text: &str) -> Option<i64> {
		text.parse().ok()
	}
	fn format_item(&self, item: &T) -> String {
		item.to_string()
	}
	fn format_step(&self, step: &i64) -> String {
		step.to_string()
	}
}
