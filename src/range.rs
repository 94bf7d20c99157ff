//! A module containing [`Range`], the inclusive arithmetic progression
//! over any [`Domain`], and [`RangeSpec`], the plain description a
//! [`Range`] is built from.

use core::fmt;
use core::iter::FusedIterator;

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::conversion::{approx_eq, Domain, RangeNotation, TOLERANCE};
use crate::notation::format_range;
use crate::RangeError;

/// The description of a progression: where it starts, where it stops, how
/// far apart its values are and how many times it is traversed.
///
/// `stop` and `step` are optional. Without a `stop` the progression is a
/// single value; without a `step` the domain's default step is used,
/// pointed towards `stop`.
///
/// # Examples
/// ```
/// use rangetools::domains::Number;
/// use rangetools::RangeSpec;
///
/// let spec: RangeSpec<Number, Number> =
/// 	RangeSpec::new(1).stop(9).step(2).repeat(3).wrap(true);
///
/// assert_eq!(spec.stop, Some(Number::Int(9)));
/// assert_eq!(spec.repeat, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSpec<I, S> {
	/// The first value.
	pub start: I,
	/// The last value, if the progression has more than one.
	pub stop: Option<I>,
	/// The distance between consecutive values.
	pub step: Option<S>,
	/// How many passes are made over the values, at least one.
	pub repeat: usize,
	/// Whether passes after the first continue the progression instead of
	/// starting over.
	pub wrap: bool,
}

impl<I, S> RangeSpec<I, S> {
	/// A spec for the single value `start`, traversed once.
	pub fn new(start: impl Into<I>) -> Self {
		RangeSpec {
			start: start.into(),
			stop: None,
			step: None,
			repeat: 1,
			wrap: false,
		}
	}
	/// Sets the stop value.
	pub fn stop(mut self, stop: impl Into<I>) -> Self {
		self.stop = Some(stop.into());
		self
	}
	/// Sets the step.
	pub fn step(mut self, step: impl Into<S>) -> Self {
		self.step = Some(step.into());
		self
	}
	/// Sets the number of passes.
	pub fn repeat(mut self, repeat: usize) -> Self {
		self.repeat = repeat;
		self
	}
	/// Sets whether passes continue the progression.
	pub fn wrap(mut self, wrap: bool) -> Self {
		self.wrap = wrap;
		self
	}
}

/// An inclusive arithmetic progression over the domain `D`.
///
/// Values are computed from their index as `start + k * step`, so indexing,
/// [`Range::len()`] and [`Range::contains()`] are all O(1) and no
/// floating point error accumulates across the progression.
///
/// A [`Range`] never changes after construction. Iterating it does not
/// consume it and always yields the same values.
///
/// # Examples
/// ```
/// use rangetools::domains::{Number, Numeric};
/// use rangetools::{Range, RangeSpec};
///
/// let range =
/// 	Range::new(Numeric::new(), RangeSpec::new(10).stop(0).step(-2)).unwrap();
///
/// assert_eq!(range.len(), 6);
/// assert_eq!(range.nth(2), Ok(Number::Int(6)));
/// assert!(range.contains(&Number::Int(4)));
/// assert_eq!(range.to_string(), "10-0:-2");
/// ```
#[derive(Debug, Clone)]
pub struct Range<D>
where
	D: Domain,
{
	domain: D,
	spec: RangeSpec<D::Item, D::Step>,
	start: f64,
	step: f64,
	len: usize,
}

impl<D> Range<D>
where
	D: Domain,
{
	/// Creates a progression from a spec.
	///
	/// The domain is first [refined](Domain::refine) by the spec's values.
	///
	/// # Errors
	///
	/// - [`RangeError::InvalidRepeat`] if `repeat` is zero.
	/// - [`RangeError::InvalidStep`] if the step is zero.
	/// - [`RangeError::InvalidRangeArgument`] if the start or stop has no
	///   numeric value in the domain, or if a value would fall outside the
	///   domain's [bounds](Domain::bounds).
	/// - [`RangeError::InvalidDirection`] if the step points away from the
	///   stop. A stop equal to the start accepts any non-zero step.
	pub fn new(
		domain: D,
		spec: RangeSpec<D::Item, D::Step>,
	) -> Result<Self, RangeError> {
		if spec.repeat == 0 {
			return Err(RangeError::InvalidRepeat(spec.repeat));
		}
		let domain =
			domain.refine(&spec.start, spec.stop.as_ref(), spec.step.as_ref());

		let start = domain.item_to_num(&spec.start);
		if !start.is_finite() {
			return Err(RangeError::InvalidRangeArgument(format!(
				"start value {:?} has no numeric value",
				spec.start
			)));
		}

		let step = match &spec.step {
			Some(step) => {
				let step = domain.step_to_num(step);
				if step == 0.0 || !step.is_finite() {
					return Err(RangeError::InvalidStep);
				}
				Some(step)
			}
			None => None,
		};

		let (step, len) = match &spec.stop {
			None => (step.unwrap_or(domain.default_step()), 1),
			Some(stop) => {
				let stop_num = domain.item_to_num(stop);
				if !stop_num.is_finite() {
					return Err(RangeError::InvalidRangeArgument(format!(
						"stop value {stop:?} has no numeric value"
					)));
				}
				let stop_num = align_stop(&domain, start, stop_num, step);
				let step = step.unwrap_or_else(|| {
					let default = domain.default_step();
					if stop_num < start {
						-default
					} else {
						default
					}
				});

				let distance = stop_num - start;
				if approx_eq(distance, 0.0, 1.0) {
					(step, 1)
				} else if distance.signum() != step.signum() {
					return Err(RangeError::InvalidDirection {
						start,
						stop: stop_num,
						step,
					});
				} else {
					(step, steps_between(distance, step) + 1)
				}
			}
		};

		let range = Range {
			domain,
			spec,
			start,
			step,
			len,
		};

		// the start is an item, so only the far end can leave the domain
		if let Some(bounds) = range.domain.bounds() {
			let index = range.total_len() - 1;
			let last = range.num_at(index);
			let tolerance = TOLERANCE * step.abs().max(1.0);
			if last < bounds.start() - tolerance || last > bounds.end() + tolerance
			{
				return Err(RangeError::InvalidRangeArgument(format!(
					"value {last} at index {index} lies outside the domain"
				)));
			}
		}

		return Ok(range);
	}

	/// The (refined) domain of the range.
	pub fn domain(&self) -> &D {
		&self.domain
	}
	/// The spec the range was built from.
	pub fn spec(&self) -> &RangeSpec<D::Item, D::Step> {
		&self.spec
	}
	/// The first value.
	pub fn start(&self) -> D::Item {
		self.spec.start.clone()
	}
	/// The last value of a single pass, which is `stop` if `stop` lies on
	/// the progression and the closest value before it otherwise.
	pub fn last(&self) -> D::Item {
		self.item_at(self.len - 1)
	}
	/// The step between consecutive values.
	pub fn step(&self) -> D::Step {
		self.domain.num_to_step(self.step)
	}
	/// The step as a number.
	pub fn step_num(&self) -> f64 {
		self.step
	}
	/// The number of passes.
	pub fn repeat(&self) -> usize {
		self.spec.repeat
	}
	/// Whether passes after the first continue the progression.
	pub fn wraps(&self) -> bool {
		self.spec.wrap && self.spec.repeat > 1
	}

	/// The number of values in a single pass, ignoring `repeat`.
	pub fn len(&self) -> usize {
		self.len
	}
	/// Always `false`: every range has at least its start value.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
	/// The number of values [`Range::iter()`] yields, `repeat` included.
	pub fn total_len(&self) -> usize {
		self.len.saturating_mul(self.spec.repeat)
	}

	/// Returns the value at `index` in the sequence [`Range::iter()`]
	/// yields.
	///
	/// # Errors
	///
	/// [`RangeError::IndexOutOfRange`] if `index >= self.total_len()`.
	pub fn nth(&self, index: usize) -> Result<D::Item, RangeError> {
		if index >= self.total_len() {
			return Err(RangeError::IndexOutOfRange {
				index,
				len: self.total_len(),
			});
		}
		Ok(self.item_at(index))
	}

	/// Returns `true` if `item` is one of the values of a single pass.
	pub fn contains(&self, item: &D::Item) -> bool {
		self.position(item).is_some()
	}

	/// Returns the index of `item` within a single pass.
	pub fn position(&self, item: &D::Item) -> Option<usize> {
		let num = self.domain.item_to_num(item);
		self.grid_index(num, self.len).or_else(|| {
			let period = self.domain.period()?;
			self.grid_index(num + period, self.len)
				.or_else(|| self.grid_index(num - period, self.len))
		})
	}

	/// Returns the number of times `item` is yielded by [`Range::iter()`].
	pub fn count(&self, item: &D::Item) -> usize {
		if self.wraps() {
			let num = self.domain.item_to_num(item);
			let total = self.total_len();
			let period = self.domain.period();
			let shifts = [Some(0.0), period, period.map(|p| -p)];
			return shifts
				.into_iter()
				.flatten()
				.filter(|shift| self.grid_index(num + shift, total).is_some())
				.count();
		}
		match self.contains(item) {
			true => self.spec.repeat,
			false => 0,
		}
	}

	/// Returns an iterator over every value, pass after pass.
	///
	/// Without `wrap`, each of the `repeat` passes starts over at `start`.
	/// With `wrap`, the passes continue the progression so the iterator
	/// yields `len * repeat` consecutive values.
	///
	/// # Examples
	/// ```
	/// use rangetools::domains::{Number, Numeric};
	/// use rangetools::{Range, RangeSpec};
	///
	/// let spec = RangeSpec::new(1).stop(3).repeat(2);
	///
	/// let range = Range::new(Numeric::new(), spec.clone()).unwrap();
	/// assert_eq!(
	/// 	range.iter().map(|x| x.to_string()).collect::<Vec<_>>(),
	/// 	["1", "2", "3", "1", "2", "3"]
	/// );
	///
	/// let range = Range::new(Numeric::new(), spec.wrap(true)).unwrap();
	/// assert_eq!(
	/// 	range.iter().map(|x| x.to_string()).collect::<Vec<_>>(),
	/// 	["1", "2", "3", "4", "5", "6"]
	/// );
	/// ```
	pub fn iter(&self) -> Iter<'_, D> {
		Iter {
			range: self,
			indices: 0..self.total_len(),
		}
	}

	/// Returns an iterator over every value except those matching one of
	/// `items`. Items that are not part of the range are ignored.
	pub fn excluding<I>(&self, items: I) -> impl Iterator<Item = D::Item> + '_
	where
		I: IntoIterator<Item = D::Item>,
	{
		let excluded = items
			.into_iter()
			.map(|item| self.domain.item_to_num(&item))
			.collect::<SmallVec<[f64; 8]>>();

		(0..self.total_len())
			.map(move |index| self.num_at(index))
			.filter(move |num| !excluded.iter().any(|x| self.same_value(*num, *x)))
			.map(move |num| self.domain.num_to_item(num))
	}

	/// Returns the values of a single pass in a random order.
	///
	/// `repeat` and `wrap` do not apply. Every call yields a fresh
	/// permutation, see [`Range::shuffled()`] for a reproducible one.
	pub fn random(&self) -> impl Iterator<Item = D::Item> + '_ {
		self.shuffled(&mut rand::rng())
	}

	/// Returns the values of a single pass permuted by `rng`.
	pub fn shuffled<R>(&self, rng: &mut R) -> impl Iterator<Item = D::Item> + '_
	where
		R: Rng + ?Sized,
	{
		let mut indices = (0..self.len).collect::<Vec<_>>();
		indices.shuffle(rng);
		indices.into_iter().map(move |index| self.item_at(index))
	}

	/// Returns `(index, value)` pairs for every value [`Range::iter()`]
	/// yields, counting from `offset`.
	pub fn enumerate(
		&self,
		offset: usize,
	) -> impl Iterator<Item = (usize, D::Item)> + '_ {
		(offset..).zip(self.iter())
	}

	/// Returns the first, middle and last values [`Range::iter()`] yields.
	///
	/// For an even number of values the middle is the earlier of the two
	/// central values.
	pub fn first_middle_last(&self) -> (D::Item, D::Item, D::Item) {
		let total = self.total_len();
		(
			self.item_at(0),
			self.item_at((total - 1) / 2),
			self.item_at(total - 1),
		)
	}

	/// Returns the range running from the last value of a pass back to
	/// the start.
	pub fn reversed(&self) -> Self {
		let last = self.num_at(self.len - 1);
		let spec = RangeSpec {
			start: self.domain.num_to_item(last),
			stop: Some(self.spec.start.clone()),
			step: Some(self.domain.num_to_step(-self.step)),
			repeat: self.spec.repeat,
			wrap: self.spec.wrap,
		};
		Range::from_grid(self.domain.clone(), spec, last, -self.step, self.len)
	}

	/// Builds a range whose grid is already known to be valid.
	pub(crate) fn from_grid(
		domain: D,
		spec: RangeSpec<D::Item, D::Step>,
		start: f64,
		step: f64,
		len: usize,
	) -> Self {
		let domain =
			domain.refine(&spec.start, spec.stop.as_ref(), spec.step.as_ref());
		Range {
			domain,
			spec,
			start,
			step,
			len,
		}
	}

	pub(crate) fn has_default_step(&self) -> bool {
		approx_eq(self.step.abs(), self.domain.default_step(), self.step)
	}

	pub(crate) fn num_at(&self, index: usize) -> f64 {
		let k = if self.wraps() { index } else { index % self.len };
		self.start + k as f64 * self.step
	}

	fn item_at(&self, index: usize) -> D::Item {
		self.domain.num_to_item(self.num_at(index))
	}

	/// The index `k < limit` with `num == start + k * step`, if any.
	fn grid_index(&self, num: f64, limit: usize) -> Option<usize> {
		let k = ((num - self.start) / self.step).round();
		if !approx_eq(num, self.start + k * self.step, self.step) {
			return None;
		}
		if k < 0.0 || k >= limit as f64 {
			return None;
		}
		Some(k as usize)
	}

	fn same_value(&self, a: f64, b: f64) -> bool {
		match self.domain.period() {
			Some(period) => {
				let offset = (a - b).rem_euclid(period);
				approx_eq(offset, 0.0, self.step)
					|| approx_eq(offset, period, self.step)
			}
			None => approx_eq(a, b, self.step),
		}
	}
}

/// Moves the stop of a cyclic domain by one period when it lies behind the
/// start in the direction of travel.
fn align_stop<D>(domain: &D, start: f64, stop: f64, step: Option<f64>) -> f64
where
	D: Domain,
{
	let Some(period) = domain.period() else {
		return stop;
	};
	let ascending = step.map_or(true, |step| step > 0.0);
	if ascending && stop < start {
		stop + period
	} else if !ascending && stop > start {
		stop - period
	} else {
		stop
	}
}

/// The number of whole steps that fit in `distance`, treating a distance
/// within tolerance of a whole multiple as that multiple.
fn steps_between(distance: f64, step: f64) -> usize {
	let ratio = distance / step;
	let nearest = ratio.round();
	if approx_eq(distance, nearest * step, step) {
		nearest as usize
	} else {
		ratio.floor() as usize
	}
}

/// Ranges are equal when they yield the same values: the same start,
/// length, passes and (when it matters) step. The domain and the literal
/// stop value are not compared.
impl<D> PartialEq for Range<D>
where
	D: Domain,
{
	fn eq(&self, other: &Self) -> bool {
		let step_matters = self.len > 1 || self.wraps();
		self.len == other.len
			&& self.spec.repeat == other.spec.repeat
			&& self.wraps() == other.wraps()
			&& approx_eq(self.start, other.start, self.step)
			&& (!step_matters || approx_eq(self.step, other.step, self.step))
	}
}

impl<D> fmt::Display for Range<D>
where
	D: RangeNotation,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&format_range(self))
	}
}

impl<'a, D> IntoIterator for &'a Range<D>
where
	D: Domain,
{
	type Item = D::Item;
	type IntoIter = Iter<'a, D>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An iterator over the values of a [`Range`].
///
/// This `struct` is created by the [`iter`] method on [`Range`]. See its
/// documentation for more.
///
/// [`iter`]: Range::iter
#[derive(Debug, Clone)]
pub struct Iter<'a, D>
where
	D: Domain,
{
	range: &'a Range<D>,
	indices: core::ops::Range<usize>,
}

impl<D> Iterator for Iter<'_, D>
where
	D: Domain,
{
	type Item = D::Item;

	fn next(&mut self) -> Option<Self::Item> {
		self.indices.next().map(|index| self.range.item_at(index))
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.indices.size_hint()
	}
	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		self.indices.nth(n).map(|index| self.range.item_at(index))
	}
}
impl<D> DoubleEndedIterator for Iter<'_, D>
where
	D: Domain,
{
	fn next_back(&mut self) -> Option<Self::Item> {
		self.indices.next_back().map(|index| self.range.item_at(index))
	}
}
impl<D> ExactSizeIterator for Iter<'_, D> where D: Domain {}
impl<D> FusedIterator for Iter<'_, D> where D: Domain {}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::conversion::RangeNotation;
	use crate::Range;

	impl<D> Serialize for Range<D>
	where
		D: RangeNotation,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.collect_str(self)
		}
	}

	impl<'de, D> Deserialize<'de> for Range<D>
	where
		D: RangeNotation + Default,
	{
		fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
		where
			De: Deserializer<'de>,
		{
			let text = String::deserialize(deserializer)?;
			text.parse().map_err(serde::de::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	use super::*;
	use crate::domains::{Number, Numeric};

	fn range(
		start: impl Into<Number>,
		stop: impl Into<Number>,
		step: impl Into<Number>,
	) -> Range<Numeric> {
		Range::new(Numeric::new(), RangeSpec::new(start).stop(stop).step(step))
			.unwrap()
	}
	fn ints<const N: usize>(values: [i64; N]) -> Vec<Number> {
		values.into_iter().map(Number::Int).collect()
	}
	fn floats<const N: usize>(values: [f64; N]) -> Vec<Number> {
		values.into_iter().map(Number::Float).collect()
	}
	fn collect(range: &Range<Numeric>) -> Vec<Number> {
		range.iter().collect()
	}

	#[test]
	fn iteration_tests() {
		assert_eq!(collect(&range(0, 10, 2)), ints([0, 2, 4, 6, 8, 10]));
		assert_eq!(collect(&range(10, 0, -2)), ints([10, 8, 6, 4, 2, 0]));
		assert_eq!(
			collect(&range(1, 1.5, 0.1)),
			floats([1.0, 1.1, 1.2, 1.3, 1.4, 1.5])
		);
		assert_eq!(collect(&range(-1, 0.5, 1)), floats([-1.0, 0.0]));
		assert_eq!(collect(&range(0.5, 2.5, 1)), floats([0.5, 1.5, 2.5]));
		assert_eq!(collect(&range(1, 2, 0.3)), floats([1.0, 1.3, 1.6, 1.9]));
		assert_eq!(
			collect(&range(10, 8.5, -0.5)),
			floats([10.0, 9.5, 9.0, 8.5])
		);
	}

	#[test]
	fn single_value_tests() {
		let single = Range::new(Numeric::new(), RangeSpec::new(7)).unwrap();
		assert_eq!(collect(&single), ints([7]));

		assert_eq!(collect(&range(7, 7, 3)), ints([7]));
		assert_eq!(collect(&range(7, 7, -3)), ints([7]));
		assert_eq!(collect(&range(-1.3, -1.3, 1)), floats([-1.3]));
	}

	#[test]
	fn default_step_points_towards_stop() {
		let spec = RangeSpec::new(3).stop(0);
		let range = Range::new(Numeric::new(), spec).unwrap();
		assert_eq!(collect(&range), ints([3, 2, 1, 0]));
		assert_eq!(range.to_string(), "3-0");
	}

	#[test]
	fn construction_errors() {
		assert_eq!(
			Range::new(Numeric::new(), RangeSpec::new(1).stop(1).step(0)),
			Err(RangeError::InvalidStep)
		);
		assert_eq!(
			Range::new(Numeric::new(), RangeSpec::new(0).stop(1).step(-1)),
			Err(RangeError::InvalidDirection {
				start: 0.0,
				stop: 1.0,
				step: -1.0
			})
		);
		assert_eq!(
			Range::new(Numeric::new(), RangeSpec::new(0).stop(1).repeat(0)),
			Err(RangeError::InvalidRepeat(0))
		);
		assert!(matches!(
			Range::new(Numeric::new(), RangeSpec::new(f64::NAN)),
			Err(RangeError::InvalidRangeArgument(_))
		));
	}

	#[test]
	fn huge_steps_still_check_direction() {
		assert_eq!(
			Range::new(Numeric::new(), RangeSpec::new(0).stop(5).step(-1e10)),
			Err(RangeError::InvalidDirection {
				start: 0.0,
				stop: 5.0,
				step: -1e10
			})
		);
		assert_eq!(range(0, 5, 1e10).len(), 1);
	}

	#[test]
	fn len_tests() {
		assert_eq!(range(0, 10, 2).len(), 6);
		assert_eq!(range(0, 11, 2).len(), 6);
		assert_eq!(range(1, 3, 0.23).len(), 9);
		assert_eq!(range(0.9, 0.27, -0.08).len(), 8);
		assert_eq!(range(0, 1, 0.1).len(), 11);
		assert_eq!(range(0, 10, 2).repeat(), 1);
	}

	#[test]
	fn nth_tests() {
		let r = range(1, 10, 2);
		assert_eq!(r.nth(0), Ok(Number::Int(1)));
		assert_eq!(r.nth(4), Ok(Number::Int(9)));
		assert_eq!(
			r.nth(5),
			Err(RangeError::IndexOutOfRange { index: 5, len: 5 })
		);

		let r = range(0.1, 1.0, 0.2);
		assert_eq!(r.nth(3), Ok(Number::Float(0.7)));
		assert_eq!(r.last(), Number::Float(0.9));
	}

	#[test]
	fn contains_tests() {
		let r = range(0, 10, 2);
		assert!(r.contains(&Number::Int(4)));
		assert!(r.contains(&Number::Float(4.0)));
		assert!(!r.contains(&Number::Int(5)));
		assert!(!r.contains(&Number::Int(-1)));
		assert!(!r.contains(&Number::Int(11)));
		assert!(!r.contains(&Number::Int(12)));

		let r = range(0.1, 1.1, 0.2);
		assert!(r.contains(&Number::Float(0.5)));
		assert!(!r.contains(&Number::Float(0.6)));
		assert!(!r.contains(&Number::Float(0.05)));
		assert!(!r.contains(&Number::Float(1.2)));
	}

	#[test]
	fn position_and_count_tests() {
		assert_eq!(range(0, 10, 2).position(&Number::Int(4)), Some(2));
		assert_eq!(range(0, 1, 0.2).position(&Number::Float(0.4)), Some(2));
		assert_eq!(range(3.7, 1.2, -0.3).position(&Number::Float(3.1)), Some(2));
		assert_eq!(range(0, 10, 2).position(&Number::Int(1)), None);

		let spec = RangeSpec::new(1).stop(3).repeat(3);
		let r = Range::new(Numeric::new(), spec.clone()).unwrap();
		assert_eq!(r.count(&Number::Int(2)), 3);
		assert_eq!(r.count(&Number::Int(4)), 0);

		let r = Range::new(Numeric::new(), spec.wrap(true)).unwrap();
		assert_eq!(r.count(&Number::Int(2)), 1);
		assert_eq!(r.count(&Number::Int(9)), 1);
		assert_eq!(r.count(&Number::Int(10)), 0);
	}

	#[test]
	fn repeat_tests() {
		let spec = RangeSpec::new(1).stop(3).repeat(2);

		let r = Range::new(Numeric::new(), spec.clone()).unwrap();
		assert_eq!(collect(&r), ints([1, 2, 3, 1, 2, 3]));
		assert_eq!(r.total_len(), 6);
		assert_eq!(r.nth(4), Ok(Number::Int(2)));

		let r = Range::new(Numeric::new(), spec.wrap(true)).unwrap();
		assert_eq!(collect(&r), ints([1, 2, 3, 4, 5, 6]));
		assert_eq!(r.nth(4), Ok(Number::Int(5)));

		let spec = RangeSpec::new(10).step(-2).repeat(3).wrap(true);
		let r = Range::new(Numeric::new(), spec).unwrap();
		assert_eq!(collect(&r), ints([10, 8, 6]));

		let spec = RangeSpec::new(10).step(-2).repeat(3);
		let r = Range::new(Numeric::new(), spec).unwrap();
		assert_eq!(collect(&r), ints([10, 10, 10]));
	}

	#[test]
	fn iter_is_double_ended_and_restartable() {
		let r = range(0, 10, 2);
		assert_eq!(r.iter().rev().collect::<Vec<_>>(), ints([10, 8, 6, 4, 2, 0]));
		assert_eq!(r.iter().len(), 6);

		let mut iter = r.iter();
		assert_eq!(iter.next(), Some(Number::Int(0)));
		assert_eq!(iter.next_back(), Some(Number::Int(10)));
		assert_eq!(iter.nth(1), Some(Number::Int(4)));
		assert_eq!(iter.len(), 2);

		assert_eq!(collect(&r), collect(&r));
		assert_eq!((&r).into_iter().count(), 6);
	}

	#[test]
	fn excluding_tests() {
		let r = range(0, 10, 2);
		assert_eq!(
			r.excluding(ints([4, 5, 20])).collect::<Vec<_>>(),
			ints([0, 2, 6, 8, 10])
		);

		let r = range(0, 1, 0.1);
		assert_eq!(
			r.excluding(floats([0.3, 0.7])).collect::<Vec<_>>(),
			floats([0.0, 0.1, 0.2, 0.4, 0.5, 0.6, 0.8, 0.9, 1.0])
		);
	}

	#[test]
	fn shuffled_is_a_permutation_of_one_pass() {
		let spec = RangeSpec::new(0).stop(20).repeat(3);
		let r = Range::new(Numeric::new(), spec).unwrap();

		let mut rng = StdRng::seed_from_u64(42);
		let mut shuffled = r.shuffled(&mut rng).map(Number::as_f64).collect::<Vec<_>>();
		assert_eq!(shuffled.len(), 21);
		shuffled.sort_by(f64::total_cmp);
		assert_eq!(shuffled, (0..=20).map(f64::from).collect::<Vec<_>>());

		assert_eq!(r.random().count(), 21);
	}

	#[test]
	fn enumerate_tests() {
		assert_eq!(
			range(0, 4, 2).enumerate(0).collect::<Vec<_>>(),
			[(0, Number::Int(0)), (1, Number::Int(2)), (2, Number::Int(4))]
		);
		assert_eq!(
			range(0, 0.4, 0.2).enumerate(5).collect::<Vec<_>>(),
			[
				(5, Number::Float(0.0)),
				(6, Number::Float(0.2)),
				(7, Number::Float(0.4))
			]
		);
	}

	#[test]
	fn first_middle_last_tests() {
		assert_eq!(
			range(0, 10, 2).first_middle_last(),
			(Number::Int(0), Number::Int(4), Number::Int(10))
		);
		assert_eq!(
			range(1, 7, 1).first_middle_last(),
			(Number::Int(1), Number::Int(4), Number::Int(7))
		);
	}

	#[test]
	fn reversed_tests() {
		let r = range(0, 11, 2).reversed();
		assert_eq!(collect(&r), ints([10, 8, 6, 4, 2, 0]));
		assert_eq!(r.step(), Number::Int(-2));
		assert_eq!(r.to_string(), "10-0:-2");

		let r = range(0, 1, 0.2).reversed();
		assert_eq!(r.start(), Number::Float(1.0));
		assert_eq!(r.step(), Number::Float(-0.2));
	}

	#[test]
	fn equality_tests() {
		assert_eq!(range(0, 10, 2), range(0, 11, 2));
		assert_eq!(range(0, 10, 2), range(0.0, 10.0, 2.0));
		assert_ne!(range(0, 10, 2), range(0.1, 10, 2.0));
		assert_ne!(range(0, 10, 2), range(10, 0, -2));
		assert_eq!(range(5, 5, 1), range(5, 5, 3));
	}

	proptest! {
		#[test]
		fn length_matches_formula(
			start in -1000i64..1000,
			step in 1i64..50,
			count in 0i64..100,
			overshoot in 0i64..50,
		) {
			let stop = start + count * step + overshoot % step;
			let r = range(start, stop, step);

			prop_assert_eq!(r.len(), (count + 1) as usize);
			prop_assert_eq!(r.iter().count(), r.len());
			prop_assert_eq!(r.iter().last(), Some(Number::Int(start + count * step)));
		}

		#[test]
		fn negative_steps_mirror_positive_ones(
			start in -1000i64..1000,
			step in 1i64..50,
			count in 0i64..100,
		) {
			let stop = start + count * step;
			let forward = range(start, stop, step);
			let backward = range(stop, start, -step);

			prop_assert_eq!(
				backward.iter().collect::<Vec<_>>(),
				forward.iter().rev().collect::<Vec<_>>()
			);
		}

		#[test]
		fn float_grids_hold_their_values(
			start in -100i32..100,
			tenths in 1i32..20,
			count in 0i32..50,
		) {
			let step = f64::from(tenths) / 10.0;
			let stop = f64::from(start) + f64::from(count) * step;
			let r = range(start, stop, step);

			prop_assert_eq!(r.len(), (count + 1) as usize);
			for (k, value) in r.iter().enumerate() {
				let expected = f64::from(start) + k as f64 * step;
				prop_assert!(approx_eq(value.as_f64(), expected, step));
				prop_assert!(r.contains(&value));
			}
		}
	}
}
