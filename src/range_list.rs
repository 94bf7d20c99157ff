//! A module containing [`RangeList`], an ordered collection of [`Range`]s
//! over one domain, and [`RangeArg`], everything a [`RangeList`] can be
//! built from.

use core::fmt;
use core::iter::{FlatMap, FusedIterator};
use core::ops::{Add, AddAssign};
use core::slice;
use core::str::FromStr;

use itertools::Itertools;
use log::{debug, trace};

use crate::conversion::{approx_eq, Domain, RangeNotation};
use crate::domains::{Number, Numeric};
use crate::notation::parse_range_spec;
use crate::range;
use crate::{Range, RangeError, RangeSpec};

/// Options for the textual form of a [`RangeList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeListOptions {
	/// The text between ranges, `","` by default.
	pub separator: String,
}

impl Default for RangeListOptions {
	fn default() -> Self {
		RangeListOptions {
			separator: String::from(","),
		}
	}
}

/// Anything that can be turned into the ranges of a [`RangeList`].
///
/// You'll rarely name this type: the [`From`] implementations let
/// [`RangeList`] constructors take strings, ranges, other lists and
/// arrays or [`Vec`]s of any of them directly.
#[derive(Debug, Clone)]
pub enum RangeArg<D>
where
	D: Domain,
{
	/// A single item, which becomes a range of that one value.
	Item(D::Item),
	/// A range, added as is.
	Range(Range<D>),
	/// Every range of another list.
	List(RangeList<D>),
	/// Separated range notation, such as `"1-4,6-12:2"`.
	Text(String),
	/// Several arguments, resolved in order.
	Many(Vec<RangeArg<D>>),
}

impl<D> From<&str> for RangeArg<D>
where
	D: Domain,
{
	fn from(text: &str) -> Self {
		RangeArg::Text(text.to_string())
	}
}
impl<D> From<String> for RangeArg<D>
where
	D: Domain,
{
	fn from(text: String) -> Self {
		RangeArg::Text(text)
	}
}
impl<D> From<Range<D>> for RangeArg<D>
where
	D: Domain,
{
	fn from(range: Range<D>) -> Self {
		RangeArg::Range(range)
	}
}
impl<D> From<RangeList<D>> for RangeArg<D>
where
	D: Domain,
{
	fn from(list: RangeList<D>) -> Self {
		RangeArg::List(list)
	}
}
impl<D, T> From<Vec<T>> for RangeArg<D>
where
	D: Domain,
	T: Into<RangeArg<D>>,
{
	fn from(args: Vec<T>) -> Self {
		RangeArg::Many(args.into_iter().map(Into::into).collect())
	}
}
impl<D, T, const N: usize> From<[T; N]> for RangeArg<D>
where
	D: Domain,
	T: Into<RangeArg<D>>,
{
	fn from(args: [T; N]) -> Self {
		RangeArg::Many(args.into_iter().map(Into::into).collect())
	}
}
impl From<Number> for RangeArg<Numeric> {
	fn from(x: Number) -> Self {
		RangeArg::Item(x)
	}
}
impl From<i32> for RangeArg<Numeric> {
	fn from(x: i32) -> Self {
		RangeArg::Item(Number::from(x))
	}
}
impl From<i64> for RangeArg<Numeric> {
	fn from(x: i64) -> Self {
		RangeArg::Item(Number::from(x))
	}
}
impl From<f64> for RangeArg<Numeric> {
	fn from(x: f64) -> Self {
		RangeArg::Item(Number::from(x))
	}
}

/// An ordered list of [`Range`]s sharing one domain.
///
/// Iterating a list yields the values of each range in turn, duplicates
/// included. [`RangeList::compact()`] rewrites the list into the fewest
/// ranges covering the same set of values.
///
/// # Examples
/// ```
/// use rangetools::RangeList;
/// use rangetools::domains::Numeric;
///
/// let mut list = RangeList::<Numeric>::new("6,1-4,8-12:2").unwrap();
/// assert_eq!(list.total_len(), 8);
///
/// list.compact();
/// assert_eq!(list.to_string(), "1-4,6-12:2");
/// ```
#[derive(Debug, Clone)]
pub struct RangeList<D>
where
	D: Domain,
{
	domain: D,
	ranges: Vec<Range<D>>,
	options: RangeListOptions,
}

impl<D> RangeList<D>
where
	D: RangeNotation,
{
	/// Creates a list over the default domain.
	///
	/// # Errors
	///
	/// The first [`RangeError`] any part of `arg` resolves to.
	pub fn new(arg: impl Into<RangeArg<D>>) -> Result<Self, RangeError>
	where
		D: Default,
	{
		RangeList::with_options(D::default(), arg, RangeListOptions::default())
	}

	/// Creates a list over `domain`.
	///
	/// # Errors
	///
	/// The first [`RangeError`] any part of `arg` resolves to.
	pub fn with_domain(
		domain: D,
		arg: impl Into<RangeArg<D>>,
	) -> Result<Self, RangeError> {
		RangeList::with_options(domain, arg, RangeListOptions::default())
	}

	/// Creates a list over `domain` with the given options.
	///
	/// # Errors
	///
	/// The first [`RangeError`] any part of `arg` resolves to.
	pub fn with_options(
		domain: D,
		arg: impl Into<RangeArg<D>>,
		options: RangeListOptions,
	) -> Result<Self, RangeError> {
		let mut list = RangeList {
			domain,
			ranges: Vec::new(),
			options,
		};
		list.extend(arg)?;
		Ok(list)
	}

	/// Appends every range `arg` resolves to.
	///
	/// # Errors
	///
	/// The first [`RangeError`] any part of `arg` resolves to, in which
	/// case the list is left unchanged.
	pub fn extend(
		&mut self,
		arg: impl Into<RangeArg<D>>,
	) -> Result<(), RangeError> {
		let mut resolved = Vec::new();
		self.resolve(arg.into(), &mut resolved)?;
		self.ranges.append(&mut resolved);
		Ok(())
	}

	/// Appends the single range `arg` resolves to.
	///
	/// # Errors
	///
	/// [`RangeError::InvalidRangeArgument`] if `arg` does not resolve to
	/// exactly one range, or the error it resolves to.
	pub fn push(&mut self, arg: impl Into<RangeArg<D>>) -> Result<(), RangeError> {
		let range = self.resolve_one(arg.into())?;
		self.ranges.push(range);
		Ok(())
	}

	/// Inserts the single range `arg` resolves to at `index`.
	///
	/// # Errors
	///
	/// [`RangeError::IndexOutOfRange`] if `index > self.len()`, or any
	/// error [`RangeList::push()`] returns.
	pub fn insert(
		&mut self,
		index: usize,
		arg: impl Into<RangeArg<D>>,
	) -> Result<(), RangeError> {
		if index > self.ranges.len() {
			return Err(RangeError::IndexOutOfRange {
				index,
				len: self.ranges.len(),
			});
		}
		let range = self.resolve_one(arg.into())?;
		self.ranges.insert(index, range);
		Ok(())
	}

	/// Replaces the range at `index` with the single range `arg` resolves
	/// to, returning the replaced range.
	///
	/// # Errors
	///
	/// [`RangeError::IndexOutOfRange`] if `index >= self.len()`, or any
	/// error [`RangeList::push()`] returns.
	pub fn set(
		&mut self,
		index: usize,
		arg: impl Into<RangeArg<D>>,
	) -> Result<Range<D>, RangeError> {
		self.check_index(index)?;
		let range = self.resolve_one(arg.into())?;
		Ok(core::mem::replace(&mut self.ranges[index], range))
	}

	/// Renders the list with `separator` instead of the configured one.
	pub fn to_string_with(&self, separator: &str) -> String {
		self.ranges.iter().join(separator)
	}

	fn resolve(
		&self,
		arg: RangeArg<D>,
		out: &mut Vec<Range<D>>,
	) -> Result<(), RangeError> {
		match arg {
			RangeArg::Item(item) => {
				out.push(Range::new(self.domain.clone(), RangeSpec::new(item))?);
			}
			RangeArg::Range(range) => out.push(range),
			RangeArg::List(list) => out.extend(list.ranges),
			RangeArg::Text(text) => {
				if text.trim().is_empty() {
					return Ok(());
				}
				for part in text.split(self.options.separator.as_str()) {
					trace!("parsing range {part:?}");
					let spec = parse_range_spec(&self.domain, part)?;
					out.push(Range::new(self.domain.clone(), spec)?);
				}
			}
			RangeArg::Many(args) => {
				for arg in args {
					self.resolve(arg, out)?;
				}
			}
		}
		Ok(())
	}

	fn resolve_one(&self, arg: RangeArg<D>) -> Result<Range<D>, RangeError> {
		let mut resolved = Vec::new();
		self.resolve(arg, &mut resolved)?;
		match (resolved.pop(), resolved.is_empty()) {
			(Some(range), true) => Ok(range),
			(last, _) => Err(RangeError::InvalidRangeArgument(format!(
				"expected exactly one range but got {}",
				resolved.len() + usize::from(last.is_some())
			))),
		}
	}
}

impl<D> RangeList<D>
where
	D: Domain,
{
	/// The domain new ranges are parsed and compacted with.
	pub fn domain(&self) -> &D {
		&self.domain
	}
	/// The separator used by [`Display`](fmt::Display) and by text
	/// arguments.
	pub fn separator(&self) -> &str {
		&self.options.separator
	}
	/// The ranges, in order.
	pub fn ranges(&self) -> &[Range<D>] {
		&self.ranges
	}
	/// The number of ranges.
	pub fn len(&self) -> usize {
		self.ranges.len()
	}
	/// Returns `true` if the list has no ranges.
	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}
	/// The number of values [`RangeList::iter()`] yields.
	pub fn total_len(&self) -> usize {
		self.ranges.iter().map(Range::total_len).sum()
	}
	/// Returns the range at `index`.
	pub fn get(&self, index: usize) -> Option<&Range<D>> {
		self.ranges.get(index)
	}

	/// Removes and returns the range at `index`.
	///
	/// # Errors
	///
	/// [`RangeError::IndexOutOfRange`] if `index >= self.len()`.
	pub fn remove(&mut self, index: usize) -> Result<Range<D>, RangeError> {
		self.check_index(index)?;
		Ok(self.ranges.remove(index))
	}

	/// Reverses the order of the ranges. The ranges themselves are
	/// unchanged.
	pub fn reverse(&mut self) {
		self.ranges.reverse();
	}

	/// Returns an iterator over the values of every range in turn.
	pub fn iter<'a>(&'a self) -> Iter<'a, D> {
		Iter {
			inner: self
				.ranges
				.iter()
				.flat_map(Range::iter as fn(&'a Range<D>) -> range::Iter<'a, D>),
		}
	}

	/// Returns the value at `index` in the sequence [`RangeList::iter()`]
	/// yields.
	///
	/// # Errors
	///
	/// [`RangeError::IndexOutOfRange`] if `index >= self.total_len()`.
	pub fn nth(&self, index: usize) -> Result<D::Item, RangeError> {
		let mut offset = index;
		for range in self.ranges.iter() {
			match range.nth(offset) {
				Ok(item) => return Ok(item),
				Err(_) => offset -= range.total_len(),
			}
		}
		Err(RangeError::IndexOutOfRange {
			index,
			len: self.total_len(),
		})
	}

	/// Returns the first, middle and last values [`RangeList::iter()`]
	/// yields, the middle being the earlier of the two central values for
	/// an even count.
	///
	/// # Errors
	///
	/// [`RangeError::EmptyRangeList`] if the list yields no values.
	///
	/// # Examples
	/// ```
	/// use rangetools::RangeList;
	/// use rangetools::domains::{Number, Numeric};
	///
	/// let list = RangeList::<Numeric>::new("10-0:-2, 9-10:.1, 1-4:.5").unwrap();
	///
	/// assert_eq!(
	/// 	list.first_middle_last(),
	/// 	Ok((Number::Int(10), Number::Float(9.5), Number::Float(4.0)))
	/// );
	/// ```
	pub fn first_middle_last(
		&self,
	) -> Result<(D::Item, D::Item, D::Item), RangeError> {
		let total = self.total_len();
		if total == 0 {
			return Err(RangeError::EmptyRangeList);
		}
		Ok((self.nth(0)?, self.nth((total - 1) / 2)?, self.nth(total - 1)?))
	}

	/// Returns `true` if the list is exactly one range stepping forward by
	/// the domain's default step.
	pub fn continuous(&self) -> bool {
		match self.ranges.as_slice() {
			[range] => approx_eq(
				range.step_num(),
				range.domain().default_step(),
				range.step_num(),
			),
			_ => false,
		}
	}

	/// Rewrites the list into the fewest ranges that yield the same set of
	/// values, ordered by their start.
	///
	/// Values are sorted and deduplicated, then scanned from the smallest:
	/// the longest run of evenly spaced values from the current one becomes
	/// a single range if it has at least three values, otherwise the
	/// current value becomes a range of its own.
	///
	/// # Examples
	/// ```
	/// use rangetools::RangeList;
	/// use rangetools::domains::Numeric;
	///
	/// let mut list = RangeList::<Numeric>::new("1-50:2,25-75:2").unwrap();
	/// list.compact();
	/// assert_eq!(list.to_string(), "1-75:2");
	///
	/// let mut list = RangeList::<Numeric>::new(["0-10:2", "1-11:2"]).unwrap();
	/// list.compact();
	/// assert_eq!(list.to_string(), "0-11");
	/// ```
	pub fn compact(&mut self) {
		let mut values = self
			.iter()
			.map(|item| (self.domain.item_to_num(&item), item))
			.collect::<Vec<_>>();
		values.sort_by(|a, b| a.0.total_cmp(&b.0));
		values.dedup_by(|next, prev| approx_eq(next.0, prev.0, 1.0));

		let gaps = values
			.iter()
			.tuple_windows()
			.map(|(a, b)| b.0 - a.0)
			.collect::<Vec<_>>();

		let mut ranges = Vec::new();
		let mut i = 0;
		while i < values.len() {
			let run = match gaps.get(i) {
				Some(&gap) => {
					1 + gaps[i..]
						.iter()
						.take_while(|x| approx_eq(**x, gap, gap))
						.count()
				}
				None => 1,
			};

			if run >= 3 {
				let (first, last) = (&values[i], &values[i + run - 1]);
				let step = (last.0 - first.0) / (run - 1) as f64;
				let spec = RangeSpec {
					start: first.1.clone(),
					stop: Some(last.1.clone()),
					step: Some(self.domain.num_to_step(step)),
					repeat: 1,
					wrap: false,
				};
				ranges.push(Range::from_grid(
					self.domain.clone(),
					spec,
					first.0,
					step,
					run,
				));
				i += run;
			} else {
				let (num, item) = &values[i];
				let spec = RangeSpec::new(item.clone());
				ranges.push(Range::from_grid(
					self.domain.clone(),
					spec,
					*num,
					self.domain.default_step(),
					1,
				));
				i += 1;
			}
		}

		debug!(
			"compacted {} ranges holding {} distinct values into {} ranges",
			self.ranges.len(),
			values.len(),
			ranges.len()
		);
		self.ranges = ranges;
	}

	fn check_index(&self, index: usize) -> Result<(), RangeError> {
		if index >= self.ranges.len() {
			return Err(RangeError::IndexOutOfRange {
				index,
				len: self.ranges.len(),
			});
		}
		Ok(())
	}
}

impl<D> Default for RangeList<D>
where
	D: Domain + Default,
{
	fn default() -> Self {
		RangeList {
			domain: D::default(),
			ranges: Vec::new(),
			options: RangeListOptions::default(),
		}
	}
}

/// Lists are equal when they hold equal ranges in the same order.
impl<D> PartialEq for RangeList<D>
where
	D: Domain,
{
	fn eq(&self, other: &Self) -> bool {
		self.ranges == other.ranges
	}
}

impl<D> fmt::Display for RangeList<D>
where
	D: RangeNotation,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_string_with(&self.options.separator))
	}
}

impl<D> FromStr for RangeList<D>
where
	D: RangeNotation + Default,
{
	type Err = RangeError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		RangeList::new(text)
	}
}

impl<D> Add for RangeList<D>
where
	D: Domain,
{
	type Output = RangeList<D>;

	fn add(mut self, other: Self) -> Self::Output {
		self.ranges.extend(other.ranges);
		self
	}
}
impl<D> AddAssign for RangeList<D>
where
	D: Domain,
{
	fn add_assign(&mut self, other: Self) {
		self.ranges.extend(other.ranges);
	}
}

impl<'a, D> IntoIterator for &'a RangeList<D>
where
	D: Domain,
{
	type Item = D::Item;
	type IntoIter = Iter<'a, D>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An iterator over the values of a [`RangeList`].
///
/// This `struct` is created by the [`iter`] method on [`RangeList`]. See
/// its documentation for more.
///
/// [`iter`]: RangeList::iter
pub struct Iter<'a, D>
where
	D: Domain,
{
	inner: FlatMap<
		slice::Iter<'a, Range<D>>,
		range::Iter<'a, D>,
		fn(&'a Range<D>) -> range::Iter<'a, D>,
	>,
}

impl<D> Iterator for Iter<'_, D>
where
	D: Domain,
{
	type Item = D::Item;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<D> DoubleEndedIterator for Iter<'_, D>
where
	D: Domain,
{
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}
impl<D> FusedIterator for Iter<'_, D> where D: Domain {}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::conversion::RangeNotation;
	use crate::RangeList;

	impl<D> Serialize for RangeList<D>
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

	impl<'de, D> Deserialize<'de> for RangeList<D>
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
