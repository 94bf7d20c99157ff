//! A module containing the calendar and clock domains [`Dates`],
//! [`DateTimes`] and [`Times`].
//!
//! Steps are [`TimeDelta`]s written as `<n><unit>` with unit one of `s`,
//! `m`, `h`, `d`, `w` or `y` (365 days), e.g. `4.5h` or `-2d`. Since `-`
//! and `:` occur inside dates and times, the range notation for these
//! domains uses `/` between start, stop and step, in the manner of ISO 8601
//! intervals: `2024-01-01/2024-01-31/1w`.

use core::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::conversion::{
	Domain, NumericConversion, RangeNotation, StepConversion,
};

const MILLIS_PER_SECOND: f64 = 1_000.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

const UNITS: [(char, i64); 6] = [
	('y', 365 * 86_400),
	('w', 7 * 86_400),
	('d', 86_400),
	('h', 3_600),
	('m', 60),
	('s', 1),
];

/// The domain of calendar dates; numbers are days since 1970-01-01.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use rangetools::domains::Dates;
/// use rangetools::{Range, RangeSpec};
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let stop = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
/// let range = Range::new(Dates, RangeSpec::new(start).stop(stop)).unwrap();
///
/// assert_eq!(range.len(), 5);
/// assert_eq!(range.to_string(), "2024-02-27/2024-03-02");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dates;

/// The domain of dates with a time of day; numbers are seconds since
/// 1970-01-01T00:00:00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimes;

/// The domain of times of day; numbers are seconds since midnight.
///
/// Times are cyclic: a range whose stop lies behind its start in the
/// direction of travel runs through midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Times;

impl NumericConversion for Dates {
	type Item = NaiveDate;

	fn item_to_num(&self, item: &NaiveDate) -> f64 {
		item.signed_duration_since(NaiveDate::default()).num_days() as f64
	}
	fn num_to_item(&self, num: f64) -> NaiveDate {
		TimeDelta::try_days(num.round() as i64)
			.and_then(|days| NaiveDate::default().checked_add_signed(days))
			.unwrap_or(if num < 0.0 {
				NaiveDate::MIN
			} else {
				NaiveDate::MAX
			})
	}
}
impl StepConversion for Dates {
	type Step = TimeDelta;

	fn step_to_num(&self, step: &TimeDelta) -> f64 {
		delta_to_seconds(step) / SECONDS_PER_DAY
	}
	fn num_to_step(&self, num: f64) -> TimeDelta {
		seconds_to_delta(num * SECONDS_PER_DAY)
	}
}
impl Domain for Dates {
	fn bounds(&self) -> Option<RangeInclusive<f64>> {
		Some(
			self.item_to_num(&NaiveDate::MIN)
				..=self.item_to_num(&NaiveDate::MAX),
		)
	}
}

impl NumericConversion for DateTimes {
	type Item = NaiveDateTime;

	fn item_to_num(&self, item: &NaiveDateTime) -> f64 {
		delta_to_seconds(&item.signed_duration_since(NaiveDateTime::default()))
	}
	fn num_to_item(&self, num: f64) -> NaiveDateTime {
		NaiveDateTime::default()
			.checked_add_signed(seconds_to_delta(num))
			.unwrap_or(if num < 0.0 {
				NaiveDateTime::MIN
			} else {
				NaiveDateTime::MAX
			})
	}
}
impl StepConversion for DateTimes {
	type Step = TimeDelta;

	fn step_to_num(&self, step: &TimeDelta) -> f64 {
		delta_to_seconds(step)
	}
	fn num_to_step(&self, num: f64) -> TimeDelta {
		seconds_to_delta(num)
	}
}
impl Domain for DateTimes {
	fn default_step(&self) -> f64 {
		SECONDS_PER_DAY
	}
	fn bounds(&self) -> Option<RangeInclusive<f64>> {
		Some(
			self.item_to_num(&NaiveDateTime::MIN)
				..=self.item_to_num(&NaiveDateTime::MAX),
		)
	}
}

impl NumericConversion for Times {
	type Item = NaiveTime;

	fn item_to_num(&self, item: &NaiveTime) -> f64 {
		f64::from(item.num_seconds_from_midnight())
			+ f64::from(item.nanosecond()) / 1e9
	}
	fn num_to_item(&self, num: f64) -> NaiveTime {
		let millis = (num * MILLIS_PER_SECOND)
			.round()
			.rem_euclid(SECONDS_PER_DAY * MILLIS_PER_SECOND);
		let seconds = (millis / MILLIS_PER_SECOND).floor();
		let nanos = (millis - seconds * MILLIS_PER_SECOND) * 1e6;
		NaiveTime::from_num_seconds_from_midnight_opt(
			seconds as u32,
			nanos.round() as u32,
		)
		.unwrap_or_default()
	}
}
impl StepConversion for Times {
	type Step = TimeDelta;

	fn step_to_num(&self, step: &TimeDelta) -> f64 {
		delta_to_seconds(step)
	}
	fn num_to_step(&self, num: f64) -> TimeDelta {
		seconds_to_delta(num)
	}
}
impl Domain for Times {
	fn default_step(&self) -> f64 {
		3_600.0
	}
	fn period(&self) -> Option<f64> {
		Some(SECONDS_PER_DAY)
	}
}

impl RangeNotation for Dates {
	const BOUND_DELIMITER: char = '/';
	const STEP_DELIMITER: char = '/';

	fn parse_item(&self, text: &str) -> Option<NaiveDate> {
		text.parse().ok()
	}
	fn parse_step(&self, text: &str) -> Option<TimeDelta> {
		parse_delta(text)
	}
	fn format_item(&self, item: &NaiveDate) -> String {
		item.format("%Y-%m-%d").to_string()
	}
	fn format_step(&self, step: &TimeDelta) -> String {
		format_delta(step)
	}
}
impl RangeNotation for DateTimes {
	const BOUND_DELIMITER: char = '/';
	const STEP_DELIMITER: char = '/';

	fn parse_item(&self, text: &str) -> Option<NaiveDateTime> {
		text.parse().ok()
	}
	fn parse_step(&self, text: &str) -> Option<TimeDelta> {
		parse_delta(text)
	}
	fn format_item(&self, item: &NaiveDateTime) -> String {
		item.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
	}
	fn format_step(&self, step: &TimeDelta) -> String {
		format_delta(step)
	}
}
impl RangeNotation for Times {
	const BOUND_DELIMITER: char = '/';
	const STEP_DELIMITER: char = '/';

	fn parse_item(&self, text: &str) -> Option<NaiveTime> {
		text.parse().ok()
	}
	fn parse_step(&self, text: &str) -> Option<TimeDelta> {
		parse_delta(text)
	}
	fn format_item(&self, item: &NaiveTime) -> String {
		item.format("%H:%M:%S%.f").to_string()
	}
	fn format_step(&self, step: &TimeDelta) -> String {
		format_delta(step)
	}
}

fn delta_to_seconds(delta: &TimeDelta) -> f64 {
	delta.num_milliseconds() as f64 / MILLIS_PER_SECOND
}

fn seconds_to_delta(seconds: f64) -> TimeDelta {
	TimeDelta::try_milliseconds((seconds * MILLIS_PER_SECOND).round() as i64)
		.unwrap_or(if seconds < 0.0 {
			TimeDelta::MIN
		} else {
			TimeDelta::MAX
		})
}

/// Parses a step such as `90s`, `4.5h` or `-1w`.
pub fn parse_delta(text: &str) -> Option<TimeDelta> {
	let unit = text.chars().last()?;
	let (_, seconds) = UNITS.iter().find(|(name, _)| *name == unit)?;
	let amount = &text[..text.len() - unit.len_utf8()];
	if !amount.bytes().any(|b| b.is_ascii_digit())
		|| !amount
			.bytes()
			.all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+'))
	{
		return None;
	}
	let amount: f64 = amount.parse().ok()?;
	let millis = amount * *seconds as f64 * MILLIS_PER_SECOND;
	TimeDelta::try_milliseconds(millis.round() as i64)
}

/// Renders a step in the largest unit that divides it exactly.
pub fn format_delta(delta: &TimeDelta) -> String {
	let millis = delta.num_milliseconds();
	if millis % 1_000 != 0 {
		return format!("{}s", millis as f64 / MILLIS_PER_SECOND);
	}
	let seconds = millis / 1_000;
	if seconds == 0 {
		return "0s".to_string();
	}
	for (name, size) in UNITS {
		if seconds % size == 0 {
			return format!("{}{name}", seconds / size);
		}
	}
	unreachable!("every whole number of seconds is divisible by one second")
}
