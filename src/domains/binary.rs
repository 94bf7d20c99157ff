//! A module containing the [`Binary`] string domain.

use core::ops::RangeInclusive;

use crate::conversion::{
	Domain, NumericConversion, RangeNotation, StepConversion,
};

/// The domain of zero-padded binary strings such as `"0011"`.
///
/// The padding width is learnt from the start value of each range.
///
/// # Examples
/// ```
/// use rangetools::domains::Binary;
/// use rangetools::Range;
///
/// let range: Range<Binary> = "0001-0100".parse().unwrap();
///
/// assert_eq!(
/// 	range.iter().collect::<Vec<_>>(),
/// 	["0001", "0010", "0011", "0100"]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binary {
	/// The minimum number of digits yielded strings are padded to.
	pub width: usize,
}

impl NumericConversion for Binary {
	type Item = String;

	fn item_to_num(&self, item: &String) -> f64 {
		match u64::from_str_radix(item, 2) {
			Ok(x) => x as f64,
			Err(_) => f64::NAN,
		}
	}
	fn num_to_item(&self, num: f64) -> String {
		format!("{:0width$b}", num.round() as u64, width = self.width)
	}
}
impl StepConversion for Binary {
	type Step = i64;

	fn step_to_num(&self, step: &i64) -> f64 {
		*step as f64
	}
	fn num_to_step(&self, num: f64) -> i64 {
		num.round() as i64
	}
}
impl Domain for Binary {
	fn refine(
		&self,
		start: &String,
		_stop: Option<&String>,
		_step: Option<&i64>,
	) -> Self {
		Binary {
			width: self.width.max(start.len()),
		}
	}
	fn bounds(&self) -> Option<RangeInclusive<f64>> {
		Some(0.0..=u64::MAX as f64)
	}
}

impl RangeNotation for Binary {
	fn parse_item(&self, text: &str) -> Option<String> {
		let valid = !text.is_empty() && text.bytes().all(|b| b == b'0' || b == b'1');
		valid.then(|| text.to_string())
	}
	fn parse_step(&self, text: &str) -> Option<i64> {
		text.parse().ok()
	}
	fn format_item(&self, item: &String) -> String {
		item.clone()
	}
	fn format_step(&self, step: &i64) -> String {
		step.to_string()
	}
}
