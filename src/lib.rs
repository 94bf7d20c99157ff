//! This crate provides [`Range`], an inclusive arithmetic progression over
//! any domain that can be mapped onto the number line, and [`RangeList`],
//! an ordered list of them that can be compacted into the fewest ranges
//! covering the same values.
//!
//! ## Example using plain numbers
//!
//! ```rust
//! use rangetools::domains::{Number, Numeric};
//! use rangetools::{make_inclusive_range, RangeList};
//!
//! let range = make_inclusive_range(1, 1.5, 0.1).unwrap();
//!
//! assert_eq!(range.len(), 6);
//! assert_eq!(range.nth(3), Ok(Number::Float(1.3)));
//! assert_eq!(range.contains(&Number::Float(1.4)), true);
//! assert_eq!(range.to_string(), "1-1.5:0.1");
//!
//! let mut list = RangeList::<Numeric>::new("12,1-4,6-10:2").unwrap();
//! list.compact();
//! assert_eq!(list.to_string(), "1-4,6-12:2");
//! ```
//!
//! ## Example using a custom domain
//!
//! ```rust
//! use rangetools::conversion::{
//! 	Domain, NumericConversion, RangeNotation, UniformStep,
//! };
//! use rangetools::Range;
//!
//! // Frequencies in kHz, written with their unit
//! #[derive(Debug, Clone, Default)]
//! struct Kilohertz;
//!
//! impl NumericConversion for Kilohertz {
//! 	type Item = u32;
//!
//! 	fn item_to_num(&self, item: &u32) -> f64 {
//! 		f64::from(*item)
//! 	}
//! 	fn num_to_item(&self, num: f64) -> u32 {
//! 		num.round() as u32
//! 	}
//! }
//! impl UniformStep for Kilohertz {}
//! impl Domain for Kilohertz {
//! 	fn default_step(&self) -> f64 {
//! 		100.0
//! 	}
//! }
//! impl RangeNotation for Kilohertz {
//! 	fn parse_item(&self, text: &str) -> Option<u32> {
//! 		text.strip_suffix("kHz")?.parse().ok()
//! 	}
//! 	fn parse_step(&self, text: &str) -> Option<u32> {
//! 		self.parse_item(text)
//! 	}
//! 	fn format_item(&self, item: &u32) -> String {
//! 		format!("{item}kHz")
//! 	}
//! 	fn format_step(&self, step: &u32) -> String {
//! 		self.format_item(step)
//! 	}
//! }
//!
//! let range: Range<Kilohertz> = "100kHz-500kHz".parse().unwrap();
//! assert_eq!(range.iter().collect::<Vec<_>>(), [100, 200, 300, 400, 500]);
//! assert_eq!(range.to_string(), "100kHz-500kHz");
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Inclusive-ness
//!
//! Every range includes its stop value whenever the stop lies on the
//! progression, so `1-4` yields four values. When it doesn't, the range
//! ends on the last value before the stop: `0-11:2` ends on `10`.
//!
//! ### Domains
//!
//! A domain says how its items map onto `f64` and back (see
//! [`conversion`]). All of the arithmetic happens on those numbers, and
//! every value is computed from its index as `start + k * step` so no
//! floating point error builds up along a range. Comparisons between
//! numbers use a small relative tolerance, [`conversion::TOLERANCE`].
//!
//! Ready-made domains live in [`domains`]: numbers, ASCII characters,
//! binary strings, the elements of any fixed sequence, dates, date-times
//! and times of day.
//!
//! ### Notation
//!
//! Ranges read and write as `start`, `start-stop` or `start-stop:step`
//! (see [`notation`]), and lists separate those with `,`. Domains whose
//! items contain `-` or `:` use other delimiters: temporal ranges read as
//! `2024-01-01/2024-03-01/1w`.
//!
//! ### Compaction
//!
//! [`RangeList::compact()`] sorts and deduplicates the values of a list,
//! then greedily turns every run of at least three evenly spaced values
//! into one range. `1,2,3,4,6,8,10,12` compacts into `1-4,6-12:2`.
//!
//! # Features
//!
//! - `serde`: [`Range`] and [`RangeList`] serialize into their textual
//!   notation and deserialize by parsing it.

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub mod conversion;
pub mod domains;
pub mod error;
pub mod funcs;
pub mod notation;
pub mod range;
pub mod range_list;

pub use crate::conversion::{
	Domain, NumericConversion, RangeNotation, StepConversion, UniformStep,
};
pub use crate::error::RangeError;
pub use crate::funcs::{format_compacted, make_inclusive_range, make_range};
pub use crate::range::{Range, RangeSpec};
pub use crate::range_list::{RangeArg, RangeList, RangeListOptions};
