//! A module containing [`RangeError`], the single error type returned by
//! every fallible operation in this crate.

use thiserror::Error;

/// The error returned when constructing, indexing, parsing or summarising
/// ranges fails.
///
/// No operation that returns this error leaves a partially mutated
/// [`RangeList`](crate::RangeList) behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
	/// The step was zero (or did not map to a finite number).
	#[error("range step cannot be zero")]
	InvalidStep,

	/// The step points away from the stop value.
	#[error("step {step} never reaches stop {stop} from start {start}")]
	InvalidDirection {
		/// The numeric start of the rejected range.
		start: f64,
		/// The numeric stop of the rejected range.
		stop: f64,
		/// The numeric step of the rejected range.
		step: f64,
	},

	/// The repeat count was less than one.
	#[error("repeat count must be at least 1, got {0}")]
	InvalidRepeat(usize),

	/// A positional lookup was past the end of the progression.
	#[error("index {index} is out of range for a progression of {len} values")]
	IndexOutOfRange {
		/// The requested index.
		index: usize,
		/// The number of values the progression yields.
		len: usize,
	},

	/// Text could not be parsed as range notation.
	#[error("unable to parse range specification: '{0}'")]
	MalformedRangeText(String),

	/// A constructor argument could not be turned into a range.
	#[error("invalid range argument: {0}")]
	InvalidRangeArgument(String),

	/// A summary was requested from a list without any values.
	#[error("range list is empty")]
	EmptyRangeList,
}
