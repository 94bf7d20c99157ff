//! Ready-made domains for [`Range`](crate::Range) and
//! [`RangeList`](crate::RangeList).

pub mod ascii;
pub mod binary;
pub mod enumerated;
pub mod numeric;
pub mod temporal;

pub use ascii::Ascii;
pub use binary::Binary;
pub use enumerated::Enumerated;
pub use numeric::{Number, Numeric};
pub use temporal::{DateTimes, Dates, Times};
