//! Time-series record types.
//!
//! A record is an ordered sequence of samples, a parallel sequence of hazard
//! flags, a description and a start date. Instances are produced by
//! [`crate::validate::validate`] and are immutable afterwards.

mod date;
mod error;
mod sample;
mod series;

pub use date::parse_start_date;
pub(crate) use error::type_name;
pub use error::{ValidationError, ValidationErrorKind};
pub use sample::{HazardFlag, Sample};
pub use series::TimeSeriesRecord;
