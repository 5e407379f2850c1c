//! Moving average, minimum and maximum over a fixed window of samples.
//!
//! ```
//! use running_average::RunningAverage;
//!
//! let mut avg = RunningAverage::new(3);
//! for sample in [4.0, 8.0, 6.0, 10.0] {
//!     avg.add(sample);
//! }
//! assert_eq!(avg.average(), Some(8.0));
//! assert_eq!(avg.min(), Some(4.0));
//! assert_eq!(avg.max(), Some(10.0));
//! ```

pub mod config;
mod error;
mod running_average;
pub mod samples;

pub use error::{Error, Result};
pub use running_average::RunningAverage;
