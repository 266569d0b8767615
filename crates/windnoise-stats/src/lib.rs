//! Descriptive statistics for wind-speed records.
//!
//! This crate provides:
//!
//! - **Summary statistics**: count, mean, sample standard deviation, extrema and quartiles
//! - **Percentiles**: linearly interpolated percentile values for a dataset
//! - **Histogram generation**: equal-width frequency distributions
//!
//! # Modules
//!
//! - [`descriptive`]: Summary statistics for a set of samples
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction for visualizing data distributions
//!
//! # Examples
//!
//! ## Summarizing samples
//!
//! ```
//! use windnoise_stats::descriptive::SummaryStatistics;
//!
//! let speeds = [3.1, 4.7, 2.2, 5.9, 4.1];
//! let stats = SummaryStatistics::new(&speeds).unwrap();
//! assert_eq!(stats.count, 5);
//! assert_eq!(stats.median, 4.1);
//! ```
//!
//! ## Empty input is an error
//!
//! ```
//! use windnoise_stats::descriptive::{SummaryError, SummaryStatistics};
//!
//! assert_eq!(SummaryStatistics::new(&[]), Err(SummaryError::EmptyInput));
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use windnoise_stats::histogram::Histogram;
//!
//! let speeds = [3.1, 4.7, 2.2, 5.9, 4.1];
//! let histogram = Histogram::new(speeds, 50);
//! assert_eq!(histogram.total(), 5);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod percentiles;
