//! # u-duration
//!
//! Statistics for recorded durations: descriptive summaries, percentile
//! confidence intervals, normality and randomness diagnostics, and a
//! penalty score for user-stated forecast intervals.
//!
//! The crate operates on raw `f64` observations (travel times in minutes,
//! request latencies, anything duration-like) without knowledge of where
//! they came from. All functions are pure; nothing is cached or shared.
//!
//! ## Modules
//!
//! - [`special`] — Normal quantile (Acklam) and CDF (Abramowitz–Stegun erf)
//! - [`descriptive`] — Min, max, mean, median, standard deviation, percentiles
//! - [`interval`] — Two-sided percentile confidence intervals
//! - [`testing`] — Shapiro-Wilk, Mann-Kendall and Wald-Wolfowitz runs tests
//! - [`distribution`] — Normal Q-Q plot data, R² and fit rating
//! - [`scoring`] — Forecast-interval scoring and tamper-evidence checksum
//! - [`report`] — Every analysis of one observation set in a single call
//!
//! ## Conventions
//!
//! - Analyses that the data cannot support return `None` (too few
//!   observations, degenerate or non-finite input); they never panic.
//! - Order-sensitive tests (Mann-Kendall, runs) read observations in
//!   recorded order. Everything else works on a sorted copy.
//! - Numerical constants of the approximations are fixed; results are
//!   reproducible bit-for-bit across runs.

pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod interval;
pub mod report;
pub mod scoring;
pub mod special;
pub mod testing;

pub use error::ScoringError;
