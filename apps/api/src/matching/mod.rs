//! Career matching: the weighted scorer, its lookup tables and the
//! display filters applied to a ranked list.

pub mod filters;
pub mod handlers;
pub mod scorer;
pub mod tables;

pub use scorer::{CareerMatcher, WeightedCareerMatcher};
