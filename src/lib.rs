//! Coast FIRE calculator: back-solves the capital needed today to reach an
//! inflation-adjusted target by a given age, and projects it year by year.

pub mod api;
pub mod core;
