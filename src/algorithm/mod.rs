//! Algorithm implementations for occupation coding
//!
//! This module contains the rule-based classifier and its aggregation to
//! survey categories, the manual correction overlay, and the comparison of
//! category distributions between surveys.

pub mod corrections;
pub mod distribution;
pub mod occupation;
