//! Record-level checks that run after field validation.

pub mod pressure;
pub mod sequence;
