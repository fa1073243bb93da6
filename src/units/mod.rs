
//! Subsystem describing the closed set of unit categories and the
//! units that can be converted within them.

pub mod catalog;
pub mod category;
pub mod unit;
