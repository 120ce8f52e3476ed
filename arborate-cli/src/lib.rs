//! Arborate CLI library: the built-in program catalog.

pub mod catalog;
