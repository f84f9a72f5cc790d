//! Unit tests module organization

pub mod routing;
