//! # Primitives
//!
//! Composite primitives built from the basic solids.

pub mod rounded_box;

pub use rounded_box::{rounded_box, RoundedBox};

#[cfg(test)]
mod tests;
