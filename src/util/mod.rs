//! Small shared helpers used across layers.

pub mod clock;
pub mod parse;
