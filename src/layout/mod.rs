/// Relative-to-absolute geometry resolution.
pub mod geometry;
