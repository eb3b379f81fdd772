/// Pixel value types shared by every stage.
pub mod core;
/// Crate error type.
pub mod error;
pub(crate) mod math;
