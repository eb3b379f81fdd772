//! Image I/O around the `image` codec.

/// Loading screenshots and backgrounds.
pub mod decode;
/// Persisting the composite.
pub mod encode;
