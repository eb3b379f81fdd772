//! Caller-facing configuration: screenshot entries, layout files, and their diagnostics.

/// Skip reasons and warnings.
pub mod diagnostics;
/// Screenshot entry configuration.
pub mod entry;
/// JSON layout files.
pub mod layout;
