/// The top-level compose operation.
pub mod compose;
