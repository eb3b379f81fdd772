/// Alpha compositing onto the accumulator.
pub mod composite;
