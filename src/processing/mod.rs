//! Signal processing for the fix stream

pub mod smoother;

pub use smoother::PositionSmoother;
