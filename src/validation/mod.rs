//! Fix validation and quality gating

pub mod accuracy;

pub use accuracy::AccuracyValidator;
