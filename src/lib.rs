//! # Exercise Validation
//!
//! Grading helpers for the deep-learning tutorial exercise series: tensor
//! creation, NumPy-style array interop, and architecture checks for the MLP
//! and CNN exercises.
//!
//! Each validator inspects a candidate value and returns a
//! [`ValidationOutcome`] carrying a pass/fail flag and a message for the
//! student, plus a hint when the exercise needs another attempt.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use candle_core::{DType, Device, Tensor};
//! use exercise_validation::validators::validate_tensor_creation;
//!
//! let device = Device::Cpu;
//! let zeros = Tensor::zeros((3, 4), DType::F32, &device)?;
//! let ones = Tensor::ones((2, 5), DType::F32, &device)?;
//! let random = Tensor::randn(0.0f32, 1.0, (3, 3), &device)?;
//!
//! let outcome = validate_tensor_creation(&zeros, &ones, &random)?;
//! assert!(outcome.passed);
//! ```

// Require docs for public items, but not struct fields (too verbose)
#![warn(missing_docs)]
#![allow(rustdoc::missing_crate_level_docs)]

pub mod compare;
pub mod interop;
pub mod models;
pub mod validators;

// Re-exports for convenience
pub use models::LayerSpec;
pub use validators::ValidationOutcome;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
