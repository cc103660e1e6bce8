//! Exercise graders
//!
//! One validator per tutorial exercise. Each inspects a candidate value and
//! returns a [`ValidationOutcome`]: a pass/fail flag, a message for the
//! student, and an optional hint shown when the attempt failed.
//!
//! Grading failures are outcomes, not errors; `Err` is reserved for cases
//! where the candidate data itself cannot be read (e.g. tensor extraction
//! fails), which callers treat as fatal.

mod architecture;
mod tensors;

pub use architecture::{
    check_layer_sequence, validate_conv_block, validate_mlp_architecture, validate_transfer_setup,
};
pub use tensors::{validate_numpy_interop, validate_tensor_creation};

/// Result of grading a single exercise
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Whether the exercise passed
    pub passed: bool,
    /// Message for the student
    pub message: String,
    /// Extra guidance, present on failure
    pub hint: Option<String>,
}

impl ValidationOutcome {
    /// Create a passing outcome
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            hint: None,
        }
    }

    /// Create a failing outcome with a hint
    pub fn fail(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Short label for report output
    pub fn result_label(&self) -> &'static str {
        if self.passed {
            "✓ PASS"
        } else {
            "✗ FAIL"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_pass() {
        let outcome = ValidationOutcome::pass("looks good");
        assert!(outcome.passed);
        assert!(outcome.hint.is_none());
        assert_eq!(outcome.result_label(), "✓ PASS");
    }

    #[test]
    fn test_outcome_fail() {
        let outcome = ValidationOutcome::fail("wrong shape", "try Tensor::zeros");
        assert!(!outcome.passed);
        assert_eq!(outcome.hint.as_deref(), Some("try Tensor::zeros"));
        assert_eq!(outcome.result_label(), "✗ FAIL");
    }
}
