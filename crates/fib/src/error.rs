//! Evaluator error types.

/// Error type for Fibonacci evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    /// The index was negative; the sequence is only defined from 0.
    InvalidArgument(i32),
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::InvalidArgument(n) => {
                write!(f, "fib: index must be non-negative, got {}", n)
            }
        }
    }
}

impl std::error::Error for FibError {}
