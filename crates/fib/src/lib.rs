//! Naive recursive Fibonacci
//!
//! Evaluates F(0) = 0, F(1) = 1, F(n) = F(n - 2) + F(n - 1) by direct double
//! recursion. Nothing is cached, so the call count grows like ~1.618^n while
//! stack depth stays linear in n.
//!
//! # Overflow Behavior
//!
//! Results are `i32` and the recurrence uses **wrapping semantics**: F(47) and
//! above wrap silently instead of panicking, identically in debug and release.

pub mod error;

pub use error::FibError;

/// Index evaluated by the `fib` binary
pub const N: i32 = 42;

/// Compute F(n)
///
/// Returns [`FibError::InvalidArgument`] for negative `n`.
pub fn fib(n: i32) -> Result<i32, FibError> {
    if n < 0 {
        return Err(FibError::InvalidArgument(n));
    }
    Ok(fib_unchecked(n))
}

/// Recursive kernel; callers guarantee `n >= 0`.
pub(crate) fn fib_unchecked(n: i32) -> i32 {
    match n {
        0 => 0,
        1 => 1,
        _ => fib_unchecked(n - 2).wrapping_add(fib_unchecked(n - 1)),
    }
}

/// Format the output line for index `n` (no trailing newline)
pub fn render(n: i32, value: i32) -> String {
    format!("fib({}) is {}", n, value)
}
