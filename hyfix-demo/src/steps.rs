//! Ready-made step functions.
//!
//! Every step maps `i64` inputs to `Result<u64, StepError>` so the driver can treat them
//! uniformly. Unchecked steps use wrapping arithmetic. Checked steps reject inputs outside
//! their domain, and inputs whose result does not fit in 64 bits, before descending; any
//! error reaches the caller through `?` at every level of the descent.
use std::str::FromStr;

use hyfix::prelude::*;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{DemoError, DemoResult, StepError};

pub type StepResult = Result<u64, StepError>;

/// Largest `n` with `n!` representable in a `u64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Largest `n` with `fib(n)` representable in a `u64`.
pub const MAX_FIBONACCI_INPUT: i64 = 93;

/// Registry of the available step functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum StepKind {
    /// `n <= 1 -> 1`, else `n * rec(n - 1)` (wrapping).
    Factorial,
    /// `n <= 2 -> 1`, else `rec(n - 1) + rec(n - 2)` (wrapping).
    Fibonacci,
    /// Factorial rejecting negative inputs and overflow.
    CheckedFactorial,
    /// Fibonacci rejecting inputs below 1 and overflow.
    CheckedFibonacci,
}

impl StepKind {
    /// Resolve a step by name, listing the known names on failure.
    pub fn parse(name: &str) -> DemoResult<Self> {
        StepKind::from_str(name).map_err(|_| DemoError::UnknownStep {
            name: name.to_string(),
            known: Self::known_names(),
        })
    }

    pub fn known_names() -> String {
        StepKind::iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Realize the recursive function for this step.
    pub fn realize(self) -> Realized<i64, StepResult> {
        match self {
            StepKind::Factorial => fix(factorial),
            StepKind::Fibonacci => fix(fibonacci),
            StepKind::CheckedFactorial => fix(checked_factorial),
            StepKind::CheckedFibonacci => fix(checked_fibonacci),
        }
    }
}

pub fn factorial(rec: Proxy<i64, StepResult>) -> impl Fn(i64) -> StepResult {
    move |n| {
        if n <= 1 {
            Ok(1)
        } else {
            Ok((n as u64).wrapping_mul(rec.call(n - 1)?))
        }
    }
}

pub fn fibonacci(rec: Proxy<i64, StepResult>) -> impl Fn(i64) -> StepResult {
    move |n| {
        if n <= 2 {
            Ok(1)
        } else {
            Ok(rec.call(n - 1)?.wrapping_add(rec.call(n - 2)?))
        }
    }
}

pub fn checked_factorial(rec: Proxy<i64, StepResult>) -> impl Fn(i64) -> StepResult {
    move |n| {
        if n < 0 {
            return Err(StepError::Domain {
                step: StepKind::CheckedFactorial,
                value: n,
            });
        }
        if n > MAX_FACTORIAL_INPUT {
            return Err(StepError::Overflow {
                step: StepKind::CheckedFactorial,
                value: n,
            });
        }
        if n <= 1 {
            return Ok(1);
        }
        rec.call(n - 1)?
            .checked_mul(n as u64)
            .ok_or(StepError::Overflow {
                step: StepKind::CheckedFactorial,
                value: n,
            })
    }
}

pub fn checked_fibonacci(rec: Proxy<i64, StepResult>) -> impl Fn(i64) -> StepResult {
    move |n| {
        if n < 1 {
            return Err(StepError::Domain {
                step: StepKind::CheckedFibonacci,
                value: n,
            });
        }
        if n > MAX_FIBONACCI_INPUT {
            return Err(StepError::Overflow {
                step: StepKind::CheckedFibonacci,
                value: n,
            });
        }
        if n <= 2 {
            return Ok(1);
        }
        let (a, b) = (rec.call(n - 1)?, rec.call(n - 2)?);
        a.checked_add(b).ok_or(StepError::Overflow {
            step: StepKind::CheckedFibonacci,
            value: n,
        })
    }
}
