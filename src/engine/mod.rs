//! Exact integer computations: power, fibonacci, factorial.
//!
//! The engine is pure and stateless. All results use arbitrary-precision
//! integers (`num_bigint`), so no input within the documented domains can
//! overflow. Negative inputs are rejected with a domain error; the engine
//! never touches the operation log.

mod error;
mod ops;

pub use error::EngineError;
pub use ops::{factorial, fibonacci, power};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three operations the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Power,
    Fibonacci,
    Factorial,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Power => "power",
            Operation::Fibonacci => "fibonacci",
            Operation::Factorial => "factorial",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
