use num_bigint::{BigInt, BigUint};

use super::error::EngineError;

/// Raise `base` to the power of `exponent`, exactly.
///
/// Negative exponents are a domain error since only integer results are in
/// scope. Exponents beyond `u32::MAX` are rejected rather than attempted;
/// even a base of 2 at that exponent would need half a gigabyte of digits.
pub fn power(base: i64, exponent: i64) -> Result<BigInt, EngineError> {
    if exponent < 0 {
        return Err(EngineError::NegativeExponent(exponent));
    }
    let exponent =
        u32::try_from(exponent).map_err(|_| EngineError::ExponentOutOfRange(exponent))?;
    Ok(BigInt::from(base).pow(exponent))
}

/// Compute the `n`-th Fibonacci number, with `fibonacci(0) = 0` and
/// `fibonacci(1) = 1`.
///
/// Uses the fast-doubling identities, so the cost is O(log n) big-integer
/// multiplications; n = 10,000 is effectively instant.
pub fn fibonacci(n: i64) -> Result<BigInt, EngineError> {
    if n < 0 {
        return Err(EngineError::NegativeArgument(n));
    }
    Ok(BigInt::from(fib_doubling(n as u64)))
}

/// Fast doubling: given (F(k), F(k+1)), steps to (F(2k), F(2k+1)) via
///   F(2k)   = F(k) * (2*F(k+1) - F(k))
///   F(2k+1) = F(k)^2 + F(k+1)^2
/// walking the bits of `n` from the most significant down.
fn fib_doubling(n: u64) -> BigUint {
    let mut a = BigUint::from(0u8); // F(0)
    let mut b = BigUint::from(1u8); // F(1)

    for i in (0..u64::BITS - n.leading_zeros()).rev() {
        let c = &a * ((&b << 1u32) - &a);
        let d = &a * &a + &b * &b;
        if (n >> i) & 1 == 0 {
            a = c;
            b = d;
        } else {
            b = &c + &d;
            a = d;
        }
    }

    a
}

/// Compute `n!`, with `factorial(0) = 1`.
///
/// Plain iterative product over an arbitrary-precision accumulator; values
/// grow super-exponentially, so fixed-width arithmetic is not an option.
pub fn factorial(n: i64) -> Result<BigInt, EngineError> {
    if n < 0 {
        return Err(EngineError::NegativeArgument(n));
    }
    let mut acc = BigUint::from(1u8);
    for factor in 2..=(n as u64) {
        acc *= factor;
    }
    Ok(BigInt::from(acc))
}
