//! Numeric helpers for the functions that only accept integers.

use crate::error::Error;

/// Returns an error if `value` has a fractional part (or is not finite).
pub fn require_integer(func: &'static str, value: f64) -> Result<(), Error> {
    if value.fract() == 0.0 {
        Ok(())
    } else {
        Err(Error::NonIntegerArgument { func, value })
    }
}

/// The largest magnitude below which every integer is exactly representable as an `f64`.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Converts an integer-valued argument to an `i64`, for use as a loop index. Fails if the value has
/// a fractional part, or if it is too large for consecutive integers to be distinct as `f64`.
pub fn to_index(func: &'static str, value: f64) -> Result<i64, Error> {
    require_integer(func, value)?;
    if value.abs() > MAX_EXACT_INTEGER {
        return Err(Error::Domain {
            func,
            reason: format!("`{}` is too large to iterate over", value),
        });
    }
    Ok(value as i64)
}

/// Computes a partial factorial of an integer from `n` to `k`, where `k` is exclusive (i.e. `n * (n
/// - 1) * ... * (k + 1)`).
///
/// Stops early once the product overflows to infinity.
pub fn partial_factorial(mut n: f64, k: f64) -> f64 {
    let mut result: f64 = 1.0;
    while n > k && result.is_finite() {
        result *= n;
        n -= 1.0;
    }
    result
}

/// The factorial function, defined for non-negative integers.
pub fn factorial(n: f64) -> Result<f64, Error> {
    require_integer("factorial", n)?;
    if n < 0.0 {
        return Err(Error::Domain {
            func: "factorial",
            reason: format!("`{}` is negative", n),
        });
    }
    Ok(partial_factorial(n, 1.0))
}

/// Combinations function. Returns the number of ways to choose `r` items from `n` items, where the
/// order of the items does not matter.
///
/// Returns zero if `r > n`.
pub fn binom(n: f64, r: f64) -> Result<f64, Error> {
    require_integer("binom", n)?;
    require_integer("binom", r)?;
    if n < 0.0 || r < 0.0 {
        return Err(Error::Domain {
            func: "binom",
            reason: format!("`binom({}, {})` has a negative argument", n, r),
        });
    }

    if r > n {
        return Ok(0.0);
    }

    let sub = n - r;
    if r > sub {
        Ok(partial_factorial(n, r) / partial_factorial(sub, 1.0))
    } else {
        Ok(partial_factorial(n, sub) / partial_factorial(r, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(10.0), Ok(3628800.0));
    }

    #[test]
    fn factorial_overflow() {
        assert_eq!(factorial(1e9), Ok(f64::INFINITY));
    }

    #[test]
    fn factorial_rejects_fraction() {
        assert_eq!(factorial(3.5), Err(Error::NonIntegerArgument { func: "factorial", value: 3.5 }));
        assert!(matches!(factorial(f64::NAN), Err(Error::NonIntegerArgument { .. })));
    }

    #[test]
    fn factorial_rejects_negative() {
        assert!(matches!(factorial(-2.0), Err(Error::Domain { func: "factorial", .. })));
    }

    #[test]
    fn binom_values() {
        assert_eq!(binom(5.0, 2.0), Ok(10.0));
        assert_eq!(binom(5.0, 3.0), Ok(10.0));
        assert_eq!(binom(10.0, 0.0), Ok(1.0));
        assert_eq!(binom(10.0, 10.0), Ok(1.0));
        assert_eq!(binom(3.0, 7.0), Ok(0.0));
    }

    #[test]
    fn binom_rejects_bad_arguments() {
        assert!(matches!(binom(4.5, 2.0), Err(Error::NonIntegerArgument { func: "binom", .. })));
        assert!(matches!(binom(4.0, -1.0), Err(Error::Domain { func: "binom", .. })));
    }
}
