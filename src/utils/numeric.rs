//! Small numeric building blocks shared by the density and likelihood code.

/// Iterative factorial, `k! = ∏_{i=2}^{k} i`, with `0! = 1`.
///
/// Exact in `f64` for `k <= 22` and accurate to double precision up to
/// `k = 170`; beyond that the product overflows to `+inf`. Sample counts
/// in the intended teaching ranges stay far below that ceiling.
pub fn factorial(k: u64) -> f64 {
    (2..=k).fold(1.0, |acc, i| acc * i as f64)
}

/// `ln(k!)` via the iterative factorial.
///
/// Inherits the `k = 170` overflow ceiling of [`factorial`]; counts past
/// it return `+inf`.
pub fn ln_factorial(k: u64) -> f64 {
    factorial(k).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(2), 2.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
    }

    #[test]
    fn test_ln_factorial() {
        assert_eq!(ln_factorial(0), 0.0);
        assert_eq!(ln_factorial(1), 0.0);
        assert_relative_eq!(ln_factorial(5), 120.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_factorial_overflow_ceiling() {
        assert!(factorial(170).is_finite());
        assert!(factorial(171).is_infinite());
    }
}
