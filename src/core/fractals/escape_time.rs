use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_cap::IterationCap;

/// Squared escape radius; `|z| > 2` without the square root.
pub const BAILOUT_SQUARED: f64 = 4.0;

/// Iterates `z <- z^2 + c` from `z0` and reports the first `n` with `|z_n|^2 > 4`.
///
/// Mandelbrot passes `z0 = 0` and the pixel as `c`; Julia passes the pixel as
/// `z0` and its fixed constant as `c`. Non-finite iterates count as escaped.
#[must_use]
pub fn evaluate(z0: Complex, c: Complex, cap: IterationCap) -> EscapeResult {
    let mut z = z0;

    for iteration in 0..cap.get() {
        let magnitude_squared = z.magnitude_squared();

        if magnitude_squared > BAILOUT_SQUARED || !magnitude_squared.is_finite() {
            return EscapeResult::Escaped(iteration);
        }

        z = z.square() + c;
    }

    EscapeResult::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(max_iterations: u32) -> IterationCap {
        IterationCap::new(max_iterations).unwrap()
    }

    #[test]
    fn test_origin_is_bounded_for_any_cap() {
        for max_iterations in [1, 2, 3, 50, 1000] {
            assert_eq!(
                evaluate(Complex::ZERO, Complex::ZERO, cap(max_iterations)),
                EscapeResult::Bounded
            );
        }
    }

    #[test]
    fn test_two_escapes_quickly() {
        for max_iterations in [3, 10, 500] {
            let result = evaluate(Complex::ZERO, Complex::new(2.0, 0.0), cap(max_iterations));

            // z1 = 2 sits on the bailout circle, z2 = 6 is outside it
            assert_eq!(result, EscapeResult::Escaped(2));
        }
    }

    #[test]
    fn test_start_outside_bailout_escapes_at_zero() {
        let result = evaluate(Complex::new(3.0, 0.0), Complex::ZERO, cap(10));

        assert_eq!(result, EscapeResult::Escaped(0));
    }

    #[test]
    fn test_escape_index_is_below_cap() {
        // c = 0.3 escapes slowly; a small cap must report Bounded instead of n >= cap
        let slow = Complex::new(0.3, 0.0);

        assert_eq!(evaluate(Complex::ZERO, slow, cap(5)), EscapeResult::Bounded);
        match evaluate(Complex::ZERO, slow, cap(1000)) {
            EscapeResult::Escaped(n) => assert!(n > 5 && n < 1000),
            EscapeResult::Bounded => panic!("c = 0.3 lies outside the Mandelbrot set"),
        }
    }

    #[test]
    fn test_main_cardioid_point_is_bounded() {
        let result = evaluate(Complex::ZERO, Complex::new(-0.5, 0.25), cap(500));

        assert!(result.is_bounded());
    }

    #[test]
    fn test_julia_with_zero_constant_is_the_unit_disc() {
        let inside = evaluate(Complex::new(0.5, 0.5), Complex::ZERO, cap(100));
        let outside = evaluate(Complex::new(1.1, 0.0), Complex::ZERO, cap(100));

        assert_eq!(inside, EscapeResult::Bounded);
        assert!(matches!(outside, EscapeResult::Escaped(_)));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let z0 = Complex::new(-0.1, 0.65);
        let c = Complex::new(-0.4, 0.6);

        let first = evaluate(z0, c, cap(256));
        for _ in 0..10 {
            assert_eq!(evaluate(z0, c, cap(256)), first);
        }
    }

    #[test]
    fn test_non_finite_start_escapes_immediately() {
        assert_eq!(
            evaluate(Complex::new(f64::NAN, 0.0), Complex::ZERO, cap(10)),
            EscapeResult::Escaped(0)
        );
        assert_eq!(
            evaluate(Complex::new(0.0, f64::INFINITY), Complex::ZERO, cap(10)),
            EscapeResult::Escaped(0)
        );
    }

    #[test]
    fn test_non_finite_constant_escapes_after_first_step() {
        let result = evaluate(Complex::ZERO, Complex::new(f64::NAN, 0.0), cap(10));

        assert_eq!(result, EscapeResult::Escaped(1));
    }
}
