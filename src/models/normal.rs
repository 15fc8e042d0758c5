//! Standard normal distribution

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use statrs::function::erf::erfc;

/// Standard normal CDF, Φ(x) = ½·erfc(-x/√2)
///
/// Keeps full relative precision in the lower tail.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-10);
        assert!((norm_cdf(-1.0) - 0.158_655_253_931_457).abs() < 1e-10);
        assert!((norm_cdf(3.0) - 0.998_650_101_968_370).abs() < 1e-10);
        assert!(norm_cdf(-10.0) > 0.0 && norm_cdf(-10.0) < 1e-22);
        assert!((norm_cdf(10.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_table() {
        let table = [
            (-10.0, 7.619_853_024_160_527e-24),
            (-5.0, 2.866_515_718_791_939e-7),
            (-3.0, 1.349_898_031_630_094_6e-3),
            (-2.0, 2.275_013_194_817_920_7e-2),
            (-0.5, 0.308_537_538_725_986_9),
            (0.5, 0.691_462_461_274_013_1),
            (2.0, 0.977_249_868_051_820_8),
            (5.0, 0.999_999_713_348_428_1),
            (10.0, 1.0),
        ];
        for (x, expected) in table {
            let err = (norm_cdf(x) - expected).abs();
            assert!(err < 1e-9, "norm_cdf({}) off by {:e}", x, err);
        }
    }

    #[test]
    fn test_norm_cdf_symmetry_and_monotonicity() {
        let mut prev = 0.0;
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            let c = norm_cdf(x);
            assert!((c + norm_cdf(-x) - 1.0).abs() < 1e-15);
            assert!(c >= prev);
            assert!((0.0..=1.0).contains(&c));
            prev = c;
        }
    }

    #[test]
    fn test_norm_pdf() {
        assert!((norm_pdf(0.0) - 0.398_942_280_401_433).abs() < 1e-14);
        assert!((norm_pdf(1.5) - norm_pdf(-1.5)).abs() < 1e-16);
        for i in 1..100 {
            assert!(norm_pdf(i as f64 * 0.1) < norm_pdf(0.0));
        }
    }
}
