//! The standard normal distribution and its quantile function.
//!
//! These are the functions behind every z-score in the application: the
//! confidence-interval calculator asks [`inverse_standard_normal_cdf`] for the
//! critical value and multiplies it by the standard error.

/// 1/√(2π)
#[allow(clippy::unreadable_literal)]
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal PDF φ(z) = e^(−z²/2) / √(2π).
///
/// # Examples
///
/// ```
/// # use quantprep_dist::normal::standard_normal_pdf;
/// assert!((standard_normal_pdf(0.0) - 0.3989).abs() < 1e-4);
/// assert!((standard_normal_pdf(1.0) - 0.242).abs() < 1e-3);
/// ```
#[must_use]
pub fn standard_normal_pdf(z: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF Φ(z) = P(Z ≤ z).
///
/// Abramowitz and Stegun formula 26.2.17, evaluated on `|z|` and reflected
/// for negative arguments. The absolute error is below 7.5 × 10⁻⁸.
/// `±∞` map to `1` and `0`; `NaN` propagates.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::normal::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
/// assert!((standard_normal_cdf(-1.96) - 0.025).abs() < 1e-3);
/// ```
#[allow(clippy::unreadable_literal)]
#[must_use]
pub fn standard_normal_cdf(z: f64) -> f64 {
    const P: f64 = 0.2316419;
    const B: [f64; 5] = [
        0.319381530,
        -0.356563782,
        1.781477937,
        -1.821255978,
        1.330274429,
    ];

    if z.is_nan() {
        return f64::NAN;
    }
    if z.is_infinite() {
        return if z > 0.0 { 1.0 } else { 0.0 };
    }

    let t = 1.0 / (1.0 + P * z.abs());
    let poly = t * B.iter().rev().fold(0.0, |acc, b| acc * t + b);
    let tail = standard_normal_pdf(z) * poly;
    if z > 0.0 { 1.0 - tail } else { tail }
}

/// Inverse of the standard normal CDF (the quantile function).
///
/// Returns the `z` with `Φ(z) = p` for `p` strictly inside `(0, 1)`, using
/// Acklam's rational approximation (relative error below 1.15 × 10⁻⁹).
/// The central region is an odd function of `p − 0.5`, so the result at
/// `0.5` is exactly zero.
///
/// Any `p` outside the open interval, including exactly `0` and `1`, gives
/// `NaN` rather than an infinity.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::normal::inverse_standard_normal_cdf;
/// assert_eq!(inverse_standard_normal_cdf(0.5), 0.0);
/// assert!((inverse_standard_normal_cdf(0.975) - 1.96).abs() < 1e-3);
/// assert!((inverse_standard_normal_cdf(0.995) - 2.576).abs() < 1e-3);
/// assert!(inverse_standard_normal_cdf(1.0).is_nan());
/// ```
#[allow(clippy::unreadable_literal)]
#[must_use]
pub fn inverse_standard_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return f64::NAN;
    }

    let tail = |q: f64| {
        let num = C.iter().fold(0.0, |acc, c| acc * q + c);
        let den = D.iter().fold(0.0, |acc, d| acc * q + d) * q + 1.0;
        num / den
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > P_HIGH {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        let num = A.iter().fold(0.0, |acc, a| acc * r + a);
        let den = B.iter().fold(0.0, |acc, b| acc * r + b) * r + 1.0;
        num * q / den
    }
}

/// Density of Normal(`mean`, `std_dev`) at `x`.
///
/// Returns `0.0` when `std_dev <= 0`.
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev.is_nan() || std_dev <= 0.0 {
        return 0.0;
    }
    standard_normal_pdf((x - mean) / std_dev) / std_dev
}

/// CDF of Normal(`mean`, `std_dev`) at `x`.
///
/// Returns `0.0` when `std_dev <= 0`.
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev.is_nan() || std_dev <= 0.0 {
        return 0.0;
    }
    standard_normal_cdf((x - mean) / std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_normal_pdf() {
        assert!((standard_normal_pdf(0.0) - 0.398_942_280_4).abs() < 1e-10);
        assert!((standard_normal_pdf(1.0) - 0.242).abs() < 1e-3);
        assert!((standard_normal_pdf(-1.0) - 0.242).abs() < 1e-3);
        assert_eq!(standard_normal_pdf(1.5), standard_normal_pdf(-1.5));
    }

    #[test]
    fn test_standard_normal_cdf_reference_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-4);
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((standard_normal_cdf(-1.96) - 0.025).abs() < 1e-3);
        assert!((standard_normal_cdf(1.0) - 0.841_344_746).abs() < 1e-7);
        assert!((standard_normal_cdf(-2.5) - 0.006_209_665).abs() < 1e-7);
    }

    #[test]
    fn test_standard_normal_cdf_limits() {
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
        assert!(standard_normal_cdf(40.0) <= 1.0);
        assert!(standard_normal_cdf(-40.0) >= 0.0);
    }

    #[test]
    fn test_inverse_cdf_known_values() {
        assert_eq!(inverse_standard_normal_cdf(0.5), 0.0);
        assert!((inverse_standard_normal_cdf(0.975) - 1.96).abs() < 5e-3);
        assert!((inverse_standard_normal_cdf(0.025) + 1.96).abs() < 5e-3);
        assert!((inverse_standard_normal_cdf(0.995) - 2.576).abs() < 5e-4);
        assert!((inverse_standard_normal_cdf(0.95) - 1.644_853_627).abs() < 1e-8);
        assert!((inverse_standard_normal_cdf(0.001) + 3.090_232_306).abs() < 1e-8);
    }

    #[test]
    fn test_inverse_cdf_outside_open_interval_is_nan() {
        for p in [0.0, 1.0, -0.1, 1.1, f64::NAN, f64::INFINITY] {
            assert!(inverse_standard_normal_cdf(p).is_nan(), "p = {p}");
        }
    }

    #[test]
    fn test_inverse_cdf_is_monotonic_and_symmetric() {
        let mut previous = f64::NEG_INFINITY;
        for i in 1..1000 {
            let p = f64::from(i) / 1000.0;
            let z = inverse_standard_normal_cdf(p);
            assert!(z > previous, "not increasing at p = {p}");
            previous = z;
            let mirrored = inverse_standard_normal_cdf(1.0 - p);
            assert!((z + mirrored).abs() < 1e-9, "asymmetric at p = {p}");
        }
    }

    #[test]
    fn test_inverse_cdf_round_trips_through_cdf() {
        for p in [0.01, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
            let z = inverse_standard_normal_cdf(p);
            assert!((standard_normal_cdf(z) - p).abs() < 1e-6, "p = {p}");
        }
    }

    #[test]
    fn test_normal_pdf_and_cdf() {
        assert!((normal_pdf(100.0, 100.0, 15.0) - 0.398_942_28 / 15.0).abs() < 1e-8);
        assert_eq!(normal_pdf(0.0, 0.0, 0.0), 0.0);
        assert_eq!(normal_pdf(0.0, 0.0, -1.0), 0.0);
        assert!((normal_cdf(115.0, 100.0, 15.0) - 0.841_344_746).abs() < 1e-7);
        assert_eq!(normal_cdf(1.0, 0.0, 0.0), 0.0);
    }
}
