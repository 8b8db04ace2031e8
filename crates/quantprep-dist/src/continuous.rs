//! Probability density functions of the continuous distributions.
//!
//! Parameters outside their domain give a density of `0.0`. Where a density
//! diverges (for example the Beta density at `x = 0` when `alpha < 1`) the
//! function returns `f64::INFINITY`; capping such values for display is left
//! to the caller (see [`crate::series::clamp_series`]).

use std::f64::consts::PI;

use crate::{
    normal,
    special::{ln_beta, ln_gamma},
};

fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

/// Density of Exponential(`rate`) at `x`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::continuous::exponential_pdf;
/// assert_eq!(exponential_pdf(0.0, 2.0), 2.0);
/// assert_eq!(exponential_pdf(-1.0, 2.0), 0.0);
/// ```
#[must_use]
pub fn exponential_pdf(x: f64, rate: f64) -> f64 {
    if x < 0.0 || !is_positive(rate) {
        return 0.0;
    }
    rate * (-rate * x).exp()
}

/// Density of Logistic(`location`, `scale`) at `x`.
#[must_use]
pub fn logistic_pdf(x: f64, location: f64, scale: f64) -> f64 {
    if !is_positive(scale) {
        return 0.0;
    }
    // e^(-|z|) keeps both tails free of overflow.
    let e = (-((x - location) / scale).abs()).exp();
    e / (scale * (1.0 + e).powi(2))
}

/// Density of Laplace(`location`, `scale`) at `x`.
#[must_use]
pub fn laplace_pdf(x: f64, location: f64, scale: f64) -> f64 {
    if !is_positive(scale) {
        return 0.0;
    }
    (-(x - location).abs() / scale).exp() / (2.0 * scale)
}

/// Density of Cauchy(`location`, `scale`) at `x`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::continuous::cauchy_pdf;
/// assert!((cauchy_pdf(0.0, 0.0, 1.0) - 1.0 / std::f64::consts::PI).abs() < 1e-15);
/// ```
#[must_use]
pub fn cauchy_pdf(x: f64, location: f64, scale: f64) -> f64 {
    if !is_positive(scale) {
        return 0.0;
    }
    let z = (x - location) / scale;
    1.0 / (PI * scale * (1.0 + z * z))
}

/// Density of the continuous Uniform(`min`, `max`) at `x`.
#[must_use]
pub fn uniform_pdf(x: f64, min: f64, max: f64) -> f64 {
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return 0.0;
    }
    if (min..=max).contains(&x) {
        1.0 / (max - min)
    } else {
        0.0
    }
}

/// Density of LogNormal(`mu`, `sigma`) at `x`, where `mu` and `sigma` are the
/// parameters of the underlying normal distribution.
#[must_use]
pub fn log_normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    if x <= 0.0 || !is_positive(sigma) {
        return 0.0;
    }
    normal::normal_pdf(x.ln(), mu, sigma) / x
}

/// Density of Gamma(`shape`, `rate`) at `x`.
///
/// At `x = 0` the density is infinite for `shape < 1` and equals `rate` for
/// `shape == 1`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::continuous::gamma_pdf;
/// // Gamma(1, rate) is Exponential(rate).
/// assert!((gamma_pdf(0.5, 1.0, 2.0) - 2.0 * (-1.0_f64).exp()).abs() < 1e-12);
/// assert_eq!(gamma_pdf(0.0, 0.5, 1.0), f64::INFINITY);
/// ```
#[must_use]
pub fn gamma_pdf(x: f64, shape: f64, rate: f64) -> f64 {
    if x < 0.0 || x.is_infinite() || !is_positive(shape) || !is_positive(rate) {
        return 0.0;
    }
    if x == 0.0 {
        return if shape < 1.0 {
            f64::INFINITY
        } else if shape == 1.0 {
            rate
        } else {
            0.0
        };
    }
    (shape * rate.ln() - ln_gamma(shape) + (shape - 1.0) * x.ln() - rate * x).exp()
}

/// Shapes above which Beta(`alpha`, `beta`) is evaluated through its normal
/// approximation; `ln B` loses all precision to cancellation past this point.
const BETA_NORMAL_SHAPE: f64 = 1e10;

/// Density of Beta(`alpha`, `beta`) at `x`.
///
/// When both shapes exceed `1e10` the density is taken from the normal
/// distribution with the same mean and variance.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::continuous::beta_pdf;
/// // Beta(2, 5) at 0.2: 30 * 0.2 * 0.8^4
/// assert!((beta_pdf(0.2, 2.0, 5.0) - 2.4576).abs() < 1e-10);
/// assert_eq!(beta_pdf(1.5, 2.0, 5.0), 0.0);
/// ```
#[must_use]
pub fn beta_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) || !is_positive(alpha) || !is_positive(beta) {
        return 0.0;
    }
    if (x == 0.0 && alpha < 1.0) || (x == 1.0 && beta < 1.0) {
        return f64::INFINITY;
    }
    if alpha.min(beta) > BETA_NORMAL_SHAPE {
        // Written to avoid forming alpha + beta, which may overflow.
        let ratio = beta / alpha;
        let mean = 1.0 / (1.0 + ratio);
        let std_dev = (mean * (1.0 - mean)).sqrt() / (alpha.sqrt() * (1.0 + ratio).sqrt());
        return normal::normal_pdf(x, mean, std_dev);
    }
    let ln_b = ln_beta(alpha, beta);
    if !ln_b.is_finite() {
        // One shape is huge and the other is not: all mass sits within
        // rounding distance of an endpoint.
        return 0.0;
    }
    if x == 0.0 {
        return if alpha == 1.0 { (-ln_b).exp() } else { 0.0 };
    }
    if x == 1.0 {
        return if beta == 1.0 { (-ln_b).exp() } else { 0.0 };
    }
    ((alpha - 1.0) * x.ln() + (beta - 1.0) * (-x).ln_1p() - ln_b).exp()
}

/// Density of the chi-squared distribution with `df` degrees of freedom.
///
/// This is Gamma(`df / 2`, `1 / 2`).
#[must_use]
pub fn chi_squared_pdf(x: f64, df: f64) -> f64 {
    if !is_positive(df) {
        return 0.0;
    }
    gamma_pdf(x, df / 2.0, 0.5)
}

/// Density of Student's t distribution with `df` degrees of freedom.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::continuous::students_t_pdf;
/// // With one degree of freedom the t distribution is standard Cauchy.
/// assert!((students_t_pdf(0.0, 1.0) - 1.0 / std::f64::consts::PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn students_t_pdf(t: f64, df: f64) -> f64 {
    if !is_positive(df) {
        return 0.0;
    }
    let ln_norm = ln_gamma((df + 1.0) / 2.0) - ln_gamma(df / 2.0) - 0.5 * (df * PI).ln();
    (ln_norm - (df + 1.0) / 2.0 * (t * t / df).ln_1p()).exp()
}

/// Density of the F distribution with `d1` and `d2` degrees of freedom.
///
/// At `x = 0` the density is infinite for `d1 < 2` and equals one for
/// `d1 == 2`.
#[must_use]
pub fn f_pdf(x: f64, d1: f64, d2: f64) -> f64 {
    if x < 0.0 || x.is_infinite() || !is_positive(d1) || !is_positive(d2) {
        return 0.0;
    }
    if x == 0.0 {
        return if d1 < 2.0 {
            f64::INFINITY
        } else if d1 == 2.0 {
            1.0
        } else {
            0.0
        };
    }
    let ln_pdf = (d1 / 2.0) * (d1 / d2).ln() + (d1 / 2.0 - 1.0) * x.ln()
        - ((d1 + d2) / 2.0) * (d1 * x / d2).ln_1p()
        - ln_beta(d1 / 2.0, d2 / 2.0);
    ln_pdf.exp()
}

/// Density of Weibull(`shape`, `scale`) at `x`.
///
/// At `x = 0` the density is infinite for `shape < 1` and equals `1 / scale`
/// for `shape == 1`.
#[must_use]
pub fn weibull_pdf(x: f64, shape: f64, scale: f64) -> f64 {
    if x < 0.0 || x.is_infinite() || !is_positive(shape) || !is_positive(scale) {
        return 0.0;
    }
    if x == 0.0 {
        return if shape < 1.0 {
            f64::INFINITY
        } else if shape == 1.0 {
            1.0 / scale
        } else {
            0.0
        };
    }
    let z = x / scale;
    (shape / scale) * z.powf(shape - 1.0) * (-z.powf(shape)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trapezoidal integral over `[a, b]`.
    #[expect(clippy::cast_precision_loss)]
    fn integrate(pdf: impl Fn(f64) -> f64, a: f64, b: f64, steps: usize) -> f64 {
        let h = (b - a) / steps as f64;
        let inner = (1..steps).map(|i| pdf(a + i as f64 * h)).sum::<f64>();
        h * (inner + (pdf(a) + pdf(b)) / 2.0)
    }

    #[test]
    fn test_invalid_parameters_give_zero() {
        assert_eq!(exponential_pdf(1.0, 0.0), 0.0);
        assert_eq!(logistic_pdf(0.0, 0.0, -1.0), 0.0);
        assert_eq!(laplace_pdf(0.0, 0.0, 0.0), 0.0);
        assert_eq!(cauchy_pdf(0.0, 0.0, f64::NAN), 0.0);
        assert_eq!(uniform_pdf(0.5, 1.0, 1.0), 0.0);
        assert_eq!(log_normal_pdf(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(gamma_pdf(1.0, 0.0, 1.0), 0.0);
        assert_eq!(beta_pdf(0.5, -1.0, 1.0), 0.0);
        assert_eq!(chi_squared_pdf(1.0, 0.0), 0.0);
        assert_eq!(students_t_pdf(0.0, -3.0), 0.0);
        assert_eq!(f_pdf(1.0, 5.0, 0.0), 0.0);
        assert_eq!(weibull_pdf(1.0, 2.0, 0.0), 0.0);
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let cases: Vec<(Box<dyn Fn(f64) -> f64>, f64, f64)> = vec![
            (Box::new(|x| exponential_pdf(x, 1.5)), 0.0, 40.0),
            (Box::new(|x| logistic_pdf(x, 1.0, 2.0)), -80.0, 80.0),
            (Box::new(|x| laplace_pdf(x, -1.0, 0.5)), -30.0, 30.0),
            (Box::new(|x| log_normal_pdf(x, 0.0, 0.5)), 0.0, 30.0),
            (Box::new(|x| gamma_pdf(x, 3.0, 2.0)), 0.0, 40.0),
            (Box::new(|x| beta_pdf(x, 2.0, 5.0)), 0.0, 1.0),
            (Box::new(|x| chi_squared_pdf(x, 5.0)), 0.0, 80.0),
            (Box::new(|x| students_t_pdf(x, 30.0)), -60.0, 60.0),
            (Box::new(|x| f_pdf(x, 5.0, 10.0)), 0.0, 400.0),
            (Box::new(|x| weibull_pdf(x, 2.0, 1.0)), 0.0, 10.0),
        ];
        for (i, (pdf, a, b)) in cases.iter().enumerate() {
            let area = integrate(pdf, *a, *b, 200_000);
            assert!((area - 1.0).abs() < 1e-3, "case {i}: area {area}");
        }
    }

    #[test]
    fn test_singular_boundaries_are_infinite() {
        assert_eq!(beta_pdf(0.0, 0.5, 2.0), f64::INFINITY);
        assert_eq!(beta_pdf(1.0, 2.0, 0.5), f64::INFINITY);
        assert_eq!(chi_squared_pdf(0.0, 1.0), f64::INFINITY);
        assert_eq!(f_pdf(0.0, 1.0, 10.0), f64::INFINITY);
        assert_eq!(weibull_pdf(0.0, 0.5, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_finite_boundaries() {
        // Beta(1, b) at 0 is b; Beta(2, 5) vanishes at both ends.
        assert!((beta_pdf(0.0, 1.0, 3.0) - 3.0).abs() < 1e-12);
        assert_eq!(beta_pdf(0.0, 2.0, 5.0), 0.0);
        assert_eq!(beta_pdf(1.0, 2.0, 5.0), 0.0);
        assert_eq!(f_pdf(0.0, 2.0, 7.0), 1.0);
        assert_eq!(f_pdf(0.0, 5.0, 7.0), 0.0);
        assert_eq!(weibull_pdf(0.0, 1.0, 4.0), 0.25);
        assert!((chi_squared_pdf(0.0, 2.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_special_cases_agree() {
        // Chi-squared with 2 df is Exponential(1/2).
        for x in [0.3, 1.0, 4.5] {
            assert!((chi_squared_pdf(x, 2.0) - exponential_pdf(x, 0.5)).abs() < 1e-12);
        }
        // Weibull with shape 1 is exponential.
        for x in [0.3, 1.0, 4.5] {
            assert!((weibull_pdf(x, 1.0, 2.0) - exponential_pdf(x, 0.5)).abs() < 1e-12);
        }
        // t with one degree of freedom is standard Cauchy.
        for x in [-3.0, 0.5, 2.0] {
            assert!((students_t_pdf(x, 1.0) - cauchy_pdf(x, 0.0, 1.0)).abs() < 1e-12);
        }
        // t approaches the standard normal as df grows.
        assert!((students_t_pdf(0.0, 1e6) - normal::standard_normal_pdf(0.0)).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_densities() {
        for d in [0.5, 1.0, 3.0] {
            let diff = logistic_pdf(2.0 + d, 2.0, 1.5) - logistic_pdf(2.0 - d, 2.0, 1.5);
            assert!(diff.abs() < 1e-15);
            assert_eq!(laplace_pdf(d, 0.0, 1.0), laplace_pdf(-d, 0.0, 1.0));
            assert_eq!(students_t_pdf(d, 5.0), students_t_pdf(-d, 5.0));
        }
    }

    #[test]
    fn test_logistic_far_tails_do_not_overflow() {
        assert!(logistic_pdf(1e6, 0.0, 1.0) >= 0.0);
        assert!(logistic_pdf(-1e6, 0.0, 1.0) >= 0.0);
        assert!((logistic_pdf(0.0, 0.0, 1.0) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_densities_vanish_at_infinity() {
        let inf = f64::INFINITY;
        let densities = [
            exponential_pdf(inf, 1.0),
            logistic_pdf(inf, 0.0, 1.0),
            laplace_pdf(inf, 0.0, 1.0),
            cauchy_pdf(inf, 0.0, 1.0),
            uniform_pdf(inf, 0.0, 1.0),
            log_normal_pdf(inf, 0.0, 1.0),
            gamma_pdf(inf, 2.0, 1.0),
            gamma_pdf(inf, 0.5, 1.0),
            beta_pdf(inf, 2.0, 2.0),
            chi_squared_pdf(inf, 4.0),
            students_t_pdf(inf, 5.0),
            f_pdf(inf, 5.0, 10.0),
            weibull_pdf(inf, 2.0, 1.0),
            weibull_pdf(inf, 0.5, 1.0),
        ];
        for (i, density) in densities.into_iter().enumerate() {
            assert_eq!(density, 0.0, "case {i}");
        }
        assert_eq!(logistic_pdf(-inf, 0.0, 1.0), 0.0);
        assert_eq!(cauchy_pdf(-inf, 0.0, 1.0), 0.0);
        assert_eq!(students_t_pdf(-inf, 5.0), 0.0);
    }

    #[test]
    fn test_beta_with_huge_shapes_stays_finite() {
        let peak = beta_pdf(0.5, 1e308, 1e308);
        assert!(peak.is_finite() && peak > 1e100, "peak {peak}");
        assert_eq!(beta_pdf(0.4, 1e308, 1e308), 0.0);
        assert_eq!(beta_pdf(0.0, 1e308, 1e308), 0.0);
        assert_eq!(beta_pdf(0.5, 1e308, 2.0), 0.0);
        // Boundary values whose normalizing constant overflows on its own.
        assert_eq!(beta_pdf(0.0, 400.0, 400.0), 0.0);
        assert_eq!(beta_pdf(1.0, 3.0, 400.0), 0.0);
        assert!((beta_pdf(1.0, 4.0, 1.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_beta_normal_approximation_is_continuous() {
        // Just below and above the switch the densities agree closely.
        let exact = beta_pdf(0.5, 0.99e10, 0.99e10);
        let approx = beta_pdf(0.5, 1.01e10, 1.01e10) * (0.99_f64 / 1.01).sqrt();
        assert!(((exact - approx) / exact).abs() < 1e-2, "{exact} vs {approx}");
    }

    #[test]
    fn test_uniform() {
        assert_eq!(uniform_pdf(0.5, 0.0, 2.0), 0.5);
        assert_eq!(uniform_pdf(2.0, 0.0, 2.0), 0.5);
        assert_eq!(uniform_pdf(2.1, 0.0, 2.0), 0.0);
    }
}
