//! Special functions shared by the distribution formulas.
//!
//! The Gamma function is evaluated with the Lanczos approximation
//! (g = 7, nine coefficients), which is accurate to roughly 15 significant
//! digits for positive arguments. Combinatorial helpers work in log space so
//! that binomial coefficients of large `n` never overflow before they are
//! combined with probabilities.

use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;

#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// √(2π)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Lanczos series `A_g(x)` for `x >= 0` (the argument already shifted by one).
#[expect(clippy::cast_precision_loss)]
fn lanczos_sum(x: f64) -> f64 {
    LANCZOS_COEFFICIENTS[1..]
        .iter()
        .enumerate()
        .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, c)| {
            acc + c / (x + (i + 1) as f64)
        })
}

/// The Gamma function Γ(x).
///
/// Uses the reflection formula `Γ(x) Γ(1-x) = π / sin(πx)` for `x < 0.5`.
/// Returns `NaN` at the poles (zero and the negative integers) and for `NaN`
/// input. Large arguments overflow to `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::special::gamma;
/// assert!((gamma(5.0) - 24.0).abs() < 1e-10);
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn gamma(x: f64) -> f64 {
    if x.is_nan() || (x <= 0.0 && x.fract() == 0.0) {
        return f64::NAN;
    }
    if x < 0.5 {
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }
    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    // Split t^(x+1/2) in two so the intermediate stays finite as long as
    // the result does.
    let half_power = t.powf((x + 0.5) / 2.0);
    SQRT_2PI * half_power * (half_power * (-t).exp()) * lanczos_sum(x)
}

/// Natural logarithm of the Gamma function, `ln Γ(x)`, for `x > 0`.
///
/// Returns `NaN` for `x <= 0` or `NaN` input.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::special::ln_gamma;
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
/// assert!(ln_gamma(1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x < 0.5 {
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    SQRT_2PI.ln() + (x + 0.5) * t.ln() - t + lanczos_sum(x).ln()
}

/// The Beta function `B(a, b) = Γ(a) Γ(b) / Γ(a + b)` for positive arguments.
///
/// Returns `NaN` when either argument is not positive.
#[must_use]
pub fn beta(a: f64, b: f64) -> f64 {
    ln_beta(a, b).exp()
}

/// `ln B(a, b)` for positive arguments, `NaN` otherwise.
#[must_use]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() || a <= 0.0 || b <= 0.0 {
        return f64::NAN;
    }
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// `ln(n!)`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ln_factorial(n: u64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    ln_gamma(n as f64 + 1.0)
}

/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// Returns `f64::NEG_INFINITY` (the log of zero) when `k > n`.
#[must_use]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// The binomial coefficient `C(n, k)` as a float.
///
/// Computed with the multiplicative formula over `min(k, n - k)` factors, so
/// each partial product is itself a binomial coefficient. Coefficients beyond
/// `f64::MAX` come out as `f64::INFINITY`; use [`ln_choose`] for those.
/// Returns `0.0` when `k > n`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::special::choose;
/// assert_eq!(choose(10, 5), 252.0);
/// assert_eq!(choose(52, 5), 2_598_960.0);
/// assert_eq!(choose(3, 4), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn choose(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}
