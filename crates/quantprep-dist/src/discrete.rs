//! Probability mass functions of the discrete distributions.
//!
//! Each function returns the probability of a single outcome. Parameters
//! outside their domain (a probability outside `[0, 1]`, an outcome outside
//! the support) give `0.0`. Counts are unsigned, so a negative count cannot
//! be expressed in the first place.
//!
//! Binomial-type coefficients are combined with the probabilities in log
//! space, which keeps large trial counts finite.

use crate::special::{ln_choose, ln_factorial};

/// Tolerance when checking that category probabilities sum to one.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

pub(crate) fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// `P(X = k)` for `X ~ Bernoulli(p)`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::bernoulli_pmf;
/// assert_eq!(bernoulli_pmf(0.7, 1), 0.7);
/// assert!((bernoulli_pmf(0.7, 0) - 0.3).abs() < 1e-12);
/// assert_eq!(bernoulli_pmf(0.7, 2), 0.0);
/// ```
#[must_use]
pub fn bernoulli_pmf(p: f64, k: u64) -> f64 {
    if !is_probability(p) {
        return 0.0;
    }
    match k {
        0 => 1.0 - p,
        1 => p,
        _ => 0.0,
    }
}

/// `P(X = k)` for `X ~ Binomial(n, p)`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::binomial_pmf;
/// assert!((binomial_pmf(10, 0.5, 5) - 252.0 / 1024.0).abs() < 1e-12);
/// assert_eq!(binomial_pmf(10, 0.5, 11), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn binomial_pmf(n: u64, p: f64, k: u64) -> f64 {
    if !is_probability(p) || k > n {
        return 0.0;
    }
    // Degenerate cases would otherwise hit `0 * ln(0)`.
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln_pmf = ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (-p).ln_1p();
    ln_pmf.exp()
}

/// `P(X = k)` for `X ~ Poisson(lambda)`.
///
/// A rate of zero puts all the mass on `k = 0`. Negative or non-finite rates
/// give `0.0`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::poisson_pmf;
/// assert!((poisson_pmf(3.0, 2) - 4.5 * (-3.0_f64).exp()).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn poisson_pmf(lambda: f64, k: u64) -> f64 {
    if !lambda.is_finite() || lambda < 0.0 {
        return 0.0;
    }
    if lambda == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    (k as f64 * lambda.ln() - lambda - ln_factorial(k)).exp()
}

/// `P(X = k)` where `X` is the number of Bernoulli(`p`) trials up to and
/// including the first success. The support starts at `k = 1`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::geometric_pmf;
/// assert!((geometric_pmf(0.25, 3) - 0.75 * 0.75 * 0.25).abs() < 1e-12);
/// assert_eq!(geometric_pmf(0.25, 0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn geometric_pmf(p: f64, k: u64) -> f64 {
    if !is_probability(p) || k == 0 {
        return 0.0;
    }
    (1.0 - p).powf((k - 1) as f64) * p
}

/// `P(X = k)` where `X` is the number of Bernoulli(`p`) trials needed to
/// reach the `r`-th success. The support is `k >= r`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::negative_binomial_pmf;
/// // C(6, 4) * 0.5^5 * 0.5^2
/// assert!((negative_binomial_pmf(5, 0.5, 7) - 15.0 / 128.0).abs() < 1e-12);
/// assert_eq!(negative_binomial_pmf(5, 0.5, 4), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn negative_binomial_pmf(r: u64, p: f64, k: u64) -> f64 {
    if !is_probability(p) || r == 0 || k < r || p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return if k == r { 1.0 } else { 0.0 };
    }
    let ln_pmf = ln_choose(k - 1, r - 1) + r as f64 * p.ln() + (k - r) as f64 * (-p).ln_1p();
    ln_pmf.exp()
}

/// `P(X = k)` for the number of successes `k` in `draws` draws without
/// replacement from a population of `population` items containing
/// `successes` successes.
///
/// The support is `max(0, draws - (population - successes)) ..= min(draws, successes)`.
/// Inconsistent parameters (`successes > population` or `draws > population`)
/// give `0.0`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::hypergeometric_pmf;
/// // Two hearts in a five-card hand.
/// let p = hypergeometric_pmf(52, 13, 5, 2);
/// assert!((p - 78.0 * 9139.0 / 2_598_960.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn hypergeometric_pmf(population: u64, successes: u64, draws: u64, k: u64) -> f64 {
    if successes > population || draws > population {
        return 0.0;
    }
    if k > successes || k > draws || draws - k > population - successes {
        return 0.0;
    }
    let ln_pmf = ln_choose(successes, k) + ln_choose(population - successes, draws - k)
        - ln_choose(population, draws);
    ln_pmf.exp()
}

/// Probability of observing exactly `counts[i]` outcomes of each category `i`
/// in `trials` independent trials with category probabilities `probs`.
///
/// Returns `0.0` if the slices have different lengths, the counts do not sum
/// to `trials`, any probability is outside `[0, 1]`, or the probabilities do
/// not sum to one within [`PROBABILITY_SUM_TOLERANCE`].
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::multinomial_pmf;
/// // 10! / (5! 3! 2!) * 0.5^5 * 0.3^3 * 0.2^2
/// let p = multinomial_pmf(10, &[5, 3, 2], &[0.5, 0.3, 0.2]);
/// assert!((p - 0.08505).abs() < 1e-10);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn multinomial_pmf(trials: u64, counts: &[u64], probs: &[f64]) -> f64 {
    if counts.len() != probs.len() || !probs.iter().all(|&p| is_probability(p)) {
        return 0.0;
    }
    let total = counts
        .iter()
        .try_fold(0_u64, |acc, &count| acc.checked_add(count));
    if total != Some(trials) {
        return 0.0;
    }
    if (probs.iter().sum::<f64>() - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return 0.0;
    }

    let mut ln_pmf = ln_factorial(trials);
    for (&count, &p) in counts.iter().zip(probs) {
        if count == 0 {
            continue;
        }
        if p == 0.0 {
            return 0.0;
        }
        ln_pmf += count as f64 * p.ln() - ln_factorial(count);
    }
    ln_pmf.exp()
}

/// `P(X = k)` for a fair die with `outcomes` faces numbered `1..=outcomes`.
///
/// # Examples
///
/// ```
/// # use quantprep_dist::discrete::discrete_uniform_pmf;
/// assert_eq!(discrete_uniform_pmf(6, 3), 1.0 / 6.0);
/// assert_eq!(discrete_uniform_pmf(6, 0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn discrete_uniform_pmf(outcomes: u64, k: u64) -> f64 {
    if k == 0 || k > outcomes {
        return 0.0;
    }
    1.0 / outcomes as f64
}
