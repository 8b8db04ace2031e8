//! Random sample generators for the interactive demos.
//!
//! Every generator takes the random number generator explicitly so that
//! callers (and tests) can seed it. Counts are signed to match the data entry
//! forms: a count of zero or below produces an empty sample, as do parameters
//! the underlying distribution rejects and counts above [`MAX_SAMPLE_LEN`].

use rand::Rng;
use rand_distr::{Beta, Exp, LogNormal, Normal, Poisson, Uniform};

use crate::distribution::Distribution;

/// Largest number of values a single call draws.
pub const MAX_SAMPLE_LEN: usize = 1 << 24;

fn sample_len(n: i64) -> Option<usize> {
    let len = usize::try_from(n).ok().filter(|&n| n > 0)?;
    if len > MAX_SAMPLE_LEN {
        log::debug!("refusing to draw {len} values (limit {MAX_SAMPLE_LEN})");
        return None;
    }
    Some(len)
}

fn draw<R, D>(rng: &mut R, dist: Option<D>, n: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
    D: rand_distr::Distribution<f64>,
{
    match (dist, sample_len(n)) {
        (Some(dist), Some(len)) => (0..len).map(|_| dist.sample(rng)).collect(),
        _ => vec![],
    }
}

/// `n` draws from Normal(`mean`, `std_dev`).
///
/// Empty when `n <= 0`, `std_dev < 0` or a parameter is not finite.
///
/// # Examples
///
/// ```
/// use quantprep_dist::sampling::generate_normal_data;
///
/// let mut rng = rand::rng();
/// assert_eq!(generate_normal_data(&mut rng, 100.0, 15.0, 50).len(), 50);
/// assert!(generate_normal_data(&mut rng, 100.0, 15.0, 0).is_empty());
/// assert!(generate_normal_data(&mut rng, 100.0, 15.0, -1).is_empty());
/// ```
pub fn generate_normal_data<R>(rng: &mut R, mean: f64, std_dev: f64, n: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let dist = Normal::new(mean, std_dev)
        .inspect_err(|e| log::debug!("no normal data for mean={mean}, std_dev={std_dev}: {e}"))
        .ok()
        .filter(|_| mean.is_finite());
    draw(rng, dist, n)
}

/// `n` draws from LogNormal(`mu`, `sigma`), the exponential of a normal
/// variate.
///
/// Every value is positive: draws that underflow to zero (possible for a very
/// negative `mu`) are raised to `f64::MIN_POSITIVE`.
pub fn generate_log_normal_data<R>(rng: &mut R, mu: f64, sigma: f64, n: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let dist = LogNormal::new(mu, sigma)
        .inspect_err(|e| log::debug!("no log-normal data for mu={mu}, sigma={sigma}: {e}"))
        .ok()
        .filter(|_| mu.is_finite());
    draw(rng, dist, n)
        .into_iter()
        .map(|x| x.max(f64::MIN_POSITIVE))
        .collect()
}

/// `n` draws from the continuous Uniform(`min`, `max`). Empty unless `min < max`.
pub fn generate_uniform_data<R>(rng: &mut R, min: f64, max: f64, n: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let dist = Uniform::new(min, max)
        .inspect_err(|e| log::debug!("no uniform data for min={min}, max={max}: {e}"))
        .ok();
    draw(rng, dist, n)
}

/// `n` draws from Exponential(`rate`). Empty unless `rate > 0`.
pub fn generate_exponential_data<R>(rng: &mut R, rate: f64, n: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let dist = Exp::new(rate)
        .inspect_err(|e| log::debug!("no exponential data for rate={rate}: {e}"))
        .ok()
        .filter(|_| rate > 0.0);
    draw(rng, dist, n)
}

/// `n` draws from Poisson(`lambda`). Empty unless `lambda > 0`.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_poisson_data<R>(rng: &mut R, lambda: f64, n: i64) -> Vec<u64>
where
    R: Rng + ?Sized,
{
    let dist = Poisson::new(lambda)
        .inspect_err(|e| log::debug!("no poisson data for lambda={lambda}: {e}"))
        .ok();
    // Poisson variates are whole numbers carried in an f64.
    draw(rng, dist, n).into_iter().map(|k| k as u64).collect()
}

/// `n` draws from Beta(`alpha`, `beta`); every value lies in `[0, 1]`.
pub fn generate_beta_data<R>(rng: &mut R, alpha: f64, beta: f64, n: i64) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let dist = Beta::new(alpha, beta)
        .inspect_err(|e| log::debug!("no beta data for alpha={alpha}, beta={beta}: {e}"))
        .ok();
    draw(rng, dist, n)
}

/// [`generate_normal_data`] using the thread-local generator.
#[must_use]
pub fn random_normal_data(mean: f64, std_dev: f64, n: i64) -> Vec<f64> {
    generate_normal_data(&mut rand::rng(), mean, std_dev, n)
}

/// [`generate_log_normal_data`] using the thread-local generator.
#[must_use]
pub fn random_log_normal_data(mu: f64, sigma: f64, n: i64) -> Vec<f64> {
    generate_log_normal_data(&mut rand::rng(), mu, sigma, n)
}

/// Population the central limit theorem demo draws its samples from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Population {
    Normal { mean: f64, std_dev: f64 },
    Uniform { min: f64, max: f64 },
    LogNormal { mu: f64, sigma: f64 },
    Exponential { rate: f64 },
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("{name} cannot be used as a population (expected normal, uniform, log-normal or exponential)")]
pub struct UnsupportedPopulation {
    pub name: &'static str,
}

impl TryFrom<Distribution> for Population {
    type Error = UnsupportedPopulation;

    fn try_from(dist: Distribution) -> Result<Self, Self::Error> {
        match dist {
            Distribution::Normal { mean, std_dev } => Ok(Self::Normal { mean, std_dev }),
            Distribution::Uniform { min, max } => Ok(Self::Uniform { min, max }),
            Distribution::LogNormal { mu, sigma } => Ok(Self::LogNormal { mu, sigma }),
            Distribution::Exponential { rate } => Ok(Self::Exponential { rate }),
            other => Err(UnsupportedPopulation { name: other.name() }),
        }
    }
}

impl From<Population> for Distribution {
    fn from(population: Population) -> Self {
        match population {
            Population::Normal { mean, std_dev } => Self::Normal { mean, std_dev },
            Population::Uniform { min, max } => Self::Uniform { min, max },
            Population::LogNormal { mu, sigma } => Self::LogNormal { mu, sigma },
            Population::Exponential { rate } => Self::Exponential { rate },
        }
    }
}

impl Population {
    /// `n` draws from the population.
    pub fn generate<R>(&self, rng: &mut R, n: i64) -> Vec<f64>
    where
        R: Rng + ?Sized,
    {
        match *self {
            Self::Normal { mean, std_dev } => generate_normal_data(rng, mean, std_dev, n),
            Self::Uniform { min, max } => generate_uniform_data(rng, min, max, n),
            Self::LogNormal { mu, sigma } => generate_log_normal_data(rng, mu, sigma, n),
            Self::Exponential { rate } => generate_exponential_data(rng, rate, n),
        }
    }
}

/// Means of `num_samples` independent samples of `sample_size` draws each.
///
/// By the central limit theorem the result is approximately normal with the
/// population mean and standard deviation `σ / √sample_size`, whatever the
/// shape of the population. Empty when either count is not positive, the
/// total number of draws exceeds [`MAX_SAMPLE_LEN`], or the population
/// parameters are invalid.
#[expect(clippy::cast_precision_loss)]
pub fn sample_means<R>(
    rng: &mut R,
    population: &Population,
    sample_size: i64,
    num_samples: i64,
) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let (Some(size), Some(count)) = (sample_len(sample_size), sample_len(num_samples)) else {
        return vec![];
    };
    if size.checked_mul(count).is_none_or(|total| total > MAX_SAMPLE_LEN) {
        log::debug!("refusing to draw {count} samples of {size} (limit {MAX_SAMPLE_LEN})");
        return vec![];
    }
    log::debug!("drawing {count} samples of {size} from {population:?}");
    let mut means = Vec::with_capacity(count);
    for _ in 0..count {
        let sample = population.generate(rng, sample_size);
        if sample.len() != size {
            return vec![];
        }
        means.push(sample.iter().sum::<f64>() / size as f64);
    }
    means
}

#[cfg(test)]
mod tests {
    use quantprep_stats::descriptive::{mean, std_dev};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(42)
    }

    #[test]
    fn test_normal_data_cardinality() {
        let mut rng = rng();
        assert_eq!(generate_normal_data(&mut rng, 100.0, 15.0, 50).len(), 50);
        assert!(generate_normal_data(&mut rng, 100.0, 15.0, 0).is_empty());
        assert!(generate_normal_data(&mut rng, 100.0, 15.0, -1).is_empty());
        assert!(generate_normal_data(&mut rng, 100.0, -1.0, 10).is_empty());
        assert!(generate_normal_data(&mut rng, f64::NAN, 1.0, 10).is_empty());
    }

    #[test]
    fn test_normal_data_matches_parameters() {
        let data = generate_normal_data(&mut rng(), 100.0, 15.0, 20_000);
        assert!((mean(&data) - 100.0).abs() < 0.5);
        assert!((std_dev(&data) - 15.0).abs() < 0.5);
    }

    #[test]
    fn test_zero_std_dev_gives_constant_sample() {
        let data = generate_normal_data(&mut rng(), 3.0, 0.0, 5);
        assert_eq!(data, vec![3.0; 5]);
    }

    #[test]
    fn test_log_normal_data_is_positive() {
        let data = generate_log_normal_data(&mut rng(), 0.0, 1.0, 1000);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| x > 0.0));
        assert!(generate_log_normal_data(&mut rng(), 0.0, 1.0, -5).is_empty());

        // exp(-800) underflows to zero.
        let tiny = generate_log_normal_data(&mut rng(), -800.0, 1.0, 200);
        assert_eq!(tiny.len(), 200);
        assert!(tiny.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn test_huge_counts_give_empty_samples() {
        let mut rng = rng();
        assert!(generate_normal_data(&mut rng, 0.0, 1.0, i64::MAX).is_empty());
        assert!(generate_uniform_data(&mut rng, 0.0, 1.0, i64::MAX - 1).is_empty());
        assert!(generate_poisson_data(&mut rng, 2.0, i64::MAX).is_empty());
        let too_many = i64::try_from(MAX_SAMPLE_LEN).unwrap() + 1;
        assert!(generate_beta_data(&mut rng, 2.0, 2.0, too_many).is_empty());

        let population = Population::Exponential { rate: 1.0 };
        assert!(sample_means(&mut rng, &population, i64::MAX, i64::MAX).is_empty());
        assert!(sample_means(&mut rng, &population, 1 << 13, 1 << 13).is_empty());
        assert_eq!(sample_means(&mut rng, &population, 2, 3).len(), 3);
    }

    #[test]
    fn test_other_generators_stay_in_support() {
        let mut rng = rng();
        let uniform = generate_uniform_data(&mut rng, 2.0, 3.0, 500);
        assert!(uniform.iter().all(|x| (2.0..=3.0).contains(x)));
        assert!(generate_uniform_data(&mut rng, 3.0, 2.0, 10).is_empty());

        let exponential = generate_exponential_data(&mut rng, 2.0, 500);
        assert!(exponential.iter().all(|&x| x >= 0.0));
        assert!(generate_exponential_data(&mut rng, 0.0, 10).is_empty());

        let poisson = generate_poisson_data(&mut rng, 4.0, 2000);
        assert_eq!(poisson.len(), 2000);
        #[expect(clippy::cast_precision_loss)]
        let poisson_mean = poisson.iter().sum::<u64>() as f64 / 2000.0;
        assert!((poisson_mean - 4.0).abs() < 0.2);
        assert!(generate_poisson_data(&mut rng, -1.0, 10).is_empty());

        let beta = generate_beta_data(&mut rng, 2.0, 5.0, 500);
        assert!(beta.iter().all(|x| (0.0..=1.0).contains(x)));
        assert!(generate_beta_data(&mut rng, 0.0, 5.0, 10).is_empty());
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let a = generate_normal_data(&mut rng(), 0.0, 1.0, 10);
        let b = generate_normal_data(&mut rng(), 0.0, 1.0, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_wrappers() {
        assert_eq!(random_normal_data(0.0, 1.0, 7).len(), 7);
        assert!(random_log_normal_data(0.0, 1.0, 7).iter().all(|&x| x > 0.0));
    }

    #[test]
    fn test_sample_means_follow_central_limit_theorem() {
        let population = Population::Exponential { rate: 1.0 };
        let means = sample_means(&mut rng(), &population, 50, 4000);
        assert_eq!(means.len(), 4000);
        // Exponential(1) has mean 1 and std dev 1.
        assert!((mean(&means) - 1.0).abs() < 0.02);
        assert!((std_dev(&means) - 1.0 / 50.0_f64.sqrt()).abs() < 0.01);
    }

    #[test]
    fn test_sample_means_degenerate_input() {
        let population = Population::Normal {
            mean: 0.0,
            std_dev: 1.0,
        };
        assert!(sample_means(&mut rng(), &population, 0, 10).is_empty());
        assert!(sample_means(&mut rng(), &population, 10, -1).is_empty());
        let invalid = Population::Uniform { min: 1.0, max: 0.0 };
        assert!(sample_means(&mut rng(), &invalid, 10, 10).is_empty());
    }

    #[test]
    fn test_population_conversion() {
        let dist = Distribution::Uniform { min: 0.0, max: 1.0 };
        let population = Population::try_from(dist).unwrap();
        assert_eq!(Distribution::from(population), dist);
        let err = Population::try_from(Distribution::Poisson { lambda: 1.0 }).unwrap_err();
        assert_eq!(err.name, "poisson");
    }
}
