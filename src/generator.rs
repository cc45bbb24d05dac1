use std::{
    error::Error,
    fmt::{self, Display},
};

use itertools::{Itertools, MinMaxResult};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{uniform::Error as UniformError, Distribution, Normal, NormalError, Uniform};

use crate::{params::Parameters, SEED, X_RANGE};

/// Generated points, `xs[i]` and `ys[i]` form one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Smallest and largest x, `None` for an empty set.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        match self.xs.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(x) => Some((x, x)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }
}

/// Draws `count` xs from `X_RANGE`, then `count` noise values, and builds the ys from both.
pub fn generate<R: Rng>(params: &Parameters, rng: &mut R) -> Result<SampleSet, GenerationError> {
    params.validate()?;

    let x_dist = Uniform::new(X_RANGE.0, X_RANGE.1)?;
    let noise_dist = Normal::new(0.0, params.noise_std_dev())?;

    let xs = x_dist.sample_iter(&mut *rng).take(params.count).collect_vec();
    let noise = noise_dist.sample_iter(&mut *rng).take(params.count);

    let ys = xs
        .iter()
        .zip(noise)
        .map(|(x, noise)| params.slope * x + params.intercept + noise)
        .collect_vec();

    Ok(SampleSet { xs, ys })
}

/// `generate` with a fresh generator seeded from `SEED`.
pub fn generate_seeded(params: &Parameters) -> Result<SampleSet, GenerationError> {
    let mut rng = StdRng::seed_from_u64(SEED);
    generate(params, &mut rng)
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    EmptySampleCount,
    InvalidVariance(f64),
    NonFiniteCoefficient,
    Distribution(String),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::EmptySampleCount => f.write_str("the sample count has to be positive"),
            GenerationError::InvalidVariance(var) => {
                write!(f, "the noise variance has to be finite and non-negative, got {}", var)
            }
            GenerationError::NonFiniteCoefficient => {
                f.write_str("slope and intercept have to be finite")
            }
            GenerationError::Distribution(msg) => {
                write!(f, "could not build distribution: {}", msg)
            }
        }
    }
}

impl Error for GenerationError {}

impl From<NormalError> for GenerationError {
    fn from(value: NormalError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<UniformError> for GenerationError {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}
