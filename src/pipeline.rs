use std::{
    error::Error,
    fmt::{self, Display},
};

use log::{error, info};
use rand::Rng;

use crate::{
    generator::{self, GenerationError, SampleSet},
    lin_reg::{lin_reg, LinearRegression, RegressionError},
    outliers::{self, Outlier},
    params::Parameters,
    report, OUTLIER_COUNT,
};

/// Everything one run derives from a set of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub params: Parameters,
    pub samples: SampleSet,
    pub fit: LinearRegression,
    pub residuals: Vec<f64>,
    pub outliers: Vec<Outlier>,
}

impl Analysis {
    /// Runs generation, fit and ranking on data from `generate_seeded`.
    pub fn run(params: Parameters) -> Result<Self, PipelineError> {
        Self::logged(params, generator::generate_seeded(&params))
    }

    pub fn run_with<R: Rng>(params: Parameters, rng: &mut R) -> Result<Self, PipelineError> {
        Self::logged(params, generator::generate(&params, rng))
    }

    fn logged(
        params: Parameters,
        samples: Result<SampleSet, GenerationError>,
    ) -> Result<Self, PipelineError> {
        let result = Self::compute(params, samples);
        match &result {
            Ok(analysis) => info!(
                "{:?}: {}",
                params,
                report::equation_line(&analysis.fit)
            ),
            Err(err) => error!("analysis for {:?} failed: {}", params, err),
        }
        result
    }

    fn compute(
        params: Parameters,
        samples: Result<SampleSet, GenerationError>,
    ) -> Result<Self, PipelineError> {
        let samples = samples?;
        let fit = lin_reg(&samples.xs, &samples.ys)?;
        let residuals = outliers::residuals(&samples, &fit);
        let outliers = outliers::select(&samples, &residuals, OUTLIER_COUNT);
        Ok(Self {
            params,
            samples,
            fit,
            residuals,
            outliers,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Generation(GenerationError),
    Regression(RegressionError),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Generation(err) => write!(f, "data generation failed: {}", err),
            PipelineError::Regression(err) => write!(f, "regression failed: {}", err),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Generation(err) => Some(err),
            PipelineError::Regression(err) => Some(err),
        }
    }
}

impl From<GenerationError> for PipelineError {
    fn from(value: GenerationError) -> Self {
        Self::Generation(value)
    }
}

impl From<RegressionError> for PipelineError {
    fn from(value: RegressionError) -> Self {
        Self::Regression(value)
    }
}
