//! Benchmark parameter types.

use std::fmt;

use rand::{SeedableRng, rngs::SmallRng};
use randgraph_core::{Binomial, BinomialBuilder};

use crate::error::BenchSetupError;

/// Seed used for every generator built by the benchmarks.
pub const SEED: u64 = 42;

/// Parameters for one binomial generator benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorBenchParams {
    /// Number of vertices.
    pub vertices: i64,
    /// Trials per tail vertex.
    pub trials: i64,
    /// Success probability of each trial.
    pub probability: f64,
    /// Whether repeated heads are kept.
    pub multiedges: bool,
}

impl GeneratorBenchParams {
    /// Builds a generator seeded with [`SEED`].
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generator`] when the parameters are invalid.
    pub fn build(&self) -> Result<Binomial<SmallRng>, BenchSetupError> {
        let generator = BinomialBuilder::new(self.vertices, self.trials, self.probability)
            .with_multiedges(self.multiedges)
            .build_with_rng(SmallRng::seed_from_u64(SEED))?;
        Ok(generator)
    }
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V={},N={},p={}",
            self.vertices, self.trials, self.probability
        )?;
        if self.multiedges {
            f.write_str(",multi")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, "V=10,N=2,p=0.5")]
    #[case(true, "V=10,N=2,p=0.5,multi")]
    fn display_names_the_parameters(#[case] multiedges: bool, #[case] expected: &str) {
        let params = GeneratorBenchParams {
            vertices: 10,
            trials: 2,
            probability: 0.5,
            multiedges,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[test]
    fn build_rejects_invalid_parameters() {
        let params = GeneratorBenchParams {
            vertices: -1,
            trials: 2,
            probability: 0.5,
            multiedges: false,
        };
        assert!(matches!(params.build(), Err(BenchSetupError::Generator(_))));
    }
}
