use super::{SmoothedMassDistribution, GRID_SIZE, M1_MAXIMUM, M1_MINIMUM, Q_MINIMUM};
use crate::dist::{linspace, PowerLaw, TruncatedGaussian};
use crate::error::Result;
use crate::params::Parameters;
use crate::real::Real;

/// Power law with two Gaussian peaks, tapered near the minimum mass.
///
/// `lam` is the total fraction of mass in the peaks and `lam_1` the share of
/// that fraction carried by the lower peak.
pub struct MultiPeak {
    m1s: Vec<Real>,
    qs: Vec<Real>,
}

impl MultiPeak {
    pub fn new() -> Self {
        MultiPeak {
            m1s: linspace(M1_MINIMUM, M1_MAXIMUM, GRID_SIZE),
            qs: linspace(Q_MINIMUM, 1.0, GRID_SIZE),
        }
    }
}

impl SmoothedMassDistribution for MultiPeak {
    fn name(&self) -> &'static str {
        "MultiPeakSmoothed"
    }

    fn m1s(&self) -> &[Real] {
        &self.m1s
    }

    fn qs(&self) -> &[Real] {
        &self.qs
    }

    fn p_m1(&self, params: &Parameters) -> Result<Vec<Real>> {
        let alpha = params.require(self.name(), "alpha")?;
        let mmin = params.require(self.name(), "mmin")?;
        let mmax = params.require(self.name(), "mmax")?;
        let lam = params.require(self.name(), "lam")?;
        let lam_1 = params.require(self.name(), "lam_1")?;
        let mpp_1 = params.require(self.name(), "mpp_1")?;
        let sigpp_1 = params.require(self.name(), "sigpp_1")?;
        let mpp_2 = params.require(self.name(), "mpp_2")?;
        let sigpp_2 = params.require(self.name(), "sigpp_2")?;
        let delta_m = params.require(self.name(), "delta_m")?;

        let body = PowerLaw::new(-alpha, mmin, mmax)?;
        let peak_1 = TruncatedGaussian::new(mpp_1, sigpp_1, mmin, M1_MAXIMUM)?;
        let peak_2 = TruncatedGaussian::new(mpp_2, sigpp_2, mmin, M1_MAXIMUM)?;
        let shape = |m: Real| {
            (1.0 - lam) * body.prob(m)
                + lam * lam_1 * peak_1.prob(m)
                + lam * (1.0 - lam_1) * peak_2.prob(m)
        };
        Ok(super::windowed_density(&self.m1s, shape, mmin, delta_m))
    }
}


// -- end of file --
