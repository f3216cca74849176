use super::{SmoothedMassDistribution, GRID_SIZE, M1_MAXIMUM, M1_MINIMUM, Q_MINIMUM};
use crate::dist::{linspace, PowerLaw, TruncatedGaussian};
use crate::error::Result;
use crate::params::Parameters;
use crate::real::Real;

/// Power law with a single Gaussian peak, tapered near the minimum mass.
pub struct SinglePeak {
    m1s: Vec<Real>,
    qs: Vec<Real>,
}

impl SinglePeak {
    pub fn new() -> Self {
        SinglePeak {
            m1s: linspace(M1_MINIMUM, M1_MAXIMUM, GRID_SIZE),
            qs: linspace(Q_MINIMUM, 1.0, GRID_SIZE),
        }
    }
}

impl SmoothedMassDistribution for SinglePeak {
    fn name(&self) -> &'static str {
        "SinglePeakSmoothed"
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
        let mpp = params.require(self.name(), "mpp")?;
        let sigpp = params.require(self.name(), "sigpp")?;
        let delta_m = params.require(self.name(), "delta_m")?;

        let body = PowerLaw::new(-alpha, mmin, mmax)?;
        let peak = TruncatedGaussian::new(mpp, sigpp, mmin, M1_MAXIMUM)?;
        let shape = |m: Real| (1.0 - lam) * body.prob(m) + lam * peak.prob(m);
        Ok(super::windowed_density(&self.m1s, shape, mmin, delta_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trapezoid;

    #[test]
    fn p_m1_is_normalized() {
        let model = SinglePeak::new();
        let prob = model.p_m1(&Parameters::reference()).unwrap();
        assert_eq!(prob.len(), GRID_SIZE);
        assert!(prob.iter().all(|&p| p >= 0.0 && p.is_finite()));
        assert!((trapezoid(model.m1s(), &prob) - 1.0).abs() < 1.0e-9);
    }

    #[test]
    fn p_m1_respects_cutoffs() {
        let model = SinglePeak::new();
        let prob = model.p_m1(&Parameters::reference()).unwrap();
        for (&m, &p) in model.m1s().iter().zip(prob.iter()) {
            if m <= 4.89 {
                assert_eq!(p, 0.0);
            }
        }
    }

    #[test]
    fn peak_raises_density_near_mpp() {
        let model = SinglePeak::new();
        let with_peak = Parameters::reference().with("lam", 0.3);
        let without_peak = Parameters::reference().with("lam", 0.0);
        let p1 = model.p_m1(&with_peak).unwrap();
        let p0 = model.p_m1(&without_peak).unwrap();

        // grid point closest to the peak location
        let i = model
            .m1s()
            .iter()
            .position(|&m| m >= 33.60)
            .unwrap();
        assert!(p1[i] > p0[i]);
    }

    #[test]
    fn p_q_conditional_density() {
        let model = SinglePeak::new();
        let prob = model.p_q(&Parameters::reference()).unwrap();
        assert_eq!(prob.len(), GRID_SIZE);
        assert!(prob.iter().all(|&p| p >= 0.0 && p.is_finite()));
        // at least the high-mass columns carry mass
        assert!(prob[GRID_SIZE - 1] > 0.0);
    }

    #[test]
    fn p_m1_missing_parameter() {
        let model = SinglePeak::new();
        let incomplete = Parameters::new().with("alpha", 3.37).with("mmin", 4.89);
        let err = model.p_m1(&incomplete).unwrap_err();
        assert!(format!("{}", err).contains("requires parameter"));
    }
}

// -- end of file --
