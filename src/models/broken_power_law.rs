use super::{SmoothedMassDistribution, GRID_SIZE, M1_MAXIMUM, M1_MINIMUM, Q_MINIMUM};
use crate::dist::linspace;
use crate::error::{Error, Result};
use crate::params::Parameters;
use crate::real::Real;

/// Two-slope power law with a break, tapered near the minimum mass.
///
/// The break sits at `mmin + break_fraction * (mmax - mmin)`; the density is
/// continuous across it.
pub struct BrokenPowerLaw {
    m1s: Vec<Real>,
    qs: Vec<Real>,
}

impl BrokenPowerLaw {
    pub fn new() -> Self {
        BrokenPowerLaw {
            m1s: linspace(M1_MINIMUM, M1_MAXIMUM, GRID_SIZE),
            qs: linspace(Q_MINIMUM, 1.0, GRID_SIZE),
        }
    }
}

impl SmoothedMassDistribution for BrokenPowerLaw {
    fn name(&self) -> &'static str {
        "BrokenPowerLawSmoothed"
    }

    fn m1s(&self) -> &[Real] {
        &self.m1s
    }

    fn qs(&self) -> &[Real] {
        &self.qs
    }

    fn p_m1(&self, params: &Parameters) -> Result<Vec<Real>> {
        let alpha_1 = params.require(self.name(), "alpha_1")?;
        let alpha_2 = params.require(self.name(), "alpha_2")?;
        let mmin = params.require(self.name(), "mmin")?;
        let mmax = params.require(self.name(), "mmax")?;
        let break_fraction = params.require(self.name(), "break_fraction")?;
        let delta_m = params.require(self.name(), "delta_m")?;

        if mmax <= mmin {
            return Err(Error::InvalidBounds {
                low: mmin,
                high: mmax,
            });
        }
        let m_break = mmin + break_fraction * (mmax - mmin);
        // continuity factor for the upper branch
        let correction = m_break.powf(alpha_2 - alpha_1);
        let shape = |m: Real| {
            if m < mmin || m > mmax {
                0.0
            } else if m < m_break {
                m.powf(-alpha_1)
            } else {
                correction * m.powf(-alpha_2)
            }
        };
        Ok(super::windowed_density(&self.m1s, shape, mmin, delta_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trapezoid;

    fn broken_parameters() -> Parameters {
        Parameters::new()
            .with("alpha_1", 1.6)
            .with("alpha_2", 5.6)
            .with("beta", 1.1)
            .with("mmin", 4.0)
            .with("mmax", 87.0)
            .with("break_fraction", 0.43)
            .with("delta_m", 4.8)
    }

    #[test]
    fn p_m1_is_normalized() {
        let model = BrokenPowerLaw::new();
        let prob = model.p_m1(&broken_parameters()).unwrap();
        assert_eq!(prob.len(), GRID_SIZE);
        assert!(prob.iter().all(|&p| p >= 0.0 && p.is_finite()));
        assert!((trapezoid(model.m1s(), &prob) - 1.0).abs() < 1.0e-9);
    }

    #[test]
    fn steeper_slope_past_the_break() {
        let model = BrokenPowerLaw::new();
        let prob = model.p_m1(&broken_parameters()).unwrap();

        // m_break = 4 + 0.43 * 83 = 39.69
        let at = |mass: Real| model.m1s().iter().position(|&m| m >= mass).unwrap();
        let below = (prob[at(20.0)] / prob[at(30.0)]).ln() / (30.0 as Real / 20.0).ln();
        let above = (prob[at(50.0)] / prob[at(70.0)]).ln() / (70.0 as Real / 50.0).ln();
        assert!((below - 1.6).abs() < 0.1);
        assert!((above - 5.6).abs() < 0.1);
    }

    #[test]
    fn p_m1_missing_slopes() {
        // reference set lacks the broken-power-law keys entirely
        let model = BrokenPowerLaw::new();
        let err = model.p_m1(&Parameters::reference()).unwrap_err();
        assert!(format!("{}", err).contains("alpha_1"));
    }
}

// -- end of file --
