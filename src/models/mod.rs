pub mod broken_power_law;
pub mod multi_peak;
pub mod single_peak;

pub use self::broken_power_law::BrokenPowerLaw;
pub use self::multi_peak::MultiPeak;
pub use self::single_peak::SinglePeak;

use crate::error::Result;
use crate::params::Parameters;
use crate::real::Real;
use itertools::Itertools;
use rayon::prelude::*;

/// Native grid resolution of the smoothed models.
pub const GRID_SIZE: usize = 1000;

pub(crate) const M1_MINIMUM: Real = 2.0;
pub(crate) const M1_MAXIMUM: Real = 100.0;
pub(crate) const Q_MINIMUM: Real = 0.001;

/// Smooth turn-on window between `mmin` and `mmin + delta_m`.
///
/// Zero at and below `mmin`, one at and above `mmin + delta_m`, with a
/// sigmoid-like rise in between that kills the hard edge of the power law.
pub fn smoothing(mass: Real, mmin: Real, delta_m: Real) -> Real {
    if mass <= mmin {
        0.0
    } else if mass >= mmin + delta_m {
        1.0
    } else {
        let shifted = mass - mmin;
        1.0 / ((delta_m / shifted + delta_m / (shifted - delta_m)).exp() + 1.0)
    }
}

/// Trapezoid integral of `ys` tabulated on `xs`.
pub(crate) fn trapezoid(xs: &[Real], ys: &[Real]) -> Real {
    xs.iter()
        .zip(ys.iter())
        .tuple_windows()
        .map(|((x0, y0), (x1, y1))| 0.5 * (y0 + y1) * (x1 - x0))
        .sum()
}

/// Tabulate `shape`, taper it with the smoothing window and normalize on `grid`.
pub(crate) fn windowed_density<F>(grid: &[Real], shape: F, mmin: Real, delta_m: Real) -> Vec<Real>
where
    F: Fn(Real) -> Real,
{
    let mut ys: Vec<Real> = grid
        .iter()
        .map(|&m| shape(m) * smoothing(m, mmin, delta_m))
        .collect();
    let norm = trapezoid(grid, &ys);
    if norm > 0.0 {
        for y in ys.iter_mut() {
            *y /= norm;
        }
    }
    ys
}

/// A smoothed two-dimensional (primary mass, mass ratio) population model.
///
/// Implementors supply the primary-mass density; the conditional mass-ratio
/// density is shared by every model in this family.
pub trait SmoothedMassDistribution: Sync {
    /// Name used in missing-parameter errors.
    fn name(&self) -> &'static str;

    /// Primary-mass grid.
    fn m1s(&self) -> &[Real];

    /// Mass-ratio grid.
    fn qs(&self) -> &[Real];

    /// Window-tapered, grid-normalized primary-mass density.
    fn p_m1(&self, params: &Parameters) -> Result<Vec<Real>>;

    /// Mass-ratio density `q^beta`, tapered so that the implied secondary
    /// mass respects the same low-mass window as the primary.
    ///
    /// The density is evaluated with the ratio grid paired elementwise to the
    /// primary-mass grid, and each point is normalized over the full ratio
    /// grid conditional on its paired primary mass. This per-mass
    /// normalization is the quadratic-cost part of the model and runs in
    /// parallel.
    fn p_q(&self, params: &Parameters) -> Result<Vec<Real>> {
        let beta = params.require(self.name(), "beta")?;
        let mmin = params.require(self.name(), "mmin")?;
        let delta_m = params.require(self.name(), "delta_m")?;

        let qs = self.qs();
        let prob = self
            .m1s()
            .par_iter()
            .zip(qs.par_iter())
            .map(|(&m1, &q)| {
                let shape = |q: Real| q.powf(beta) * smoothing(q * m1, mmin, delta_m);
                let mut norm = 0.0;
                let mut prev = shape(qs[0]);
                for w in qs.windows(2) {
                    let next = shape(w[1]);
                    norm += 0.5 * (prev + next) * (w[1] - w[0]);
                    prev = next;
                }
                if norm > 0.0 {
                    shape(q) / norm
                } else {
                    0.0
                }
            })
            .collect();
        Ok(prob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_edges() {
        assert_eq!(smoothing(4.0, 5.0, 3.0), 0.0);
        assert_eq!(smoothing(5.0, 5.0, 3.0), 0.0);
        assert_eq!(smoothing(8.0, 5.0, 3.0), 1.0);
        assert_eq!(smoothing(80.0, 5.0, 3.0), 1.0);

        let inside = smoothing(6.5, 5.0, 3.0);
        assert!(inside > 0.0 && inside < 1.0);
        assert!(smoothing(6.0, 5.0, 3.0) < smoothing(7.0, 5.0, 3.0));
    }

    #[test]
    fn smoothing_without_taper() {
        // zero width keeps the bare lower cutoff
        assert_eq!(smoothing(5.0, 5.0, 0.0), 0.0);
        assert_eq!(smoothing(5.1, 5.0, 0.0), 1.0);
    }

    #[test]
    fn trapezoid_linear() {
        let xs = crate::dist::linspace(0.0, 1.0, 11);
        let ys: Vec<_> = xs.iter().map(|&x| x).collect();
        assert!((trapezoid(&xs, &ys) - 0.5).abs() < 1.0e-12);
    }
}

// -- end of file --
