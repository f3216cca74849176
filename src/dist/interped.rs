use crate::error::{Error, Result};
use crate::real::Real;
use itertools::Itertools;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Inverse-CDF sampler over a tabulated density.
///
/// The cumulative distribution is accumulated with the trapezoid rule over
/// the grid and inverted by linear interpolation, so draws interpolate
/// between grid points instead of snapping to them.
pub struct Interped {
    xs: Vec<Real>,
    cdf: Vec<Real>,
    uniform: Uniform<Real>,
}

impl Interped {
    /// Build a sampler from an increasing grid and a density tabulated on it.
    ///
    /// The density need not be normalized; negative and non-finite entries
    /// are clipped to zero.
    pub fn from_grid(xs: &[Real], density: &[Real]) -> Result<Self> {
        assert_eq!(
            xs.len(),
            density.len(),
            "Interped::from_grid called with mismatched grid and density"
        );
        if xs.len() < 2 {
            return Err(Error::EmptyGrid);
        }

        let ys: Vec<Real> = density
            .iter()
            .map(|&y| if y.is_finite() && y > 0.0 { y } else { 0.0 })
            .collect();

        let mut cdf = Vec::with_capacity(xs.len());
        cdf.push(0.0);
        let mut acc = 0.0;
        for ((x0, y0), (x1, y1)) in xs.iter().zip(ys.iter()).tuple_windows() {
            acc += 0.5 * (y0 + y1) * (x1 - x0);
            cdf.push(acc);
        }
        if acc <= 0.0 {
            return Err(Error::ZeroNormalization);
        }
        for c in cdf.iter_mut() {
            *c /= acc;
        }

        Ok(Interped {
            xs: xs.to_vec(),
            cdf,
            uniform: Uniform::new(0.0, 1.0),
        })
    }

    pub fn minimum(&self) -> Real {
        self.xs[0]
    }

    pub fn maximum(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    /// Invert the tabulated CDF at probability `u`.
    fn quantile(&self, u: Real) -> Real {
        let i = self.cdf.partition_point(|&c| c < u);
        if i == 0 {
            return self.xs[0];
        }
        if i >= self.xs.len() {
            return self.xs[self.xs.len() - 1];
        }
        let (c0, c1) = (self.cdf[i - 1], self.cdf[i]);
        let (x0, x1) = (self.xs[i - 1], self.xs[i]);
        if c1 > c0 {
            x0 + (u - c0) * (x1 - x0) / (c1 - c0)
        } else {
            x0
        }
    }
}

impl Distribution<Real> for Interped {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        let u = self.uniform.sample(rng);
        self.quantile(u)
    }
}


// -- end of file --
