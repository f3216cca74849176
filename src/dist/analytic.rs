use crate::error::{Error, Result};
use crate::real::Real;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Bounded power-law density, `p(x) ∝ x^alpha` on `[minimum, maximum]`.
pub struct PowerLaw {
    alpha: Real,
    minimum: Real,
    maximum: Real,
    uniform: Uniform<Real>,
}

impl PowerLaw {
    pub fn new(alpha: Real, minimum: Real, maximum: Real) -> Result<Self> {
        if minimum <= 0.0 {
            return Err(Error::InvalidScale {
                name: "minimum".to_owned(),
                value: minimum,
            });
        }
        if maximum <= minimum {
            return Err(Error::InvalidBounds {
                low: minimum,
                high: maximum,
            });
        }
        Ok(PowerLaw {
            alpha,
            minimum,
            maximum,
            uniform: Uniform::new(0.0, 1.0),
        })
    }

    /// Normalized density at `val`; zero outside the support.
    pub fn prob(&self, val: Real) -> Real {
        if val < self.minimum || val > self.maximum {
            return 0.0;
        }
        if self.alpha == -1.0 {
            1.0 / (val * (self.maximum / self.minimum).ln())
        } else {
            let ap1 = self.alpha + 1.0;
            ap1 * val.powf(self.alpha) / (self.maximum.powf(ap1) - self.minimum.powf(ap1))
        }
    }
}

impl Distribution<Real> for PowerLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        let u = self.uniform.sample(rng);
        if self.alpha == -1.0 {
            self.minimum * (self.maximum / self.minimum).powf(u)
        } else {
            let ap1 = self.alpha + 1.0;
            let lo = self.minimum.powf(ap1);
            let hi = self.maximum.powf(ap1);
            (lo + u * (hi - lo)).powf(1.0 / ap1)
        }
    }
}

/// Gaussian density truncated to `[minimum, maximum]` and renormalized.
///
/// Only the density is exposed; draws from truncated Gaussians always go
/// through an interpolated grid sampler here.
pub struct TruncatedGaussian {
    minimum: Real,
    maximum: Real,
    normal: Normal,
    norm: f64,
}

impl TruncatedGaussian {
    pub fn new(mu: Real, sigma: Real, minimum: Real, maximum: Real) -> Result<Self> {
        if sigma <= 0.0 {
            return Err(Error::InvalidScale {
                name: "sigma".to_owned(),
                value: sigma,
            });
        }
        if maximum <= minimum {
            return Err(Error::InvalidBounds {
                low: minimum,
                high: maximum,
            });
        }
        let normal = Normal::new(mu as f64, sigma as f64).map_err(|_| Error::InvalidScale {
            name: "sigma".to_owned(),
            value: sigma,
        })?;
        let norm = normal.cdf(maximum as f64) - normal.cdf(minimum as f64);
        if norm <= 0.0 {
            return Err(Error::ZeroNormalization);
        }
        Ok(TruncatedGaussian {
            minimum,
            maximum,
            normal,
            norm,
        })
    }

    /// Normalized density at `val`; zero outside the truncation bounds.
    pub fn prob(&self, val: Real) -> Real {
        if val < self.minimum || val > self.maximum {
            return 0.0;
        }
        (self.normal.pdf(val as f64) / self.norm) as Real
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, StdRng};

    #[test]
    fn powerlaw_new() {
        assert!(PowerLaw::new(2.0, 5.0, 50.0).is_ok());
        assert!(PowerLaw::new(2.0, -1.0, 50.0).is_err());
        assert!(PowerLaw::new(2.0, 50.0, 5.0).is_err());
    }

    #[test]
    fn powerlaw_prob() {
        let pl = PowerLaw::new(2.0, 5.0, 50.0).unwrap();
        assert_eq!(pl.prob(1.0), 0.0);
        assert_eq!(pl.prob(100.0), 0.0);

        // p(x) = 3 x^2 / (50^3 - 5^3)
        let expected = 3.0 * 100.0 / (125_000.0 - 125.0);
        assert!((pl.prob(10.0) - expected).abs() < 1.0e-12);

        // trapezoid integral over the support is close to one
        let xs = crate::dist::linspace(5.0, 50.0, 10_001);
        let mut total = 0.0;
        for w in xs.windows(2) {
            total += 0.5 * (pl.prob(w[0]) + pl.prob(w[1])) * (w[1] - w[0]);
        }
        assert!((total - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn powerlaw_log_branch() {
        let pl = PowerLaw::new(-1.0, 5.0, 50.0).unwrap();
        let expected = 1.0 / (10.0 * (10.0 as Real).ln());
        assert!((pl.prob(10.0) - expected).abs() < 1.0e-12);
    }

    #[test]
    fn powerlaw_sample() {
        let pl = PowerLaw::new(2.0, 5.0, 50.0).unwrap();

        let seed = [0; 32];
        let mut rng = StdRng::from_seed(seed);

        let m1: Vec<_> = pl.sample_iter(&mut rng).take(5).collect();
        let m2: Vec<_> = pl.sample_iter(&mut rng).take(3).collect();
        let mut rng = StdRng::from_seed(seed);
        let mm: Vec<_> = pl.sample_iter(&mut rng).take(8).collect();
        assert_eq!(m1.len() + m2.len(), mm.len());
        assert_eq!(&m1[..], &mm[..5]);
        assert_eq!(&m2[..], &mm[5..]);

        let m: Vec<_> = pl.sample_iter(&mut rng).take(100_000).collect();
        let min = m.iter().fold(m[0], |p, q| p.min(*q));
        let max = m.iter().fold(m[0], |p, q| p.max(*q));
        assert!(min >= 5.0 && max <= 50.0);
    }

    #[test]
    fn truncated_gaussian_new() {
        assert!(TruncatedGaussian::new(30.0, 4.0, 5.0, 50.0).is_ok());
        assert!(TruncatedGaussian::new(30.0, 0.0, 5.0, 50.0).is_err());
        assert!(TruncatedGaussian::new(30.0, 4.0, 50.0, 5.0).is_err());
    }

    #[test]
    fn truncated_gaussian_prob() {
        let tn = TruncatedGaussian::new(30.0, 4.0, 5.0, 50.0).unwrap();
        assert_eq!(tn.prob(4.0), 0.0);
        assert_eq!(tn.prob(51.0), 0.0);
        assert!(tn.prob(30.0) > tn.prob(20.0));

        // bounds many sigma from the peak; matches the untruncated density
        let gauss = 1.0 / (4.0 * (2.0 * crate::real::consts::PI).sqrt());
        assert!((tn.prob(30.0) - gauss).abs() < 1.0e-6);

        let xs = crate::dist::linspace(5.0, 50.0, 10_001);
        let mut total = 0.0;
        for w in xs.windows(2) {
            total += 0.5 * (tn.prob(w[0]) + tn.prob(w[1])) * (w[1] - w[0]);
        }
        assert!((total - 1.0).abs() < 1.0e-6);
    }
}

// -- end of file --
