pub mod filters;

use crate::conversion::{self, SampleSet};
use crate::dist::{linspace, Interped, PowerLaw, TruncatedGaussian};
use crate::error::{Error, Result};
use crate::models::{BrokenPowerLaw, MultiPeak, SinglePeak, SmoothedMassDistribution};
use crate::params::Parameters;
use crate::real::Real;
use log::{info, warn};
use rand::{
    distributions::{Distribution, LogNormal, Uniform},
    Rng,
};

/// The supported mass-model names.
pub const CHOICES: [&str; 9] = [
    "PowerLaw+Peak",
    "MultiPeak",
    "BrokenPowerLaw",
    "UniformSecondary",
    "DoubleGaussian",
    "LogNormal",
    "PowerLawDipBreak",
    "PowerLaw",
    "Fixed",
];

/// Grid resolution of the closed-form mixture and dip densities.
const CLOSED_FORM_GRID_SIZE: usize = 5001;

/// Parameterized source-frame mass model, selected once at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MassModel {
    PowerLawPeak,
    MultiPeak,
    BrokenPowerLaw,
    UniformSecondary,
    DoubleGaussian,
    LogNormal,
    PowerLawDipBreak,
    PowerLaw,
    Fixed,
}

/// Lowercase `name` and strip everything that is not a letter or digit.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

impl MassModel {
    /// Match a user-supplied name after case and punctuation normalization.
    ///
    /// Matching is by containment, most specific name first, so
    /// `PowerLaw+Peak` resolves before the bare `PowerLaw` and any name
    /// carrying `dip` selects the dip-filtered model.
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized = normalize(name);
        if normalized.contains("powerlawpeak") {
            Ok(MassModel::PowerLawPeak)
        } else if normalized.contains("multipeak") {
            Ok(MassModel::MultiPeak)
        } else if normalized.contains("brokenpowerlaw") {
            Ok(MassModel::BrokenPowerLaw)
        } else if normalized.contains("uniformsecondary") {
            Ok(MassModel::UniformSecondary)
        } else if normalized.contains("doublegaussian") {
            Ok(MassModel::DoubleGaussian)
        } else if normalized.contains("lognormal") || normalized.contains("loggaussian") {
            Ok(MassModel::LogNormal)
        } else if normalized.contains("dip") {
            Ok(MassModel::PowerLawDipBreak)
        } else if normalized.contains("powerlaw") {
            Ok(MassModel::PowerLaw)
        } else if normalized.contains("fixed") {
            Ok(MassModel::Fixed)
        } else {
            Err(Error::UnknownModel {
                name: name.to_owned(),
                choices: CHOICES.join(", "),
            })
        }
    }
}

/// Whether a smoothed-tier failure means "model unavailable for these
/// parameters" rather than a genuine numeric defect.
fn is_capability_failure(err: &Error) -> bool {
    matches!(
        err,
        Error::MissingParameter { .. } | Error::InvalidBounds { .. } | Error::InvalidScale { .. }
    )
}

/// Monte Carlo sampler of source-frame compact-binary masses.
///
/// Holds an immutable configuration; every call to [`Mass::sample`] draws a
/// fresh catalog through the caller's random number generator.
pub struct Mass {
    model: MassModel,
    number_of_samples: usize,
    parameters: Parameters,
}

impl Mass {
    /// `model_name` is matched against the supported models after
    /// normalization; an unrecognized name fails here, not at sampling time.
    pub fn new(model_name: &str, number_of_samples: usize, parameters: Parameters) -> Result<Self> {
        Ok(Mass {
            model: MassModel::from_name(model_name)?,
            number_of_samples,
            parameters,
        })
    }

    pub fn model(&self) -> MassModel {
        self.model
    }

    /// Draw one catalog of source-frame mass samples.
    ///
    /// The returned set maps field names (`mass_1_source`, `mass_2_source`,
    /// `mass_ratio` and the derived mass parameters) to sequences of length
    /// equal to the configured sample count.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<SampleSet> {
        let mut samples = SampleSet::new();
        match self.model {
            MassModel::PowerLawPeak => {
                self.smoothed_tier(&SinglePeak::new(), true, rng, &mut samples)?
            }
            MassModel::MultiPeak => {
                self.smoothed_tier(&MultiPeak::new(), false, rng, &mut samples)?
            }
            MassModel::BrokenPowerLaw => {
                self.smoothed_tier(&BrokenPowerLaw::new(), true, rng, &mut samples)?
            }
            MassModel::UniformSecondary => self.sample_uniform_secondary(rng, &mut samples)?,
            MassModel::DoubleGaussian => self.sample_double_gaussian(rng, &mut samples)?,
            MassModel::LogNormal => self.sample_log_normal(rng, &mut samples)?,
            MassModel::PowerLawDipBreak => self.sample_dip_break(rng, &mut samples)?,
            MassModel::PowerLaw => self.sample_power_law(rng, &mut samples)?,
            MassModel::Fixed => self.sample_fixed(&mut samples)?,
        }
        conversion::generate_mass_parameters(samples, true)
    }

    /// Smoothed grid tier, falling back to the closed-form power law when
    /// the grid model cannot be built for these parameters and the model
    /// name admits a closed-form rendition.
    fn smoothed_tier<M, R>(
        &self,
        model: &M,
        has_closed_form: bool,
        rng: &mut R,
        samples: &mut SampleSet,
    ) -> Result<()>
    where
        M: SmoothedMassDistribution,
        R: Rng,
    {
        match self.sample_smoothed(model, rng, samples) {
            Ok(()) => Ok(()),
            Err(err) if has_closed_form && is_capability_failure(&err) => {
                warn!("{} mass model unavailable: {}", model.name(), err);
                info!("generating samples with the closed-form power-law model");
                self.sample_power_law(rng, samples)
            }
            Err(err) => Err(err),
        }
    }

    /// Primary mass and mass ratio from a smoothed two-dimensional model.
    fn sample_smoothed<M, R>(&self, model: &M, rng: &mut R, samples: &mut SampleSet) -> Result<()>
    where
        M: SmoothedMassDistribution,
        R: Rng,
    {
        let prob_mass_1 = model.p_m1(&self.parameters)?;
        let prob_mass_ratio = model.p_q(&self.parameters)?;
        let primary_mass_prior = Interped::from_grid(model.m1s(), &prob_mass_1)?;
        let mass_ratio_prior = Interped::from_grid(model.qs(), &prob_mass_ratio)?;

        samples.insert(
            "mass_1_source".to_owned(),
            self.draw(&primary_mass_prior, rng),
        );
        samples.insert("mass_ratio".to_owned(), self.draw(&mass_ratio_prior, rng));
        Ok(())
    }

    /// Primary mass from the single-peak smoothed density, secondary mass
    /// uniform between the configured secondary-mass bounds.
    fn sample_uniform_secondary<R: Rng>(&self, rng: &mut R, samples: &mut SampleSet) -> Result<()> {
        let name = "UniformSecondary";
        let minimum = self.parameters.require(name, "minimum_secondary_mass")?;
        let maximum = self.parameters.require(name, "maximum_secondary_mass")?;
        if maximum <= minimum {
            return Err(Error::InvalidBounds {
                low: minimum,
                high: maximum,
            });
        }

        let model = SinglePeak::new();
        let prob_mass_1 = model.p_m1(&self.parameters)?;
        let primary_mass_prior = Interped::from_grid(model.m1s(), &prob_mass_1)?;
        let secondary_mass_prior = Uniform::new(minimum, maximum);

        samples.insert(
            "mass_1_source".to_owned(),
            self.draw(&primary_mass_prior, rng),
        );
        samples.insert(
            "mass_2_source".to_owned(),
            self.draw(&secondary_mass_prior, rng),
        );
        Ok(())
    }

    /// Both masses drawn independently from a two-component truncated
    /// Gaussian mixture weighted by `breaking_fraction`.
    fn sample_double_gaussian<R: Rng>(&self, rng: &mut R, samples: &mut SampleSet) -> Result<()> {
        let name = "DoubleGaussian";
        let mmin = self.parameters.require(name, "mmin")?;
        let mmax = self.parameters.require(name, "mmax")?;
        let mu_1 = self.parameters.require(name, "mu_1")?;
        let sigma_1 = self.parameters.require(name, "sigma_1")?;
        let mu_2 = self.parameters.require(name, "mu_2")?;
        let sigma_2 = self.parameters.require(name, "sigma_2")?;
        let fraction = self.parameters.require(name, "breaking_fraction")?;

        let mass = linspace(mmin, mmax, CLOSED_FORM_GRID_SIZE);
        let peak_1 = TruncatedGaussian::new(mu_1, sigma_1, mmin, mmax)?;
        let peak_2 = TruncatedGaussian::new(mu_2, sigma_2, mmin, mmax)?;
        let prob: Vec<Real> = mass
            .iter()
            .map(|&m| fraction * peak_1.prob(m) + (1.0 - fraction) * peak_2.prob(m))
            .collect();
        let mass_prior = Interped::from_grid(&mass, &prob)?;

        samples.insert("mass_1_source".to_owned(), self.draw(&mass_prior, rng));
        samples.insert("mass_2_source".to_owned(), self.draw(&mass_prior, rng));
        Ok(())
    }

    /// Both masses drawn independently from a log-normal density.
    fn sample_log_normal<R: Rng>(&self, rng: &mut R, samples: &mut SampleSet) -> Result<()> {
        let name = "LogNormal";
        let mu = self.parameters.require(name, "mu")?;
        let sigma = self.parameters.require(name, "sigma")?;
        if sigma <= 0.0 {
            return Err(Error::InvalidScale {
                name: "sigma".to_owned(),
                value: sigma,
            });
        }

        let mass_prior = LogNormal::new(mu as f64, sigma as f64);
        let mut draw = || {
            (0..self.number_of_samples)
                .map(|_| mass_prior.sample(rng) as Real)
                .collect::<Vec<_>>()
        };
        let mass_1 = draw();
        let mass_2 = draw();
        samples.insert("mass_1_source".to_owned(), mass_1);
        samples.insert("mass_2_source".to_owned(), mass_2);
        Ok(())
    }

    /// Both masses drawn independently from a two-slope power law sculpted
    /// by the notch and low-pass filters.
    fn sample_dip_break<R: Rng>(&self, rng: &mut R, samples: &mut SampleSet) -> Result<()> {
        let name = "PowerLawDipBreak";
        let mmin = self.parameters.require(name, "mmin")?;
        let mmax = self.parameters.require(name, "mmax")?;
        let alpha_1 = self.parameters.require(name, "alpha_1")?;
        let alpha_2 = self.parameters.require(name, "alpha_2")?;
        let a = self.parameters.require(name, "A")?;
        let gamma_low = self.parameters.require(name, "gamma_low")?;
        let eta_low = self.parameters.require(name, "eta_low")?;
        let gamma_high = self.parameters.require(name, "gamma_high")?;
        let eta_high = self.parameters.require(name, "eta_high")?;
        let sharpness = self.parameters.require(name, "n")?;

        let mass = linspace(mmin, mmax, CLOSED_FORM_GRID_SIZE);
        let below_break = PowerLaw::new(alpha_1, mmin, gamma_high)?;
        let above_break = PowerLaw::new(alpha_2, mmin, gamma_high)?;
        let prob: Vec<Real> = mass
            .iter()
            .map(|&m| {
                let body = if m <= gamma_high {
                    below_break.prob(m)
                } else {
                    above_break.prob(m)
                };
                body * filters::notch(m, a, gamma_low, eta_low, gamma_high, eta_high)
                    * filters::low_pass(m, mmax, sharpness)
            })
            .collect();
        let mass_prior = Interped::from_grid(&mass, &prob)?;

        samples.insert("mass_1_source".to_owned(), self.draw(&mass_prior, rng));
        samples.insert("mass_2_source".to_owned(), self.draw(&mass_prior, rng));
        Ok(())
    }

    /// Both masses drawn independently from a single bounded power law.
    fn sample_power_law<R: Rng>(&self, rng: &mut R, samples: &mut SampleSet) -> Result<()> {
        let name = "PowerLaw";
        let alpha = self.parameters.require(name, "alpha")?;
        let mmin = self.parameters.require(name, "mmin")?;
        let mmax = self.parameters.require(name, "mmax")?;

        let mass_prior = PowerLaw::new(alpha, mmin, mmax)?;
        samples.insert("mass_1_source".to_owned(), self.draw(&mass_prior, rng));
        samples.insert("mass_2_source".to_owned(), self.draw(&mass_prior, rng));
        Ok(())
    }

    /// Constant primary mass; secondary fixed by the mass ratio, folded to
    /// the `<= 1` convention.
    fn sample_fixed(&self, samples: &mut SampleSet) -> Result<()> {
        let name = "Fixed";
        let primary_mass = self.parameters.require(name, "primary_mass")?;
        let mass_ratio = self.parameters.require(name, "mass_ratio")?;
        let mass_ratio = if mass_ratio <= 1.0 {
            mass_ratio
        } else {
            1.0 / mass_ratio
        };

        samples.insert(
            "mass_1_source".to_owned(),
            vec![primary_mass; self.number_of_samples],
        );
        samples.insert(
            "mass_2_source".to_owned(),
            vec![primary_mass * mass_ratio; self.number_of_samples],
        );
        Ok(())
    }

    fn draw<D, R>(&self, dist: &D, rng: &mut R) -> Vec<Real>
    where
        D: Distribution<Real>,
        R: Rng,
    {
        dist.sample_iter(rng).take(self.number_of_samples).collect()
    }
}


// -- end of file --
