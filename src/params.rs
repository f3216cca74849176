use crate::error::{Error, Result};
use crate::real::Real;
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named set of mass-model hyper-parameters.
///
/// Which keys are required depends on the chosen model; a model asks for its
/// keys at evaluation time through [`Parameters::require`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Parameters(BTreeMap<String, Real>);

/// The default set is the reference power-law-plus-peak population.
impl Default for Parameters {
    fn default() -> Self {
        Self::reference()
    }
}

impl Parameters {
    /// An empty parameter set.
    pub fn new() -> Self {
        Parameters(BTreeMap::new())
    }

    /// Reference hyper-parameters of the power-law-plus-peak population
    /// inferred from the GWTC catalogs.
    pub fn reference() -> Self {
        Parameters::new()
            .with("alpha", 3.37)
            .with("beta", 0.76)
            .with("delta_m", 5.23)
            .with("mmin", 4.89)
            .with("mmax", 88.81)
            .with("lam", 0.04)
            .with("mpp", 33.60)
            .with("sigpp", 4.59)
    }

    pub fn with(mut self, key: &str, value: Real) -> Self {
        self.0.insert(key.to_owned(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Real> {
        self.0.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Look up `key`, failing with a named error if `model` lacks it.
    pub fn require(&self, model: &str, key: &str) -> Result<Real> {
        self.get(key).ok_or_else(|| Error::MissingParameter {
            model: model.to_owned(),
            key: key.to_owned(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}


// -- end of file --
