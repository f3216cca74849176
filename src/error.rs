use crate::real::Real;

/// Convenience alias for fallible sampling operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a mass-model name matches none of the supported models.
    #[error("mass model `{name}` is not implemented; please choose from: {choices}")]
    UnknownModel {
        /// The offending model name, as supplied by the caller.
        name: String,
        /// The enumerated list of valid model names.
        choices: String,
    },

    /// Returned when a model needs a parameter that the parameter set lacks.
    #[error("mass model `{model}` requires parameter `{key}`")]
    MissingParameter {
        /// The model that needed the parameter.
        model: String,
        /// The missing parameter key.
        key: String,
    },

    /// Returned when a distribution is constructed with a reversed or empty support.
    #[error("invalid bounds: minimum ({low}) must be less than maximum ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: Real,
        /// The upper bound value.
        high: Real,
    },

    /// Returned when a scale-like parameter is not strictly positive.
    #[error("invalid `{name}`: {value} must be positive")]
    InvalidScale {
        /// The name of the offending parameter.
        name: String,
        /// The value it was given.
        value: Real,
    },

    /// Returned when an interpolated sampler is handed fewer than two grid points.
    #[error("interpolated sampling requires at least two grid points")]
    EmptyGrid,

    /// Returned when a density grid carries no probability mass.
    #[error("density grid integrates to zero; nothing to sample")]
    ZeroNormalization,

    /// Returned when a sample set lacks a field needed to derive mass parameters.
    #[error("sample set lacks `{key}`; cannot derive mass parameters")]
    MissingField {
        /// The missing field name.
        key: String,
    },
}

// -- end of file --
