extern crate itertools;
extern crate log;
extern crate rand;
extern crate rayon;
extern crate statrs;

pub mod conversion;
pub mod dist;
pub mod error;
pub mod models;
pub mod params;
pub mod pop;

pub use crate::error::{Error, Result};

pub mod real {
    #[cfg(any(feature = "f32", not(feature = "f64")))]
    pub use std::f32::*;
    #[cfg(any(feature = "f32", not(feature = "f64")))]
    pub type Real = f32;

    #[cfg(all(feature = "f64", not(feature = "f32")))]
    pub use std::f64::*;
    #[cfg(all(feature = "f64", not(feature = "f32")))]
    pub type Real = f64;
}

// -- end of file --
