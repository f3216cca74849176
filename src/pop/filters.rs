use crate::real::Real;

/// Multiplicative notch of depth `a` between `gamma_low` and `gamma_high`.
///
/// `eta_low` and `eta_high` set the sharpness of the band edges; the value
/// tends to one far outside the band and to `1 - a` deep inside it.
pub fn notch(val: Real, a: Real, gamma_low: Real, eta_low: Real, gamma_high: Real, eta_high: Real) -> Real {
    1.0 - a
        / ((1.0 + (gamma_low / val).powf(eta_low)) * (1.0 + (val / gamma_high).powf(eta_high)))
}

/// Multiplicative low-pass roll-off around `mmax` with sharpness `n`.
pub fn low_pass(val: Real, mmax: Real, n: Real) -> Real {
    1.0 / (1.0 + (val / mmax).powf(n))
}


// -- end of file --
