//! Physical and tuning constants for the mixing-length formula.

/// Von Kármán constant (dimensionless).
pub const VON_KARMAN: f64 = 0.4;

/// Upper bound on the mixing length [m].
pub const MAX_MIX_LENGTH: f64 = 20_000.0;

/// Tuning factor dividing the blended length scale (dimensionless).
pub const LENGTH_FAC: f64 = 0.5;

/// Leading coefficient of the blended length scale, ≈ 2√2.
pub const MIX_COEF: f64 = 2.8284;

/// Weight of the stability term in the harmonic blend (dimensionless).
pub const STAB_COEF: f64 = 0.01;
