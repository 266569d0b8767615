//! Sound pressure level attenuation for a wind turbine.
//!
//! Given the sound power level of the turbine (its intrinsic acoustic output,
//! independent of distance) this crate computes the sound pressure level heard
//! at each distance along a path, for both ends of the turbine's sound power
//! range.
//!
//! - [`attenuation`] - the attenuation formula, curves and min/max profiles
//! - [`sound_power`] - validated sound power level ranges

pub use self::{attenuation::*, sound_power::*};

pub mod attenuation;
pub mod sound_power;
