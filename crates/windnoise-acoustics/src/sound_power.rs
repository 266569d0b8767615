/// Lower bound of the turbine sound power level range, in dB(A).
///
/// ENERCON E-82 E4 datasheet value.
pub const DEFAULT_SOUND_POWER_MIN: f64 = 87.4;

/// Upper bound of the turbine sound power level range, in dB(A).
pub const DEFAULT_SOUND_POWER_MAX: f64 = 104.0;

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("invalid sound power level range: min {min} dB(A), max {max} dB(A)")]
pub struct InvalidSoundPowerRangeError {
    pub min: f64,
    pub max: f64,
}

/// Minimum and maximum sound power level of a source, in dB(A).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundPowerRange {
    min: f64,
    max: f64,
}

impl Default for SoundPowerRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_SOUND_POWER_MIN,
            max: DEFAULT_SOUND_POWER_MAX,
        }
    }
}

impl SoundPowerRange {
    /// Creates a range; both bounds must be finite and `min <= max`.
    ///
    /// ```
    /// # use windnoise_acoustics::SoundPowerRange;
    /// assert!(SoundPowerRange::new(87.4, 104.0).is_ok());
    /// assert!(SoundPowerRange::new(104.0, 87.4).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidSoundPowerRangeError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(InvalidSoundPowerRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let range = SoundPowerRange::default();
        assert_eq!(range.min(), DEFAULT_SOUND_POWER_MIN);
        assert_eq!(range.max(), DEFAULT_SOUND_POWER_MAX);
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        let range = SoundPowerRange::new(95.0, 95.0).unwrap();
        assert_eq!(range.min(), range.max());
    }

    #[test]
    fn test_rejects_inverted_and_non_finite() {
        assert_eq!(
            SoundPowerRange::new(100.0, 90.0),
            Err(InvalidSoundPowerRangeError {
                min: 100.0,
                max: 90.0
            })
        );
        assert!(SoundPowerRange::new(f64::NAN, 90.0).is_err());
        assert!(SoundPowerRange::new(80.0, f64::INFINITY).is_err());
    }
}
