//! Sound pressure level attenuation with distance.
//!
//! A source with sound power level `Lw` produces, at distance `d` metres, the
//! sound pressure level
//!
//! ```text
//! Lp = Lw − 20·log10(d)
//! ```
//!
//! i.e. a 6 dB drop for every doubling of distance. Values are never rounded
//! here; formatting is left to the caller.

use crate::SoundPowerRange;

/// Distances from the turbine along the pedestrian path, in metres.
///
/// Starts at 1 m since the formula is undefined at the source itself.
pub const DEFAULT_DISTANCES: [f64; 10] =
    [1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0];

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("distance must be a finite value greater than zero, got {distance} m")]
pub struct InvalidDistanceError {
    pub distance: f64,
}

/// Computes the sound pressure level at `distance` metres from a source of
/// `sound_power_level` dB(A).
///
/// # Errors
///
/// Returns [`InvalidDistanceError`] if `distance` is not finite or not
/// strictly positive.
///
/// # Examples
///
/// ```
/// # use windnoise_acoustics::attenuation::sound_pressure_level;
/// assert_eq!(sound_pressure_level(90.0, 1.0).unwrap(), 90.0);
/// assert!((sound_pressure_level(87.4, 10.0).unwrap() - 67.4).abs() < 1e-12);
/// assert!(sound_pressure_level(90.0, 0.0).is_err());
/// ```
pub fn sound_pressure_level(
    sound_power_level: f64,
    distance: f64,
) -> Result<f64, InvalidDistanceError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(InvalidDistanceError { distance });
    }
    Ok(sound_power_level - 20.0 * distance.log10())
}

/// Distance at which a source of `sound_power_level` dB(A) attenuates to
/// `sound_pressure_level` dB(A).
///
/// Inverse of [`sound_pressure_level`]. A target above the source level
/// yields a distance below 1 m.
///
/// ```
/// # use windnoise_acoustics::attenuation::distance_for_level;
/// assert!((distance_for_level(90.0, 70.0) - 10.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn distance_for_level(sound_power_level: f64, sound_pressure_level: f64) -> f64 {
    10f64.powf((sound_power_level - sound_pressure_level) / 20.0)
}

/// Sound pressure level at a single distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationPoint {
    /// Distance from the source, in metres.
    pub distance: f64,
    /// Sound pressure level at `distance`, in dB(A).
    pub sound_pressure_level: f64,
}

/// Attenuation of one source level over an ordered set of distances.
#[derive(Debug, Clone, PartialEq)]
pub struct AttenuationCurve {
    sound_power_level: f64,
    points: Vec<AttenuationPoint>,
}

impl AttenuationCurve {
    /// Evaluates the attenuation formula at every distance, keeping the input order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDistanceError`] for the first distance that is not
    /// finite and strictly positive. No partial curve is produced.
    pub fn compute(
        sound_power_level: f64,
        distances: &[f64],
    ) -> Result<Self, InvalidDistanceError> {
        let points = distances
            .iter()
            .map(|&distance| {
                sound_pressure_level(sound_power_level, distance).map(|sound_pressure_level| {
                    AttenuationPoint {
                        distance,
                        sound_pressure_level,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            sound_power_level,
            points,
        })
    }

    #[must_use]
    pub fn sound_power_level(&self) -> f64 {
        self.sound_power_level
    }

    #[must_use]
    pub fn points(&self) -> &[AttenuationPoint] {
        &self.points
    }

    /// Distance at which this curve's source attenuates to `sound_pressure_level`.
    #[must_use]
    pub fn distance_for_level(&self, sound_pressure_level: f64) -> f64 {
        distance_for_level(self.sound_power_level, sound_pressure_level)
    }
}

/// Attenuation curves for the minimum and maximum source levels over the same distances.
#[derive(Debug, Clone, PartialEq)]
pub struct AttenuationProfile {
    pub min: AttenuationCurve,
    pub max: AttenuationCurve,
}

impl AttenuationProfile {
    /// Evaluates both ends of `range` over `distances`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDistanceError`] if any distance is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use windnoise_acoustics::{AttenuationProfile, DEFAULT_DISTANCES, SoundPowerRange};
    ///
    /// let profile = AttenuationProfile::compute(SoundPowerRange::default(), &DEFAULT_DISTANCES)?;
    /// for (min, max) in profile.rows() {
    ///     assert_eq!(min.distance, max.distance);
    ///     assert!(min.sound_pressure_level < max.sound_pressure_level);
    /// }
    /// # Ok::<(), windnoise_acoustics::InvalidDistanceError>(())
    /// ```
    pub fn compute(
        range: SoundPowerRange,
        distances: &[f64],
    ) -> Result<Self, InvalidDistanceError> {
        Ok(Self {
            min: AttenuationCurve::compute(range.min(), distances)?,
            max: AttenuationCurve::compute(range.max(), distances)?,
        })
    }

    /// Pairs up the min and max points for each distance.
    pub fn rows(&self) -> impl Iterator<Item = (&AttenuationPoint, &AttenuationPoint)> + '_ {
        self.min.points.iter().zip(&self.max.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    mod sound_pressure_level {
        use super::*;

        #[test]
        fn test_unit_distance_keeps_source_level() {
            assert_eq!(sound_pressure_level(90.0, 1.0).unwrap(), 90.0);
        }

        #[test]
        fn test_ten_metres_drops_twenty_db() {
            let lp = sound_pressure_level(87.4, 10.0).unwrap();
            assert!((lp - 67.4).abs() < EPS, "{lp}");
        }

        #[test]
        fn test_doubling_distance_drops_about_six_db() {
            let near = sound_pressure_level(100.0, 50.0).unwrap();
            let far = sound_pressure_level(100.0, 100.0).unwrap();
            assert!((near - far - 20.0 * 2f64.log10()).abs() < EPS);
        }

        #[test]
        fn test_invalid_distances() {
            for distance in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY] {
                let err = sound_pressure_level(90.0, distance).unwrap_err();
                assert!(err.distance.is_nan() || err.distance == distance);
            }
        }

        #[test]
        fn test_error_message() {
            let err = InvalidDistanceError { distance: -5.0 };
            assert_eq!(
                err.to_string(),
                "distance must be a finite value greater than zero, got -5 m"
            );
        }

        #[test]
        fn test_sub_metre_distance_raises_level() {
            assert!(sound_pressure_level(90.0, 0.5).unwrap() > 90.0);
        }
    }

    mod curve {
        use super::*;

        #[test]
        fn test_strictly_decreasing_with_distance() {
            let curve = AttenuationCurve::compute(104.0, &DEFAULT_DISTANCES).unwrap();
            assert_eq!(curve.points().len(), DEFAULT_DISTANCES.len());
            for pair in curve.points().windows(2) {
                assert!(pair[0].sound_pressure_level > pair[1].sound_pressure_level);
            }
        }

        #[test]
        fn test_keeps_distance_order() {
            let distances = [300.0, 1.0, 25.0];
            let curve = AttenuationCurve::compute(90.0, &distances).unwrap();
            let got = curve.points().iter().map(|p| p.distance).collect::<Vec<_>>();
            assert_eq!(got, distances);
        }

        #[test]
        fn test_empty_distances_give_empty_curve() {
            let curve = AttenuationCurve::compute(90.0, &[]).unwrap();
            assert!(curve.points().is_empty());
        }

        #[test]
        fn test_any_invalid_distance_fails_whole_curve() {
            let err = AttenuationCurve::compute(90.0, &[1.0, 5.0, 0.0, 10.0]).unwrap_err();
            assert_eq!(err, InvalidDistanceError { distance: 0.0 });
        }

        #[test]
        fn test_distance_for_level_inverts_formula() {
            let curve = AttenuationCurve::compute(104.0, &DEFAULT_DISTANCES).unwrap();
            for point in curve.points() {
                let d = curve.distance_for_level(point.sound_pressure_level);
                assert!((d - point.distance).abs() / point.distance < EPS);
            }
        }
    }

    mod profile {
        use super::*;

        #[test]
        fn test_min_and_max_share_distances() {
            let range = SoundPowerRange::new(87.4, 104.0).unwrap();
            let profile = AttenuationProfile::compute(range, &DEFAULT_DISTANCES).unwrap();
            assert_eq!(profile.min.sound_power_level(), 87.4);
            assert_eq!(profile.max.sound_power_level(), 104.0);
            assert_eq!(profile.rows().count(), DEFAULT_DISTANCES.len());
            for (min, max) in profile.rows() {
                assert_eq!(min.distance, max.distance);
                let gap = max.sound_pressure_level - min.sound_pressure_level;
                assert!((gap - 16.6).abs() < EPS);
            }
        }

        #[test]
        fn test_invalid_distance_propagates() {
            let err =
                AttenuationProfile::compute(SoundPowerRange::default(), &[-5.0]).unwrap_err();
            assert_eq!(err.distance, -5.0);
        }
    }
}
