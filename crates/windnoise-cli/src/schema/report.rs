use chrono::{DateTime, Utc};
use serde::Serialize;
use windnoise_acoustics::AttenuationProfile;
use windnoise_stats::{descriptive::SummaryStatistics, histogram::Histogram};

/// A JSON report stamped with its creation time.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Report<T> {
    pub fn new(body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WindSpeedRecord {
    pub column: String,
    /// Missing cells dropped before summarizing
    pub skipped: usize,
    pub summary: SummaryRecord,
    pub histogram: Vec<HistogramBinRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl From<&SummaryStatistics> for SummaryRecord {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            count: stats.count,
            mean: stats.mean,
            std: stats.std_dev,
            min: stats.min,
            p25: stats.p25,
            p50: stats.median,
            p75: stats.p75,
            max: stats.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBinRecord {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

impl HistogramBinRecord {
    pub fn from_histogram(histogram: &Histogram) -> Vec<Self> {
        histogram
            .bins
            .iter()
            .map(|bin| Self {
                start: bin.range.start,
                end: bin.range.end,
                count: bin.count,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttenuationRecord {
    pub sound_power_min: f64,
    pub sound_power_max: f64,
    pub points: Vec<AttenuationRowRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<ThresholdRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttenuationRowRecord {
    pub distance: f64,
    pub sound_pressure_min: f64,
    pub sound_pressure_max: f64,
}

/// Distances at which each curve attenuates to a chosen level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdRecord {
    pub sound_pressure_level: f64,
    pub distance_min: f64,
    pub distance_max: f64,
}

impl AttenuationRecord {
    pub fn new(profile: &AttenuationProfile, threshold: Option<f64>) -> Self {
        Self {
            sound_power_min: profile.min.sound_power_level(),
            sound_power_max: profile.max.sound_power_level(),
            points: profile
                .rows()
                .map(|(min, max)| AttenuationRowRecord {
                    distance: min.distance,
                    sound_pressure_min: min.sound_pressure_level,
                    sound_pressure_max: max.sound_pressure_level,
                })
                .collect(),
            threshold: threshold.map(|level| ThresholdRecord {
                sound_pressure_level: level,
                distance_min: profile.min.distance_for_level(level),
                distance_max: profile.max.distance_for_level(level),
            }),
        }
    }
}

/// Combined wind speed and attenuation report.
#[derive(Debug, Clone, Serialize)]
pub struct FullRecord {
    pub wind_speed: WindSpeedRecord,
    pub attenuation: AttenuationRecord,
}
