use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{data::MissingPolicy, util};

/// Analysis parameters loaded from a JSON file.
///
/// Every field is optional; command-line flags take precedence and built-in
/// defaults fill whatever is left.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Minimum sound power level of the turbine, in dB(A)
    pub sound_power_min: Option<f64>,
    /// Maximum sound power level of the turbine, in dB(A)
    pub sound_power_max: Option<f64>,
    /// Distances from the turbine, in metres
    pub distances: Option<Vec<f64>>,
    /// Name of the wind-speed column in the dataset
    pub column: Option<String>,
    /// Number of histogram bins
    pub histogram_bins: Option<usize>,
    /// Handling of missing wind-speed cells
    pub missing: Option<MissingPolicy>,
}

impl Scenario {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        util::load_json_file("scenario", path.as_ref())
    }

    /// Loads the scenario file if one was given, otherwise an empty scenario.
    pub fn open_optional<P>(path: Option<P>) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let scenario = Self::open(&path)?;
        log::info!("Loaded scenario from {}", path.as_ref().display());
        Ok(scenario)
    }
}
