//! Command-line parameters shared by the analysis commands
//!
//! Values are resolved in order: command-line flag, scenario file, built-in default.

use std::path::PathBuf;

use anyhow::{Context, ensure};
use clap::Args;
use windnoise_acoustics::{DEFAULT_DISTANCES, SoundPowerRange};

use crate::{
    data::{DEFAULT_COLUMN, MissingPolicy},
    schema::scenario::Scenario,
    util::Output,
};

/// Number of histogram bins used for the wind speed distribution
pub(crate) const DEFAULT_HISTOGRAM_BINS: usize = 50;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ScenarioArg {
    /// JSON file with analysis parameters; flags override its values
    #[arg(long)]
    pub scenario: Option<PathBuf>,
}

impl ScenarioArg {
    pub(crate) fn load(&self) -> anyhow::Result<Scenario> {
        Scenario::open_optional(self.scenario.as_ref())
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the wind speed CSV file
    pub data: PathBuf,

    /// Name of the wind speed column [default: WindSpeed_mps]
    #[arg(long)]
    pub column: Option<String>,

    /// Number of histogram bins [default: 50]
    #[arg(long)]
    pub bins: Option<usize>,

    /// How to treat missing wind speed cells (skip or reject) [default: skip]
    #[arg(long)]
    pub missing: Option<MissingPolicy>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DatasetParams {
    pub path: PathBuf,
    pub column: String,
    pub bins: usize,
    pub missing: MissingPolicy,
}

impl DatasetArg {
    pub(crate) fn resolve(&self, scenario: &Scenario) -> anyhow::Result<DatasetParams> {
        let bins = self
            .bins
            .or(scenario.histogram_bins)
            .unwrap_or(DEFAULT_HISTOGRAM_BINS);
        ensure!(bins > 0, "Number of histogram bins must be at least 1");

        let params = DatasetParams {
            path: self.data.clone(),
            column: self
                .column
                .clone()
                .or_else(|| scenario.column.clone())
                .unwrap_or_else(|| DEFAULT_COLUMN.to_owned()),
            bins,
            missing: self.missing.or(scenario.missing).unwrap_or_default(),
        };
        log::debug!("Dataset parameters: {params:?}");
        Ok(params)
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct AttenuationArg {
    /// Minimum sound power level of the turbine in dB(A) [default: 87.4]
    #[arg(long)]
    pub lw_min: Option<f64>,

    /// Maximum sound power level of the turbine in dB(A) [default: 104.0]
    #[arg(long)]
    pub lw_max: Option<f64>,

    /// Distances from the turbine in metres (comma-separated)
    /// [default: 1,5,10,25,50,100,150,200,250,300]
    #[arg(long, value_delimiter = ',')]
    pub distances: Option<Vec<f64>>,

    /// Also report the distance at which each curve falls to this level, in dB(A)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AttenuationParams {
    pub range: SoundPowerRange,
    pub distances: Vec<f64>,
    pub threshold: Option<f64>,
}

impl AttenuationArg {
    pub(crate) fn resolve(&self, scenario: &Scenario) -> anyhow::Result<AttenuationParams> {
        let default_range = SoundPowerRange::default();
        let min = self
            .lw_min
            .or(scenario.sound_power_min)
            .unwrap_or(default_range.min());
        let max = self
            .lw_max
            .or(scenario.sound_power_max)
            .unwrap_or(default_range.max());
        let range = SoundPowerRange::new(min, max).context("Invalid sound power levels")?;

        let distances = self
            .distances
            .clone()
            .or_else(|| scenario.distances.clone())
            .unwrap_or_else(|| DEFAULT_DISTANCES.to_vec());
        ensure!(!distances.is_empty(), "At least one distance is required");

        if let Some(threshold) = self.threshold {
            ensure!(
                threshold.is_finite(),
                "Threshold must be a finite level, got {threshold}"
            );
        }

        let params = AttenuationParams {
            range,
            distances,
            threshold: self.threshold,
        };
        log::debug!("Attenuation parameters: {params:?}");
        Ok(params)
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct OutputArg {
    /// Write a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Output file path [default: stdout]
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArg {
    pub(crate) fn open(&self) -> anyhow::Result<Output> {
        Output::new(self.output.as_deref())
    }
}
