use std::io::{self, Write};

use clap::Args;
use windnoise_acoustics::AttenuationProfile;

use crate::{
    command::params::{AttenuationArg, AttenuationParams, OutputArg, ScenarioArg},
    display,
    schema::report::{AttenuationRecord, Report},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct AttenuationCommandArg {
    #[clap(flatten)]
    pub attenuation: AttenuationArg,
    #[clap(flatten)]
    pub scenario: ScenarioArg,
    #[clap(flatten)]
    pub output: OutputArg,
}

/// Sound pressure levels for the configured source range and distances
#[derive(Debug, Clone)]
pub(crate) struct AttenuationAnalysis {
    pub profile: AttenuationProfile,
    pub threshold: Option<f64>,
}

impl AttenuationAnalysis {
    pub(crate) fn to_record(&self) -> AttenuationRecord {
        AttenuationRecord::new(&self.profile, self.threshold)
    }

    pub(crate) fn write_text<W>(&self, w: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(w, "Sound Pressure Level vs. Distance from Wind Turbine")?;
        writeln!(w, "===================================================\n")?;
        display::write_attenuation(w, &self.profile)?;
        if let Some(level) = self.threshold {
            writeln!(w)?;
            display::write_threshold(w, &self.profile, level)?;
        }
        Ok(())
    }
}

pub(crate) fn analyze(params: &AttenuationParams) -> anyhow::Result<AttenuationAnalysis> {
    let profile = AttenuationProfile::compute(params.range, &params.distances)?;
    log::info!(
        "Computed sound pressure levels at {} distances",
        params.distances.len()
    );
    Ok(AttenuationAnalysis {
        profile,
        threshold: params.threshold,
    })
}

pub(crate) fn run(arg: &AttenuationCommandArg) -> anyhow::Result<()> {
    let scenario = arg.scenario.load()?;
    let params = arg.attenuation.resolve(&scenario)?;
    let analysis = analyze(&params)?;

    let mut output = arg.output.open()?;
    if arg.output.json {
        output.write_json(Report::new(analysis.to_record()))
    } else {
        output.write_text(|w| analysis.write_text(w))
    }
}

#[cfg(test)]
mod tests {
    use windnoise_acoustics::{InvalidDistanceError, SoundPowerRange};

    use super::*;

    #[test]
    fn test_invalid_distance_is_reported() {
        let params = AttenuationParams {
            range: SoundPowerRange::default(),
            distances: vec![1.0, 0.0],
            threshold: None,
        };
        let err = analyze(&params).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidDistanceError>(),
            Some(&InvalidDistanceError { distance: 0.0 })
        );
    }

    #[test]
    fn test_text_includes_threshold() {
        let params = AttenuationParams {
            range: SoundPowerRange::default(),
            distances: vec![1.0, 10.0, 100.0],
            threshold: Some(65.0),
        };
        let analysis = analyze(&params).unwrap();
        let mut text = vec![];
        analysis.write_text(&mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert_eq!(text.matches("Distance: ").count(), 3);
        assert!(text.contains("reaches 65.00 dB(A)"));
    }
}
