use std::io::Write as _;

use clap::Args;

use crate::{
    command::{
        attenuation,
        params::{AttenuationArg, DatasetArg, OutputArg, ScenarioArg},
        wind_stats,
    },
    schema::report::{FullRecord, Report},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,
    #[clap(flatten)]
    pub attenuation: AttenuationArg,
    #[clap(flatten)]
    pub scenario: ScenarioArg,
    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let scenario = arg.scenario.load()?;
    let dataset_params = arg.dataset.resolve(&scenario)?;
    let attenuation_params = arg.attenuation.resolve(&scenario)?;

    let wind = wind_stats::analyze(&dataset_params)?;
    let attenuation = attenuation::analyze(&attenuation_params)?;

    let mut output = arg.output.open()?;
    if arg.output.json {
        output.write_json(Report::new(FullRecord {
            wind_speed: wind.to_record(),
            attenuation: attenuation.to_record(),
        }))
    } else {
        output.write_text(|w| {
            wind.write_text(w)?;
            writeln!(w)?;
            attenuation.write_text(w)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("windnoise-{}-report-{name}", std::process::id()))
    }

    fn report_arg(data: PathBuf, output: PathBuf, json: bool) -> ReportArg {
        ReportArg {
            dataset: DatasetArg {
                data,
                bins: Some(4),
                ..DatasetArg::default()
            },
            attenuation: AttenuationArg::default(),
            scenario: ScenarioArg::default(),
            output: OutputArg {
                json,
                output: Some(output),
            },
        }
    }

    #[test]
    fn test_json_report_written_to_file() {
        let data = temp_path("json.csv");
        let output = temp_path("out.json");
        fs::write(&data, "Time,WindSpeed_mps\n0,2.0\n1,NA\n2,4.0\n3,6.0\n").unwrap();

        run(&report_arg(data.clone(), output.clone(), true)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        fs::remove_file(&data).unwrap();
        fs::remove_file(&output).unwrap();

        assert!(json["generated_at"].is_string());
        assert_eq!(json["wind_speed"]["column"], "WindSpeed_mps");
        assert_eq!(json["wind_speed"]["skipped"], 1);
        assert_eq!(json["wind_speed"]["summary"]["count"], 3);
        assert_eq!(json["wind_speed"]["summary"]["mean"], 4.0);
        assert_eq!(json["wind_speed"]["histogram"].as_array().unwrap().len(), 4);
        assert_eq!(json["attenuation"]["sound_power_min"], 87.4);
        assert_eq!(json["attenuation"]["sound_power_max"], 104.0);
        assert_eq!(json["attenuation"]["points"].as_array().unwrap().len(), 10);
        assert!(json["attenuation"].get("threshold").is_none());
    }

    #[test]
    fn test_text_report_written_to_file() {
        let data = temp_path("text.csv");
        let output = temp_path("out.txt");
        fs::write(&data, "WindSpeed_mps\n1.0\n3.0\n").unwrap();

        run(&report_arg(data.clone(), output.clone(), false)).unwrap();
        let text = fs::read_to_string(&output).unwrap();
        fs::remove_file(&data).unwrap();
        fs::remove_file(&output).unwrap();

        assert!(text.contains("Name: WindSpeed_mps, dtype: float64"));
        assert!(text.contains(
            "Distance: 1 m, Sound Pressure Level (Min): 87.40 dB(A), Sound Pressure Level (Max): 104.00 dB(A)"
        ));
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());
    }

    #[test]
    fn test_missing_dataset_creates_no_report() {
        let output = temp_path("unused.json");
        let err = run(&report_arg(temp_path("absent.csv"), output.clone(), true)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
        assert!(!output.exists());
    }
}
