use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use windnoise_stats::{descriptive::SummaryStatistics, histogram::Histogram};

use crate::{
    command::params::{DatasetArg, DatasetParams, OutputArg, ScenarioArg},
    data, display,
    schema::report::{HistogramBinRecord, Report, SummaryRecord, WindSpeedRecord},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct WindStatsArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,
    #[clap(flatten)]
    pub scenario: ScenarioArg,
    #[clap(flatten)]
    pub output: OutputArg,
}

/// Summary and distribution of the wind speed column
#[derive(Debug, Clone)]
pub(crate) struct WindAnalysis {
    pub column: String,
    pub skipped: usize,
    pub summary: SummaryStatistics,
    pub histogram: Histogram,
}

impl WindAnalysis {
    pub(crate) fn to_record(&self) -> WindSpeedRecord {
        WindSpeedRecord {
            column: self.column.clone(),
            skipped: self.skipped,
            summary: SummaryRecord::from(&self.summary),
            histogram: HistogramBinRecord::from_histogram(&self.histogram),
        }
    }

    pub(crate) fn write_text<W>(&self, w: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(w, "Wind Speed Statistics")?;
        writeln!(w, "=====================\n")?;
        display::write_summary(w, &self.column, &self.summary)?;
        if self.skipped > 0 {
            writeln!(w, "({} missing values skipped)", self.skipped)?;
        }
        writeln!(w)?;
        writeln!(w, "Distribution of Wind Speed ({} bins)", self.histogram.bins.len())?;
        display::write_histogram(w, &self.histogram)
    }
}

pub(crate) fn analyze(params: &DatasetParams) -> anyhow::Result<WindAnalysis> {
    let speeds = data::load_wind_speeds(&params.path, &params.column, params.missing)?;
    log::info!(
        "Loaded {} wind speed samples from {}",
        speeds.values.len(),
        params.path.display()
    );
    if speeds.skipped > 0 {
        log::warn!("Skipped {} missing wind speed values", speeds.skipped);
    }

    let mut sorted = speeds.values;
    sorted.sort_by(f64::total_cmp);
    let summary = SummaryStatistics::from_sorted(&sorted).with_context(|| {
        format!(
            "Failed to summarize column '{}' of {}",
            params.column,
            params.path.display()
        )
    })?;
    let histogram = Histogram::from_sorted(&sorted, params.bins);

    Ok(WindAnalysis {
        column: params.column.clone(),
        skipped: speeds.skipped,
        summary,
        histogram,
    })
}

pub(crate) fn run(arg: &WindStatsArg) -> anyhow::Result<()> {
    let scenario = arg.scenario.load()?;
    let params = arg.dataset.resolve(&scenario)?;
    let analysis = analyze(&params)?;

    let mut output = arg.output.open()?;
    if arg.output.json {
        output.write_json(Report::new(analysis.to_record()))
    } else {
        output.write_text(|w| analysis.write_text(w))
    }
}
