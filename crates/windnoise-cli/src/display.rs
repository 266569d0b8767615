//! Text rendering of analysis results
//!
//! Numbers are rounded here and nowhere else.

use std::io::{self, Write};

use windnoise_acoustics::AttenuationProfile;
use windnoise_stats::{descriptive::SummaryStatistics, histogram::Histogram};

/// Width of the longest histogram bar, in characters
pub const HISTOGRAM_BAR_WIDTH: usize = 50;

/// Print summary statistics as a "describe" block
pub fn write_summary<W>(w: &mut W, column: &str, stats: &SummaryStatistics) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "{:<6}{:>16}", "count", stats.count)?;
    for (label, value) in stats.rows() {
        writeln!(w, "{label:<6}{value:>16.6}")?;
    }
    writeln!(w, "Name: {column}, dtype: float64")
}

/// Print a histogram with one bar per bin, scaled to the fullest bin
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn write_histogram<W>(w: &mut W, histogram: &Histogram) -> io::Result<()>
where
    W: Write,
{
    let max_count = histogram.max_count();
    if max_count == 0 {
        return writeln!(w, "  (no data)");
    }
    for bin in &histogram.bins {
        let bar_len =
            ((bin.count as f64 / max_count as f64) * HISTOGRAM_BAR_WIDTH as f64).round() as usize;
        writeln!(
            w,
            "  {:>8.2} - {:>8.2} m/s |{:<width$}| {}",
            bin.range.start,
            bin.range.end,
            "#".repeat(bar_len),
            bin.count,
            width = HISTOGRAM_BAR_WIDTH,
        )?;
    }
    Ok(())
}

/// Print one line per distance with the min and max sound pressure levels
pub fn write_attenuation<W>(w: &mut W, profile: &AttenuationProfile) -> io::Result<()>
where
    W: Write,
{
    for (min, max) in profile.rows() {
        writeln!(
            w,
            "Distance: {} m, Sound Pressure Level (Min): {:.2} dB(A), Sound Pressure Level (Max): {:.2} dB(A)",
            min.distance, min.sound_pressure_level, max.sound_pressure_level,
        )?;
    }
    Ok(())
}

/// Print where each curve drops to `level`
pub fn write_threshold<W>(w: &mut W, profile: &AttenuationProfile, level: f64) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "Sound pressure level reaches {level:.2} dB(A) at {:.2} m (Min {} dB(A)) and {:.2} m (Max {} dB(A))",
        profile.min.distance_for_level(level),
        profile.min.sound_power_level(),
        profile.max.distance_for_level(level),
        profile.max.sound_power_level(),
    )
}
