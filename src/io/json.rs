use std::io::{self, Write};

use crate::config::AircraftConfig;
use crate::state::FlightState;

/// Summary statistics computed from a flight trajectory.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub peak_altitude: f64,
    pub peak_altitude_time: f64,
    pub max_airspeed: f64,
    pub time_stalled: f64,
    pub touchdown_time: Option<f64>,
    pub touchdown_sink: Option<f64>, // ft/s, sink rate going into the ground
    pub flight_time: f64,
    pub crashed: bool,
}

impl FlightSummary {
    /// Compute summary from trajectory data.
    pub fn from_trajectory(trajectory: &[FlightState]) -> Self {
        let peak = trajectory
            .iter()
            .max_by(|a, b| a.altitude.partial_cmp(&b.altitude).unwrap())
            .unwrap();

        let max_airspeed = trajectory
            .iter()
            .map(|s| s.airspeed)
            .fold(0.0_f64, f64::max);

        let time_stalled: f64 = trajectory
            .windows(2)
            .filter(|w| w[1].stalled)
            .map(|w| w[1].time - w[0].time)
            .sum();

        let touchdown = trajectory
            .windows(2)
            .find(|w| w[0].airborne() && !w[1].airborne());

        let last = trajectory.last().unwrap();

        FlightSummary {
            peak_altitude: peak.altitude,
            peak_altitude_time: peak.time,
            max_airspeed,
            time_stalled,
            touchdown_time: touchdown.map(|w| w[1].time),
            // The touchdown frame itself has its vertical speed zeroed, so
            // the sink rate going in is the one of the frame before.
            touchdown_sink: touchdown.map(|w| w[0].vertical_speed),
            flight_time: last.time,
            crashed: last.crashed,
        }
    }

    pub fn outcome(&self) -> &'static str {
        if self.crashed {
            "crashed"
        } else if self.touchdown_time.is_some() {
            "landed"
        } else {
            "airborne"
        }
    }
}

/// Write flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    config: &AircraftConfig,
    summary: &FlightSummary,
) -> io::Result<()> {
    let fmt_opt = |v: Option<f64>| match v {
        Some(v) => format!("{v:.2}"),
        None => "null".into(),
    };

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"aircraft\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", config.name)?;
    writeln!(writer, "    \"stall_speed_kt\": {:.1},", config.stall_speed)?;
    writeln!(writer, "    \"max_speed_kt\": {:.1}", config.max_speed)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"flight\": {{")?;
    writeln!(writer, "    \"outcome\": \"{}\",", summary.outcome())?;
    writeln!(writer, "    \"peak_altitude_ft\": {:.2},", summary.peak_altitude)?;
    writeln!(writer, "    \"peak_altitude_time_s\": {:.2},", summary.peak_altitude_time)?;
    writeln!(writer, "    \"max_airspeed_kt\": {:.2},", summary.max_airspeed)?;
    writeln!(writer, "    \"time_stalled_s\": {:.2},", summary.time_stalled)?;
    writeln!(writer, "    \"touchdown_time_s\": {},", fmt_opt(summary.touchdown_time))?;
    writeln!(writer, "    \"touchdown_sink_fts\": {},", fmt_opt(summary.touchdown_sink))?;
    writeln!(writer, "    \"flight_time_s\": {:.2}", summary.flight_time)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    config: &AircraftConfig,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, config, summary)
}
