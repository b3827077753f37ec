use std::io::{self, Write};

use crate::state::FlightState;

/// Write trajectory data to CSV format.
///
/// Columns: time, airspeed, altitude, vertical_speed, pitch, roll,
///          throttle, stalled, crashed
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[FlightState]) -> io::Result<()> {
    writeln!(
        writer,
        "time,airspeed,altitude,vertical_speed,pitch,roll,throttle,stalled,crashed"
    )?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.3},{:.2},{:.3},{:.3},{:.3},{:.4},{},{}",
            s.time,
            s.airspeed,
            s.altitude,
            s.vertical_speed,
            s.pitch,
            s.roll,
            s.throttle,
            s.stalled as u8,
            s.crashed as u8,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[FlightState]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}
