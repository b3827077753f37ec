use horizon_sim::config::presets;
use horizon_sim::io::FlightSummary;
use horizon_sim::pilot::ScriptedPilot;
use horizon_sim::sim;
use horizon_sim::sim::event::{detect_events, EventKind};
use horizon_sim::types::{Controls, FlightState, SimConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let config = presets::trainer();

    // -----------------------------------------------------------------------
    // Demo script: climb out, cruise, bleed into a stall, recover
    // -----------------------------------------------------------------------
    let neutral = Controls::NEUTRAL;
    let mut pilot = ScriptedPilot::new()
        // Pitch up 10 deg, spool the engine up
        .hold(1.0, Controls { pitch: 0.5, throttle: 1.0, ..neutral })
        // Full-power climb
        .hold(20.0, Controls { throttle: 1.0, ..neutral })
        // Level off
        .hold(21.0, Controls { pitch: -0.5, ..neutral })
        // Cruise
        .hold(30.0, neutral)
        // Chop the throttle and raise the nose until the wing quits
        .hold(31.5, Controls { pitch: 1.0, throttle: -1.0, ..neutral })
        .hold(62.0, Controls { throttle: -1.0, ..neutral })
        // Stall recovery: nose down, full power
        .hold(64.0, Controls { pitch: -1.0, throttle: 1.0, ..neutral })
        .hold(70.0, Controls { throttle: 1.0, ..neutral })
        // Ease back to level
        .hold(71.0, Controls { pitch: 0.5, ..neutral });

    let sim_config = SimConfig { dt: 1.0 / 60.0, max_time: 90.0 };
    let (trajectory, _) = sim::fly_with(&config, FlightState::default(), &sim_config, &mut pilot);

    let events = detect_events(&trajectory);
    let summary = FlightSummary::from_trajectory(&trajectory);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  FLIGHT LOG — {}", config.name);
    println!("====================================================================");
    println!();
    println!("  Aircraft");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Stall speed:   {:>7.0} kt    Max speed:     {:>7.0} kt",
        config.stall_speed, config.max_speed
    );
    println!(
        "  Pitch rate:    {:>7.0} °/s   Roll rate:     {:>7.0} °/s",
        config.pitch_rate, config.roll_rate
    );
    println!(
        "  Crash limits:  {:>7.0} ft/s sink, {:.0}° bank at touchdown",
        config.crash_sink_rate, config.crash_roll_limit
    );
    println!();

    println!("  Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if events.is_empty() {
        println!("  (uneventful flight)");
    }
    for event in &events {
        let label = match &event.kind {
            EventKind::StallEntry => "STALL",
            EventKind::StallRecovery => "RECOVERY",
            EventKind::Touchdown => "TOUCHDOWN",
            EventKind::Crash => "CRASH",
            EventKind::Custom(s) => s.as_str(),
        };
        println!(
            "  {:<10} t={:>6.1}s   alt={:>7.0}ft   spd={:>6.1}kt   v/s={:>7.1}ft/s",
            label, event.time, event.state.altitude, event.state.airspeed, event.state.vertical_speed,
        );
    }
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Outcome:       {:>10}     Flight time:  {:>8.1} s",
        summary.outcome(),
        summary.flight_time
    );
    println!(
        "  Peak altitude: {:>8.0} ft   (t={:.1} s)",
        summary.peak_altitude, summary.peak_altitude_time
    );
    println!(
        "  Max airspeed:  {:>8.1} kt   Time stalled: {:>8.1} s",
        summary.max_airspeed, summary.time_stalled
    );
    if let (Some(t), Some(sink)) = (summary.touchdown_time, summary.touchdown_sink) {
        println!("  Touchdown:     t={:>6.1} s    sink={:>6.1} ft/s", t, sink);
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>8}  {:>6}  {:>6}  {:>5}  {:>6}",
        "t (s)", "alt (ft)", "spd (kt)", "v/s", "pitch", "roll", "thr", "phase"
    );
    println!("  {}", "─".repeat(66));

    let sample_interval = (trajectory.len() / 30).max(1);
    for (i, s) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.2}  {:>8.0}  {:>8.1}  {:>8.1}  {:>6.1}  {:>6.1}  {:>5.2}  {:>6}",
            s.time,
            s.altitude,
            s.airspeed,
            s.vertical_speed,
            s.pitch,
            s.roll,
            s.throttle,
            s.phase().label(),
        );
    }

    println!();
    println!("  Simulation: {} steps, dt={:.4} s", trajectory.len(), sim_config.dt);
    println!("====================================================================");
    println!();
}
