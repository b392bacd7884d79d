//! Observer: displays subscribe to a weather station.
//!
//! Run with: cargo run --bin observer_weather

use std::io::{self, Write};

use colored::Colorize;
use design_principles::observer::{HardwiredStation, LedDisplay, MobileDisplay, WeatherStation};

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Before: displays hardwired ===".bold())?;
    HardwiredStation { temperature: 25.0 }.update_display(&mut out)?;

    writeln!(out, "\n{}", "=== After: displays subscribe ===".bold())?;
    let mut station = WeatherStation::new(25.0);
    station.add_observer(MobileDisplay);
    let led = station.add_observer(LedDisplay);
    station.notify_observers(&mut out)?;

    writeln!(out, "{}", format!("-- removing {led}").cyan())?;
    station.remove_observer(led);
    station.set_temperature(22.0);
    let notified = station.notify_observers(&mut out)?;
    writeln!(out, "{}", format!("{notified} display(s) updated").green())?;
    Ok(())
}
