//! Liskov Substitution: a bicycle is not a vehicle with a broken engine.
//!
//! Run with: cargo run --bin lsp_vehicles

use std::io::{self, Write};

use colored::Colorize;
use design_principles::lsp::{self, legacy, Bicycle, Car, Movable};

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Before: one Vehicle trait for all ===".bold())?;
    let fleet: [&dyn legacy::Vehicle; 2] = [&legacy::Car, &legacy::Bicycle];
    if let Err(err) = legacy::start_all(&fleet, &mut out) {
        writeln!(out, "{}", format!("substitution broke: {err}").red())?;
    }

    writeln!(out, "\n{}", "=== After: Movable and EnginePowered ===".bold())?;
    lsp::start_and_ride(&Car, &mut out)?;
    let movables: [&dyn Movable; 2] = [&Car, &Bicycle];
    for vehicle in movables {
        lsp::ride(vehicle, &mut out)?;
    }
    Ok(())
}
