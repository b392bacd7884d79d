//! Interface Segregation: each worker implements only what it does.
//!
//! Run with: cargo run --bin isp_workers

use std::io::{self, Write};

use colored::Colorize;
use design_principles::isp::{self, Designer, Developer, Eatable, Robot};

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Shipping features ===".bold())?;
    isp::ship_feature(&Developer, &mut out)?;
    isp::ship_feature(&Robot, &mut out)?;

    writeln!(out, "\n{}", "=== Mock-ups ===".bold())?;
    isp::mock_up(&Designer, &mut out)?;
    isp::mock_up(&Robot, &mut out)?;

    writeln!(out, "\n{}", "=== Lunch ===".bold())?;
    let eaters: [&dyn Eatable; 2] = [&Developer, &Designer];
    isp::lunch(&eaters, &mut out)?;
    // A Robot cannot join: it does not implement Eatable.
    Ok(())
}
