//! Open/Closed: new discounts and shapes without touching the callers.
//!
//! Run with: cargo run --bin ocp_discounts

use std::io::{self, Write};

use colored::Colorize;
use design_principles::ocp::{
    apply_discount, draw_and_export, legacy, Circle, Credit, Jpg, PaymentMethod, Rectangle, Svg,
};

const INPUTS: [&str; 4] = ["Debit", "PayTM", "cash", "barter"];

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Before: branching on strings ===".bold())?;
    for input in INPUTS {
        writeln!(out, "{input}: {}", legacy::discount_for(input))?;
    }
    legacy::draw_and_export(&mut out, "circle", "jpg")?;

    writeln!(out, "\n{}", "=== After: discount by payment method ===".bold())?;
    writeln!(out, "Credit: {}", apply_discount(&Credit))?;
    for input in INPUTS {
        match input.parse::<PaymentMethod>() {
            Ok(method) => writeln!(out, "{method}: {}", method.discount().discount())?,
            Err(err) => writeln!(out, "{}", err.to_string().red())?,
        }
    }

    writeln!(out, "\n{}", "=== After: draw and export ===".bold())?;
    draw_and_export(&mut out, &Circle, &Jpg)?;
    draw_and_export(&mut out, &Rectangle, &Svg)?;
    Ok(())
}
