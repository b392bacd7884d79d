//! Builder: mandatory fields up front, optional ones chained.
//!
//! Run with: cargo run --bin builder_user

use std::io::{self, Write};

use colored::Colorize;
use design_principles::builder::{Person, UserBuilder};

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== User ===".bold())?;
    let user = UserBuilder::new("abc", "dde").address("Bangalore").build()?;
    writeln!(out, "{user}")?;
    writeln!(out, "age: {:?}, phone: {:?}", user.age(), user.phone())?;

    writeln!(out, "\n{}", "=== Person ===".bold())?;
    let person = Person::builder("Binod", "9999").build()?;
    writeln!(out, "{} ({})", person.name(), person.phone())?;
    writeln!(out, "city: {:?}, country: {:?}", person.city(), person.country())?;

    writeln!(out, "\n{}", "=== Blank mandatory field ===".bold())?;
    match UserBuilder::new("", "dde").build() {
        Ok(user) => writeln!(out, "unexpected success: {user}")?,
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(())
}
