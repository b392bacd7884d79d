//! Decorator: toppings wrap a coffee and add to its price.
//!
//! Run with: cargo run --bin decorator_coffee

use std::io::{self, Write};

use colored::Colorize;
use design_principles::config::DemoConfig;
use design_principles::decorator::{
    legacy, Coffee, Milk, SimpleCoffee, Sugar, Vanilla, WhippedCream,
};

const MENU: &str = r#"
[[orders]]
name = "vanilla latte"
base = "simple"
toppings = ["milk", "vanilla"]

[[orders]]
name = "double sugar"
base = "simple"
toppings = ["sugar", "sugar"]
"#;

fn print(out: &mut dyn Write, coffee: &dyn Coffee) -> io::Result<()> {
    writeln!(out, "{}: ${}", coffee.description(), coffee.cost())
}

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Before: one type per combination ===".bold())?;
    print(&mut out, &legacy::MilkCoffee)?;
    print(&mut out, &legacy::MilkAndSugarCoffee)?;
    print(&mut out, &legacy::MilkSugarVanillaCoffee)?;

    writeln!(out, "
{}", "=== After: nested by hand ===".bold())?;
    print(&mut out, &SimpleCoffee)?;
    print(&mut out, &Milk::new(SimpleCoffee))?;
    print(&mut out, &Sugar::new(Milk::new(SimpleCoffee)))?;
    let fancy = WhippedCream::new(Vanilla::new(Sugar::new(Milk::new(SimpleCoffee))));
    print(&mut out, &fancy)?;

    writeln!(out, "\n{}", "=== After: from a menu ===".bold())?;
    for (name, order) in DemoConfig::from_toml(MENU)?.orders()? {
        write!(out, "{} ", format!("[{name}]").cyan())?;
        print(&mut out, &order)?;
    }
    Ok(())
}
