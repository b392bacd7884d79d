//! Dependency Inversion: the same application, different logging setups.
//!
//! Run with: cargo run --bin dip_logging

use std::io::{self, Write};

use colored::Colorize;
use design_principles::config::DemoConfig;
use design_principles::dip::{
    Application, ConsoleLogger, DatabaseLogger, FileLogger, LoggerProfile,
    TightlyCoupledApplication,
};

const TEST_SETUP: &str = r#"profile = "test""#;

fn main() -> anyhow::Result<()> {
    design_principles::init_tracing();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Before: concrete loggers wired in ===".bold())?;
    let coupled = TightlyCoupledApplication {
        file_logger: FileLogger,
        database_logger: DatabaseLogger,
        console_logger: ConsoleLogger,
    };
    coupled.process_user(&mut out, "Binod Suman")?;

    writeln!(out, "\n{}", "=== After: loggers injected by profile ===".bold())?;
    for (profile, user) in [
        (LoggerProfile::Production, "production_user"),
        (LoggerProfile::Development, "dev_user"),
        (LoggerProfile::Alert, "alert_user"),
    ] {
        writeln!(out, "{}", format!("-- {profile:?}").cyan())?;
        Application::from_profile(profile).process_user(&mut out, user)?;
    }

    writeln!(out, "\n{}", "=== Test setup, described in TOML ===".bold())?;
    let test_app = DemoConfig::from_toml(TEST_SETUP)?.application();
    let invoked = test_app.process_user(&mut out, "test_user")?;
    writeln!(out, "{}", format!("{invoked} logger(s) invoked").green())?;
    Ok(())
}
