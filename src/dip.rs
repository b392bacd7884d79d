//! Dependency Inversion Principle
//!
//! [`Application`] depends on the [`Logger`] trait only. Which sinks it
//! writes to is decided by whoever builds it, so production, development and
//! test setups share the same business logic.
//!
//! [`TightlyCoupledApplication`] is the shape this replaces: it names three
//! concrete loggers and calls each through its own method.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;

pub trait Logger {
    /// Name of the place this logger writes to.
    fn sink(&self) -> &'static str;

    fn log(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "Writing to {} : {}", self.sink(), message)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileLog;

impl Logger for FileLog {
    fn sink(&self) -> &'static str {
        "File"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DbLog;

impl Logger for DbLog {
    fn sink(&self) -> &'static str {
        "Database"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog;

impl Logger for ConsoleLog {
    fn sink(&self) -> &'static str {
        "Console"
    }
}

pub struct Application {
    loggers: Vec<Box<dyn Logger>>,
}

impl Application {
    pub fn new(loggers: Vec<Box<dyn Logger>>) -> Self {
        Application { loggers }
    }

    pub fn from_profile(profile: LoggerProfile) -> Self {
        Self::new(profile.loggers())
    }

    pub fn sinks(&self) -> Vec<&'static str> {
        self.loggers.iter().map(|logger| logger.sink()).collect()
    }

    /// Logs the processed user through every logger in order.
    ///
    /// Returns how many loggers were invoked. The first logger that fails
    /// aborts the fan-out and its error is returned as is.
    pub fn process_user(&self, out: &mut dyn Write, username: &str) -> Result<usize> {
        let message = format!("User processed: {username}");
        debug!(username, loggers = self.loggers.len(), "processing user");

        for logger in &self.loggers {
            trace!(sink = logger.sink(), "dispatching log line");
            logger.log(out, &message)?;
        }
        Ok(self.loggers.len())
    }
}

/// Ready-made logger sets for common environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggerProfile {
    Production,
    Development,
    Alert,
    Test,
}

impl LoggerProfile {
    pub fn loggers(self) -> Vec<Box<dyn Logger>> {
        match self {
            LoggerProfile::Production => {
                vec![Box::new(FileLog), Box::new(DbLog), Box::new(ConsoleLog)]
            }
            LoggerProfile::Development => vec![Box::new(ConsoleLog), Box::new(FileLog)],
            LoggerProfile::Alert => vec![Box::new(FileLog)],
            LoggerProfile::Test => vec![Box::new(ConsoleLog)],
        }
    }
}

// ============================================================================
// Before: the application owns concrete loggers
// ============================================================================

pub struct FileLogger;

impl FileLogger {
    pub fn log_to_file(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "Writing to file: {message}")
    }
}

pub struct DatabaseLogger;

impl DatabaseLogger {
    pub fn log_to_database(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "Saving to database: {message}")
    }
}

pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn log_to_console(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "Console output: {message}")
    }
}

/// Every new sink means another field, another parameter and another call here.
pub struct TightlyCoupledApplication {
    pub file_logger: FileLogger,
    pub database_logger: DatabaseLogger,
    pub console_logger: ConsoleLogger,
}

impl TightlyCoupledApplication {
    pub fn process_user(&self, out: &mut dyn Write, username: &str) -> Result<()> {
        self.file_logger
            .log_to_file(out, &format!("User processed: {username}"))?;
        self.database_logger
            .log_to_database(out, &format!("User activity: {username}"))?;
        self.console_logger
            .log_to_console(out, &format!("User: {username} processed successfully"))?;
        Ok(())
    }
}
