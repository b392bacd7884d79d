//! # Design Principles and Classic Patterns
//!
//! Every module has a matching demo binary. [`dip`], [`ocp`], [`lsp`],
//! [`decorator`] and [`observer`] also keep the "before" shape next to the
//! fix (a `legacy` module or a hardwired type). [`isp`] and [`builder`] show
//! only the fixed form: misusing them is a compile error.
//!
//! ## Principles
//! - [`dip`]: Dependency inversion with pluggable loggers
//! - [`ocp`]: Open/closed discounts, shapes and exporters
//! - [`lsp`]: Liskov substitution with vehicles that may lack an engine
//! - [`isp`]: Interface segregation for workers
//!
//! ## Patterns
//! - [`decorator`]: Coffee priced through a chain of toppings
//! - [`observer`]: Weather station broadcasting to displays
//! - [`builder`]: Users and people with mandatory and optional fields
//!
//! [`config`] describes coffee orders and logger profiles as TOML or JSON.
//!
//! Run demos with: `cargo run --bin <name>`

pub mod builder;
pub mod config;
pub mod decorator;
pub mod dip;
pub mod error;
pub mod isp;
pub mod lsp;
pub mod observer;
pub mod ocp;
mod telemetry;

pub use error::{DesignError, Result};
pub use telemetry::init_tracing;
