pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::LocalStorage;
pub use crate::app::{run, Command};
pub use crate::config::LeadConfig;
pub use crate::core::session::{ExportOutcome, LeadSession, SessionState};
pub use crate::core::stats::LeadStats;
pub use crate::domain::model::{CategoryBreakdown, Lead, LeadCategory};
pub use crate::utils::error::{LeadError, Result};
