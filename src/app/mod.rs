pub mod report;
pub mod runner;

pub use runner::{run, Command};
