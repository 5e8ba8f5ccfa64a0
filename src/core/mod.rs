pub mod export;
pub mod sample;
pub mod session;
pub mod stats;

pub use crate::domain::model::{CategoryBreakdown, Lead, LeadCategory};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
