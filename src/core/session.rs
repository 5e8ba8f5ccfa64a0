use crate::config::LeadConfig;
use crate::core::export::encode_leads;
use crate::core::sample::sample_leads;
use crate::core::stats::LeadStats;
use crate::domain::model::{CategoryBreakdown, Lead};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The session held no leads; nothing was written.
    NothingToExport,
    Written { path: PathBuf, count: usize },
}

/// In-memory batch of leads for one run.
///
/// The storage is rooted at the configured export directory; the session
/// only chooses the filename.
pub struct LeadSession<S: Storage> {
    config: LeadConfig,
    storage: S,
    leads: Vec<Lead>,
}

impl<S: Storage> LeadSession<S> {
    pub fn new(config: LeadConfig, storage: S) -> Self {
        Self {
            config,
            storage,
            leads: Vec::new(),
        }
    }

    pub fn config(&self) -> &LeadConfig {
        &self.config
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn state(&self) -> SessionState {
        if self.leads.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Populated
        }
    }

    /// Replaces the held leads with the fixed sample batch.
    pub fn populate(&mut self) -> usize {
        self.leads = sample_leads();
        tracing::debug!("Loaded {} sample leads", self.leads.len());
        self.leads.len()
    }

    /// Populates only when nothing is held. Returns whether samples were
    /// loaded.
    pub fn ensure_populated(&mut self) -> bool {
        if self.leads.is_empty() {
            self.populate();
            true
        } else {
            false
        }
    }

    pub fn summarize(&self) -> CategoryBreakdown {
        CategoryBreakdown::from_leads(&self.leads)
    }

    pub fn statistics(&self) -> Option<LeadStats> {
        LeadStats::compute(&self.leads)
    }

    pub fn export(&self) -> Result<ExportOutcome> {
        if self.leads.is_empty() {
            tracing::warn!("Export requested with no leads loaded");
            return Ok(ExportOutcome::NothingToExport);
        }

        let filename = self.config.export_filename();
        let data = encode_leads(&self.leads)?;
        tracing::debug!("Encoded {} leads ({} bytes)", self.leads.len(), data.len());

        self.storage.write_file(&filename, &data)?;

        let path = self.config.export_path();
        tracing::info!("Exported {} leads to {}", self.leads.len(), path.display());
        Ok(ExportOutcome::Written {
            path,
            count: self.leads.len(),
        })
    }

    /// Drops every held lead. Returns how many were dropped.
    pub fn reset(&mut self) -> usize {
        let cleared = self.leads.len();
        self.leads.clear();
        tracing::debug!("Cleared {} leads", cleared);
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::decode_leads;
    use crate::utils::error::LeadError;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }

        fn file_count(&self) -> usize {
            self.files.lock().unwrap().len()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                LeadError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn read_file(&self, _path: &str) -> Result<Vec<u8>> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn test_config() -> LeadConfig {
        LeadConfig {
            run_date: NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
            ..LeadConfig::default()
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = LeadSession::new(test_config(), MockStorage::default());
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.summarize(), CategoryBreakdown::default());
        assert!(session.statistics().is_none());
    }

    #[test]
    fn test_populate_loads_five_samples() {
        let mut session = LeadSession::new(test_config(), MockStorage::default());
        assert_eq!(session.populate(), 5);
        assert_eq!(session.state(), SessionState::Populated);
        assert_eq!(
            session.summarize(),
            CategoryBreakdown {
                hot: 3,
                warm: 1,
                cold: 1
            }
        );
    }

    #[test]
    fn test_populate_replaces_rather_than_appends() {
        let mut session = LeadSession::new(test_config(), MockStorage::default());
        session.populate();
        session.populate();
        assert_eq!(session.leads().len(), 5);
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut session = LeadSession::new(test_config(), MockStorage::default());
        session.populate();
        assert_eq!(session.reset(), 5);
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.summarize(), CategoryBreakdown::default());
        assert_eq!(session.reset(), 0);
    }

    #[test]
    fn test_ensure_populated_only_loads_when_empty() {
        let mut session = LeadSession::new(test_config(), MockStorage::default());
        assert!(session.ensure_populated());
        assert!(!session.ensure_populated());
        assert_eq!(session.leads().len(), 5);
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let storage = MockStorage::default();
        let session = LeadSession::new(test_config(), storage.clone());

        let outcome = session.export().unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert_eq!(storage.file_count(), 0);
    }

    #[test]
    fn test_export_writes_dated_csv() {
        let storage = MockStorage::default();
        let mut session = LeadSession::new(test_config(), storage.clone());
        session.populate();

        let outcome = session.export().unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: PathBuf::from("exports").join("handyman_leads_20260218.csv"),
                count: 5,
            }
        );
        let data = storage.get_file("handyman_leads_20260218.csv").unwrap();
        assert_eq!(decode_leads(data.as_slice()).unwrap(), session.leads());
    }

    #[test]
    fn test_export_storage_failure_propagates() {
        let mut session = LeadSession::new(test_config(), FailingStorage);
        session.populate();

        let err = session.export().unwrap_err();
        assert!(matches!(err, LeadError::IoError(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_statistics_is_a_pure_read() {
        let session = LeadSession::new(test_config(), MockStorage::default());
        assert!(session.statistics().is_none());
        assert_eq!(session.state(), SessionState::Empty);
    }
}
