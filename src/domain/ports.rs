use crate::utils::error::Result;

/// Byte storage addressed by paths relative to the storage root.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
