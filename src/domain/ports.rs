use crate::utils::error::Result;

/// Whole-file storage backend. The program touches storage exactly twice,
/// at startup and at shutdown, so the interface is a byte-level read and
/// overwrite rather than anything streaming.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
