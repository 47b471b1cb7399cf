use std::fs;

use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Storage backend over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data)?;
        Ok(())
    }
}
