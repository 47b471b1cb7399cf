use crate::core::codec;
use crate::core::fleet::Fleet;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Persistence adapter: reads the whole data file into a [`Fleet`] at
/// startup and overwrites it from the fleet at shutdown.
pub struct FleetRepository<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FleetRepository<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    /// Loads the fleet. A file that cannot be opened degrades to an empty
    /// fleet with a warning; malformed lines are skipped, and loading stops
    /// once the fleet is at capacity.
    pub fn load(&self) -> Fleet {
        let mut fleet = Fleet::new();

        let data = match self.storage.read_file(&self.path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("could not open {} for reading: {err}", self.path);
                return fleet;
            }
        };

        for (index, record) in codec::reader(data.as_slice()).records().enumerate() {
            let line = index + 1;
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("{}:{line}: unreadable record: {err}", self.path);
                    continue;
                }
            };
            let vessel = match codec::decode(&record) {
                Ok(vessel) => vessel,
                Err(err) => {
                    tracing::warn!("{}:{line}: skipping record: {err}", self.path);
                    continue;
                }
            };
            if let Err(err) = fleet.insert(vessel) {
                tracing::warn!("{}:{line}: {err}; ignoring the rest of the file", self.path);
                break;
            }
        }

        tracing::info!("loaded {} vessels from {}", fleet.len(), self.path);
        fleet
    }

    /// Serializes the fleet in its sorted order and overwrites the data
    /// file. On failure the previous on-disk contents are left alone and
    /// the error is returned for the caller to report.
    pub fn save(&self, fleet: &Fleet) -> Result<()> {
        let mut contents = String::new();
        for vessel in fleet.vessels() {
            contents.push_str(&codec::serialize(vessel));
            contents.push('\n');
        }

        self.storage.write_file(&self.path, contents.as_bytes())?;
        tracing::info!("saved {} vessels to {}", fleet.len(), self.path);
        Ok(())
    }
}
