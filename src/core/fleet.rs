use std::cmp::Ordering;

use crate::domain::model::{Vessel, MAX_FLEET_SIZE};
use crate::utils::error::{BoatyardError, Result};

/// The in-memory fleet: an owned collection kept in ascending
/// case-insensitive name order after every mutation.
#[derive(Debug)]
pub struct Fleet {
    vessels: Vec<Vessel>,
    capacity: usize,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    pub fn new() -> Self {
        Self::with_capacity(MAX_FLEET_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vessels: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Sorted read-only view of the fleet.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Adds a vessel and re-sorts. Duplicate names are not rejected; lookup
    /// and removal operate on the first match.
    pub fn insert(&mut self, vessel: Vessel) -> Result<()> {
        if self.vessels.len() >= self.capacity {
            return Err(BoatyardError::CapacityExceeded(self.capacity));
        }
        self.vessels.push(vessel);
        self.sort();
        Ok(())
    }

    /// Removes the first vessel whose name matches case-insensitively,
    /// keeping the rest in order.
    pub fn remove(&mut self, name: &str) -> Result<Vessel> {
        let index = self
            .position(name)
            .ok_or_else(|| BoatyardError::NotFound(name.to_string()))?;
        Ok(self.vessels.remove(index))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.vessels
            .iter()
            .position(|vessel| vessel.name.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Option<&Vessel> {
        self.position(name).map(|index| &self.vessels[index])
    }

    // Mutable access stays crate-internal: handing out &mut Vessel publicly
    // would let callers rename entries and break the ordering invariant.
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Vessel> {
        self.position(name).map(|index| &mut self.vessels[index])
    }

    pub(crate) fn vessels_mut(&mut self) -> impl Iterator<Item = &mut Vessel> {
        self.vessels.iter_mut()
    }

    fn sort(&mut self) {
        self.vessels
            .sort_by(|a, b| name_key_cmp(&a.name, &b.name));
    }
}

// Byte-wise ASCII case folding, the same ordering `strcasecmp` gives.
fn name_key_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}
