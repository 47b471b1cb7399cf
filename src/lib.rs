//! Marina vessel inventory kept in a flat comma-delimited file: load at
//! startup, list/add/remove/bill/pay interactively, write back on exit.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{repository::FleetRepository, storage::LocalStorage};
pub use crate::config::CliConfig;
pub use crate::core::{billing, codec, fleet::Fleet};
pub use crate::domain::model::{Location, LocationCategory, Vessel};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::{BoatyardError, Result};
