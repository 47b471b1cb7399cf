pub mod billing;
pub mod codec;
pub mod fleet;

pub use crate::domain::model::{Location, LocationCategory, Vessel};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
