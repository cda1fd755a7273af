pub mod error;
pub mod report;
pub mod system;

pub use error::{Error, Result};
pub use system::collector::Collector;
pub use system::snapshot::{ProcessSnapshot, SnapshotSource};
pub use system::thermal::ThermalState;
