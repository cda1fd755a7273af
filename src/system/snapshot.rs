use serde::{Deserialize, Serialize};

use super::thermal::ThermalState;
use crate::error::Result;

/// One read of process, user and machine attributes.
///
/// Field order is the key order of the emitted JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSnapshot {
    pub id: String,
    pub is_running_under_compatibility_layer: bool,
    pub is_mobile_app_on_desktop: bool,
    pub process_identifier: i32,
    pub process_name: String,
    pub user_name: String,
    pub full_user_name: String,
    pub automatic_termination_support_enabled: bool,
    pub host_name: String,
    pub operating_system_version_string: String,
    pub processor_count: usize,
    pub active_processor_count: usize,
    pub physical_memory: u64,
    pub system_uptime_seconds: f64,
    pub is_low_power_mode_enabled: bool,
    pub thermal_state: ThermalState,
}

/// Anything that can produce a [`ProcessSnapshot`].
pub trait SnapshotSource {
    fn read(&self) -> Result<ProcessSnapshot>;
}
