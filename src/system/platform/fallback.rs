use super::{AppEnvironment, PlatformExtensions, THERMAL_LEVEL_UNAVAILABLE};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn effective_uid() -> Option<u32> {
        None
    }

    fn full_user_name(_login: &str) -> Option<String> {
        None
    }

    fn uptime_seconds() -> Option<f64> {
        None
    }

    fn thermal_level() -> i64 {
        THERMAL_LEVEL_UNAVAILABLE
    }

    fn low_power_mode() -> bool {
        false
    }

    fn app_environment() -> AppEnvironment {
        AppEnvironment {
            // Mac Catalyst builds are iOS binaries with the macabi ABI.
            compatibility_layer: cfg!(target_abi = "macabi"),
            ..AppEnvironment::default()
        }
    }
}
