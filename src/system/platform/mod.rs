/// Launch-environment flags the OS attaches to a process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppEnvironment {
    pub compatibility_layer: bool,
    pub mobile_app_on_desktop: bool,
    pub automatic_termination: bool,
}

/// Raw level reported when the OS exposes no thermal information.
pub const THERMAL_LEVEL_UNAVAILABLE: i64 = -1;

pub trait PlatformExtensions {
    fn effective_uid() -> Option<u32>;
    fn full_user_name(login: &str) -> Option<String>;
    fn uptime_seconds() -> Option<f64>;
    fn thermal_level() -> i64;
    fn low_power_mode() -> bool;
    fn app_environment() -> AppEnvironment;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod fallback;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
use fallback as platform_impl;

pub fn effective_uid() -> Option<u32> {
    platform_impl::Platform::effective_uid()
}

pub fn full_user_name(login: &str) -> Option<String> {
    platform_impl::Platform::full_user_name(login)
}

pub fn uptime_seconds() -> Option<f64> {
    platform_impl::Platform::uptime_seconds()
}

pub fn thermal_level() -> i64 {
    platform_impl::Platform::thermal_level()
}

pub fn low_power_mode() -> bool {
    platform_impl::Platform::low_power_mode()
}

pub fn app_environment() -> AppEnvironment {
    platform_impl::Platform::app_environment()
}
