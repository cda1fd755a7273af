use std::ffi::{CStr, CString, c_char, c_int};
use std::process::Command;

use super::{AppEnvironment, PlatformExtensions, THERMAL_LEVEL_UNAVAILABLE};

pub struct Platform;

const THERMAL_PRESSURE_KEY: &CStr = c"com.apple.system.thermalpressurelevel";
const NOTIFY_STATUS_OK: u32 = 0;

// notify(3), part of libSystem
unsafe extern "C" {
    fn notify_register_check(name: *const c_char, out_token: *mut c_int) -> u32;
    fn notify_get_state(token: c_int, state64: *mut u64) -> u32;
    fn notify_cancel(token: c_int) -> u32;
}

impl PlatformExtensions for Platform {
    fn effective_uid() -> Option<u32> {
        Some(unsafe { libc::geteuid() })
    }

    fn full_user_name(login: &str) -> Option<String> {
        let login = CString::new(login).ok()?;
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut buf = vec![0 as c_char; 4096];
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe {
            libc::getpwnam_r(
                login.as_ptr(),
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc != 0 || result.is_null() || pwd.pw_gecos.is_null() {
            return None;
        }
        // pw_gecos points into `buf`, which is still alive here
        let gecos = unsafe { CStr::from_ptr(pwd.pw_gecos) }.to_string_lossy();
        let name = gecos.split(',').next().unwrap_or("").trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn uptime_seconds() -> Option<f64> {
        // CLOCK_UPTIME_RAW stops while asleep, matching the system uptime
        // Foundation reports.
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_UPTIME_RAW, &mut ts) };
        if rc != 0 {
            return None;
        }
        Some(ts.tv_sec as f64 + ts.tv_nsec as f64 / 1e9)
    }

    fn thermal_level() -> i64 {
        let mut token: c_int = 0;
        let status = unsafe { notify_register_check(THERMAL_PRESSURE_KEY.as_ptr(), &mut token) };
        if status != NOTIFY_STATUS_OK {
            return THERMAL_LEVEL_UNAVAILABLE;
        }
        let mut state: u64 = 0;
        let status = unsafe { notify_get_state(token, &mut state) };
        unsafe { notify_cancel(token) };
        if status != NOTIFY_STATUS_OK {
            return THERMAL_LEVEL_UNAVAILABLE;
        }
        pressure_to_level(state)
    }

    fn low_power_mode() -> bool {
        match Command::new("pmset").arg("-g").output() {
            Ok(output) if output.status.success() => {
                pmset_low_power(&String::from_utf8_lossy(&output.stdout))
            }
            _ => false,
        }
    }

    fn app_environment() -> AppEnvironment {
        // Native command-line binaries: not Catalyst, not an iOS app, and
        // never opted into automatic termination through an Info.plist.
        AppEnvironment::default()
    }
}

/// OSThermalPressureLevel onto the 0..=3 scale. Trapping (3) and
/// sleeping (4) both count as critical.
fn pressure_to_level(pressure: u64) -> i64 {
    match pressure {
        0..=2 => pressure as i64,
        3 | 4 => 3,
        other => i64::try_from(other).unwrap_or(THERMAL_LEVEL_UNAVAILABLE),
    }
}

fn pmset_low_power(output: &str) -> bool {
    output.lines().any(|line| {
        let mut parts = line.split_whitespace();
        matches!(
            (parts.next(), parts.next()),
            (Some("lowpowermode" | "powermode"), Some("1"))
        )
    })
}
