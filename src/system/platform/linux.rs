use std::path::Path;

use super::{AppEnvironment, PlatformExtensions, THERMAL_LEVEL_UNAVAILABLE};

pub struct Platform;

const THERMAL_ROOT: &str = "/sys/class/thermal";

impl PlatformExtensions for Platform {
    fn effective_uid() -> Option<u32> {
        let contents = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_effective_uid(&contents)
    }

    fn full_user_name(login: &str) -> Option<String> {
        let contents = std::fs::read_to_string("/etc/passwd").ok()?;
        gecos_name(&contents, login)
    }

    fn uptime_seconds() -> Option<f64> {
        let contents = std::fs::read_to_string("/proc/uptime").ok()?;
        parse_uptime(&contents)
    }

    fn thermal_level() -> i64 {
        let Ok(entries) = std::fs::read_dir(THERMAL_ROOT) else {
            return THERMAL_LEVEL_UNAVAILABLE;
        };

        let mut level = None;
        for entry in entries.flatten() {
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with("thermal_zone") {
                continue;
            }
            if let Some(zone) = read_zone_level(&entry.path()) {
                level = Some(level.map_or(zone, |cur: i64| cur.max(zone)));
            }
        }
        level.unwrap_or(THERMAL_LEVEL_UNAVAILABLE)
    }

    fn low_power_mode() -> bool {
        std::fs::read_to_string("/sys/firmware/acpi/platform_profile")
            .map(|profile| is_low_power_profile(&profile))
            .unwrap_or(false)
    }

    fn app_environment() -> AppEnvironment {
        // ELF binaries have no app-format shims or idle auto-termination.
        AppEnvironment::default()
    }
}

/// Display name from the GECOS field of `login`'s passwd entry.
fn gecos_name(passwd: &str, login: &str) -> Option<String> {
    // name:password:uid:gid:gecos:home:shell
    for line in passwd.lines() {
        let fields: Vec<&str> = line.splitn(7, ':').collect();
        if fields.len() < 5 || fields[0] != login {
            continue;
        }
        let name = fields[4].split(',').next().unwrap_or("").trim();
        return if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }
    None
}

fn parse_effective_uid(status: &str) -> Option<u32> {
    // "Uid:\t<real>\t<effective>\t<saved>\t<fs>"
    let line = status.lines().find_map(|line| line.strip_prefix("Uid:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

fn parse_uptime(contents: &str) -> Option<f64> {
    // "<uptime> <idle>", both in seconds
    contents.split_whitespace().next()?.parse().ok()
}

fn read_zone_level(zone: &Path) -> Option<i64> {
    let temp = read_i64(&zone.join("temp"))?;

    let mut trips = Vec::new();
    for n in 0.. {
        let Ok(kind) = std::fs::read_to_string(zone.join(format!("trip_point_{n}_type"))) else {
            break;
        };
        if let Some(trip_temp) = read_i64(&zone.join(format!("trip_point_{n}_temp"))) {
            trips.push((kind.trim().to_string(), trip_temp));
        }
    }

    Some(zone_level(temp, &trips))
}

fn read_i64(path: &Path) -> Option<i64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

/// Map a zone temperature against its trip points onto the 0..=3 scale.
///
/// Temperatures are in millidegrees Celsius. Non-positive trip temperatures
/// mark disabled trip points.
fn zone_level(temp: i64, trips: &[(String, i64)]) -> i64 {
    trips
        .iter()
        .filter(|(_, trip_temp)| *trip_temp > 0 && temp >= *trip_temp)
        .map(|(kind, _)| match kind.as_str() {
            "critical" | "hot" => 3,
            "passive" => 2,
            "active" => 1,
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}

fn is_low_power_profile(profile: &str) -> bool {
    profile.trim() == "low-power"
}
