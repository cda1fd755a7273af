use std::ffi::OsStr;
use std::path::Path;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};
use uuid::Uuid;

use super::platform;
use super::snapshot::{ProcessSnapshot, SnapshotSource};
use super::thermal::ThermalState;
use crate::error::{Error, Result};

/// Reads the live OS state of the current process and host.
#[derive(Clone, Copy, Debug, Default)]
pub struct Collector;

impl Collector {
    pub fn new() -> Self {
        Collector
    }
}

impl SnapshotSource for Collector {
    fn read(&self) -> Result<ProcessSnapshot> {
        #[cfg(feature = "perf-tracing")]
        let _read_span = tracing::debug_span!("collector.read").entered();

        let pid = sysinfo::get_current_pid()
            .map_err(|e| Error::SnapshotUnavailable(format!("current pid: {e}")))?;
        let process_identifier = i32::try_from(pid.as_u32()).map_err(|_| {
            Error::SnapshotUnavailable(format!("pid {} does not fit in i32", pid.as_u32()))
        })?;

        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing()
                .with_user(UpdateKind::OnlyIfNotSet)
                .with_exe(UpdateKind::OnlyIfNotSet)
                .with_cmd(UpdateKind::OnlyIfNotSet),
        );

        let (process_name, user_name) = process_identity(&sys, pid)?;
        let full_user_name =
            platform::full_user_name(&user_name).unwrap_or_else(|| user_name.clone());

        let host_name = System::host_name().unwrap_or_default();
        let operating_system_version_string = System::long_os_version()
            .or_else(System::os_version)
            .unwrap_or_else(|| std::env::consts::OS.to_string());

        let processor_count = sys.cpus().len();
        let active_processor_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(processor_count);

        let env = platform::app_environment();

        Ok(ProcessSnapshot {
            id: Uuid::new_v4().to_string(),
            is_running_under_compatibility_layer: env.compatibility_layer,
            is_mobile_app_on_desktop: env.mobile_app_on_desktop,
            process_identifier,
            process_name,
            user_name,
            full_user_name,
            automatic_termination_support_enabled: env.automatic_termination,
            host_name,
            operating_system_version_string,
            processor_count,
            active_processor_count,
            physical_memory: sys.total_memory(),
            system_uptime_seconds: platform::uptime_seconds()
                .unwrap_or_else(|| System::uptime() as f64),
            is_low_power_mode_enabled: platform::low_power_mode(),
            thermal_state: ThermalState::from_raw(platform::thermal_level()),
        })
    }
}

/// Process name and effective login name of `pid`.
fn process_identity(sys: &System, pid: Pid) -> Result<(String, String)> {
    let process = sys.process(pid).ok_or_else(|| {
        Error::SnapshotUnavailable(format!("process {pid} is not visible in the process table"))
    })?;
    let name = executable_name(
        process.exe(),
        process.cmd().first().map(|arg| arg.as_os_str()),
        process.name(),
    );

    let users = Users::new_with_refreshed_list();
    let account = process
        .effective_user_id()
        .or_else(|| process.user_id())
        .and_then(|uid| users.get_user_by_id(uid))
        .map(|user| user.name());
    let user_name = login_name(account, platform::effective_uid()).ok_or_else(|| {
        Error::SnapshotUnavailable(format!("no effective user for process {pid}"))
    })?;

    Ok((name, user_name))
}

/// File name of the executable. The kernel's `comm` name is truncated on
/// Linux, so it only backs up the executable path and `argv[0]`.
fn executable_name(exe: Option<&Path>, argv0: Option<&OsStr>, comm: &OsStr) -> String {
    exe.and_then(Path::file_name)
        .or_else(|| argv0.and_then(|arg| Path::new(arg).file_name()))
        .unwrap_or(comm)
        .to_string_lossy()
        .to_string()
}

/// Account name, or the numeric uid for users without an account entry.
fn login_name(account: Option<&str>, uid: Option<u32>) -> Option<String> {
    account
        .map(str::to_string)
        .or_else(|| uid.map(|uid| uid.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_current_process() {
        let snap = Collector::new().read().expect("live snapshot");
        assert_eq!(snap.process_identifier as u32, std::process::id());
        assert!(!snap.process_name.is_empty());
        assert!(!snap.user_name.is_empty());
        assert!(!snap.full_user_name.is_empty());
        assert!(snap.processor_count > 0);
        assert!(snap.active_processor_count > 0);
        assert!(snap.physical_memory > 0);
        assert!(snap.system_uptime_seconds >= 0.0);
    }

    #[test]
    fn process_name_is_the_full_executable_name() {
        let exe = std::env::current_exe().unwrap();
        let expected = exe.file_name().unwrap().to_string_lossy().to_string();
        let snap = Collector::new().read().unwrap();
        assert_eq!(snap.process_name, expected);
    }

    #[test]
    fn executable_name_prefers_exe_then_argv0() {
        let comm = OsStr::new("procsnap_with_a");
        let exe = Path::new("/tmp/procsnap_with_a_long_executable_name");
        assert_eq!(
            executable_name(Some(exe), Some(OsStr::new("ignored")), comm),
            "procsnap_with_a_long_executable_name"
        );
        assert_eq!(
            executable_name(None, Some(OsStr::new("./bin/procsnap_with_a_long_name")), comm),
            "procsnap_with_a_long_name"
        );
        assert_eq!(executable_name(None, None, comm), "procsnap_with_a");
        assert_eq!(executable_name(Some(Path::new("/")), None, comm), "procsnap_with_a");
    }

    #[test]
    fn login_name_without_account_uses_uid() {
        assert_eq!(login_name(None, Some(12345)).as_deref(), Some("12345"));
        assert_eq!(login_name(Some("alice"), Some(1000)).as_deref(), Some("alice"));
        assert_eq!(login_name(None, None), None);
    }

    #[test]
    fn each_read_gets_a_fresh_id() {
        let collector = Collector::new();
        let a = collector.read().unwrap();
        let b = collector.read().unwrap();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
