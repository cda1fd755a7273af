use procsnap::report;
use procsnap::{Collector, SnapshotSource};
use serde_json::Value;

const THERMAL_LABELS: [&str; 5] = [
    "nominal",
    "fair",
    "serious",
    "critical",
    "UNKNOWN THERMAL STATE",
];

#[test]
fn two_reads_agree_on_identity() {
    let collector = Collector::new();
    let first = collector.read().expect("first read");
    let second = collector.read().expect("second read");

    assert_eq!(first.process_identifier, second.process_identifier);
    assert_eq!(first.process_name, second.process_name);
    assert_eq!(first.host_name, second.host_name);
    assert_eq!(first.user_name, second.user_name);

    let exe = std::env::current_exe().unwrap();
    assert_eq!(
        first.process_name,
        exe.file_name().unwrap().to_string_lossy()
    );

    // Both still encode.
    report::encode(&first).unwrap();
    report::encode(&second).unwrap();
}

#[test]
fn live_report_has_expected_shape() {
    let mut out = Vec::new();
    report::report(&Collector::new(), &mut out).expect("live report");

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('\n').count(), 1);
    assert!(text.ends_with('\n'));

    let value: Value = serde_json::from_str(text.trim_end()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 16);

    for key in [
        "isRunningUnderCompatibilityLayer",
        "isMobileAppOnDesktop",
        "automaticTerminationSupportEnabled",
        "isLowPowerModeEnabled",
    ] {
        assert!(object[key].is_boolean(), "{key} is not a bool");
    }
    for key in [
        "id",
        "processName",
        "userName",
        "fullUserName",
        "hostName",
        "operatingSystemVersionString",
    ] {
        assert!(object[key].is_string(), "{key} is not a string");
    }

    let pid = object["processIdentifier"].as_i64().unwrap();
    assert_eq!(pid, i64::from(std::process::id()));
    assert!(object["processorCount"].as_u64().unwrap() > 0);
    assert!(object["activeProcessorCount"].as_u64().unwrap() > 0);
    assert!(object["physicalMemory"].is_u64());
    assert!(object["systemUptimeSeconds"].is_number());

    let thermal = object["thermalState"].as_str().unwrap();
    assert!(THERMAL_LABELS.contains(&thermal), "unexpected label {thermal}");
}
