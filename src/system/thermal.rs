use serde::{Deserialize, Serialize};

/// Coarse thermal-pressure bucket reported by the OS.
///
/// Raw level codes follow the Darwin convention (0 = nominal through
/// 3 = critical). Platforms without a native level translate into the same
/// scale in `platform`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermalState {
    Nominal,
    Fair,
    Serious,
    Critical,
    #[serde(rename = "UNKNOWN THERMAL STATE")]
    Unknown,
}

impl ThermalState {
    pub fn from_raw(level: i64) -> Self {
        match level {
            0 => ThermalState::Nominal,
            1 => ThermalState::Fair,
            2 => ThermalState::Serious,
            3 => ThermalState::Critical,
            _ => ThermalState::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThermalState::Nominal => "nominal",
            ThermalState::Fair => "fair",
            ThermalState::Serious => "serious",
            ThermalState::Critical => "critical",
            ThermalState::Unknown => "UNKNOWN THERMAL STATE",
        }
    }
}

impl std::fmt::Display for ThermalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_map_to_labels() {
        assert_eq!(ThermalState::from_raw(0).as_str(), "nominal");
        assert_eq!(ThermalState::from_raw(1).as_str(), "fair");
        assert_eq!(ThermalState::from_raw(2).as_str(), "serious");
        assert_eq!(ThermalState::from_raw(3).as_str(), "critical");
    }

    #[test]
    fn unrecognized_levels_are_unknown() {
        for raw in [-1, 4, 42, i64::MIN, i64::MAX] {
            assert_eq!(ThermalState::from_raw(raw), ThermalState::Unknown);
        }
        assert_eq!(ThermalState::Unknown.as_str(), "UNKNOWN THERMAL STATE");
    }

    #[test]
    fn serde_uses_the_display_labels() {
        for state in [
            ThermalState::Nominal,
            ThermalState::Fair,
            ThermalState::Serious,
            ThermalState::Critical,
            ThermalState::Unknown,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
            let back: ThermalState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }
}
