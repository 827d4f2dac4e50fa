// Per-container entries of the stats snapshot

use serde::{Deserialize, Serialize};

/// Container/service status; serializes to lowercase JSON (e.g. "running").
/// Anything the server sends outside the known set parses as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Running,
    Stopped,
    Error,
    #[serde(other)]
    Unknown,
}

impl ResourceStatus {
    /// Lowercase wire spelling, used verbatim as the status text in the view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Running => "running",
            ResourceStatus::Stopped => "stopped",
            ResourceStatus::Error => "error",
            ResourceStatus::Unknown => "unknown",
        }
    }
}

/// One entry of `container_stats`, keyed by resource id.
///
/// Every field is optional: a snapshot with a missing field means "leave
/// that display element alone", not a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContainerStats {
    #[serde(default)]
    pub status: Option<ResourceStatus>,
    #[serde(default)]
    pub cpu_percent: Option<f64>,
    #[serde(default)]
    pub memory_used: Option<u64>,
    #[serde(default)]
    pub memory_limit: Option<u64>,
}
