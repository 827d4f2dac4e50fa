// Aggregate resource usage (the dashboard gauges)

use serde::{Deserialize, Serialize};

/// Numeric usage/limit pair driving a percentage gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsagePair {
    pub used: f64,
    pub limit: f64,
}

/// Aggregate usage for the dashboard view. A gauge whose pair is absent
/// from the response is simply not updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceUsage {
    #[serde(default)]
    pub cpu: Option<UsagePair>,
    #[serde(default)]
    pub memory: Option<UsagePair>,
    #[serde(default)]
    pub disk: Option<UsagePair>,
}
