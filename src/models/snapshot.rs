// Full response body of GET /dashboard/stats

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ContainerStats, ResourceUsage};

/// One immutable point-in-time response from the stats endpoint.
/// Superseded wholesale by the next poll; never diffed incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub container_stats: HashMap<String, ContainerStats>,
    #[serde(default)]
    pub resources: ResourceUsage,
}
