// Wire models for the dashboard stats endpoint

mod container;
mod resources;
mod snapshot;

pub use container::{ContainerStats, ResourceStatus};
pub use resources::{ResourceUsage, UsagePair};
pub use snapshot::DashboardSnapshot;
