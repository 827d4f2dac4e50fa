// Snapshot-to-view reconciliation: overwrite, never diff.

use crate::format::{clamp_percent, format_bytes, format_percent, gauge_dataset, usage_percent};
use crate::models::{ContainerStats, DashboardSnapshot, ResourceUsage, UsagePair};
use crate::view::{Action, BadgeTone, Gauge, GaugeData, RowField, StatusView, action_enabled};

/// Decimal places for human-readable memory sizes.
const BYTE_DECIMALS: usize = 2;

/// Reconcile one snapshot into the view.
///
/// Every id the view reports is looked up in `container_stats` by exact
/// match; ids with no entry keep their previously rendered state. When
/// `update_gauges` is set the aggregate resource gauges are refreshed too
/// (dashboard poller); list-view pollers leave them alone.
pub fn apply_snapshot<V: StatusView + ?Sized>(
    view: &mut V,
    snapshot: &DashboardSnapshot,
    update_gauges: bool,
) {
    for id in view.resource_ids() {
        if let Some(stats) = snapshot.container_stats.get(&id) {
            reconcile_row(view, &id, stats);
        }
    }
    if update_gauges {
        reconcile_resources(view, &snapshot.resources);
    }
}

/// Overwrite one row's display elements from a snapshot entry.
/// Fields missing from the entry are skipped individually, so a partial
/// entry updates what it carries and touches nothing else.
fn reconcile_row<V: StatusView + ?Sized>(view: &mut V, id: &str, stats: &ContainerStats) {
    if let Some(status) = stats.status {
        view.set_text(id, RowField::Status, status.as_str());
        view.set_badge(id, BadgeTone::for_status(status));
        for action in Action::ALL {
            view.set_action_enabled(id, action, action_enabled(status, action));
        }
    }

    if let Some(cpu) = stats.cpu_percent {
        view.set_text(id, RowField::Cpu, &format_percent(cpu));
        view.set_bar_width(id, RowField::Cpu, clamp_percent(cpu));
    }

    if let Some(used) = stats.memory_used {
        view.set_text(id, RowField::Memory, &format_bytes(used, BYTE_DECIMALS));
        if let Some(limit) = stats.memory_limit {
            view.set_bar_width(
                id,
                RowField::Memory,
                usage_percent(used as f64, limit as f64),
            );
        }
    }
}

/// Refresh the dashboard gauges from the aggregate usage block.
fn reconcile_resources<V: StatusView + ?Sized>(view: &mut V, resources: &ResourceUsage) {
    for (gauge, pair) in [
        (Gauge::Cpu, resources.cpu),
        (Gauge::Memory, resources.memory),
        (Gauge::Disk, resources.disk),
    ] {
        if let Some(UsagePair { used, limit }) = pair {
            let percent = usage_percent(used, limit);
            view.set_gauge(
                gauge,
                GaugeData {
                    slices: gauge_dataset(percent),
                    center_text: format_percent(percent),
                },
            );
        }
    }
}
