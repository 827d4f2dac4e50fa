// View capability: the surface the reconciler writes to.
//
// The real panel is a server-rendered page whose rows are tagged with a
// resource-id attribute; here the page is behind a trait so reconciliation
// can be exercised against a fake view in tests and against a logging view
// in the binary.

use crate::models::ResourceStatus;

/// Per-row display element addressed by (resource id, field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Status,
    Cpu,
    Memory,
}

/// The three aggregate gauges on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    Cpu,
    Memory,
    Disk,
}

/// Dataset handed to an externally-owned doughnut gauge on each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeData {
    /// Two slices: [used, available], summing to 100.
    pub slices: [f64; 2],
    /// Percentage text rendered in the gauge center ("37.5%").
    pub center_text: String,
}

/// Status badge color bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Danger,
    Warning,
}

impl BadgeTone {
    /// Hard three-way bucketing: running is green, stopped is red, and
    /// everything else (error, unknown, future states) is yellow.
    pub fn for_status(status: ResourceStatus) -> Self {
        match status {
            ResourceStatus::Running => BadgeTone::Success,
            ResourceStatus::Stopped => BadgeTone::Danger,
            _ => BadgeTone::Warning,
        }
    }
}

/// Row action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
    Restart,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Start, Action::Stop, Action::Restart];
}

/// Button enablement as a pure function of status: a running resource can
/// be stopped or restarted, a stopped one started, and anything in between
/// leaves every action available.
pub fn action_enabled(status: ResourceStatus, action: Action) -> bool {
    match status {
        ResourceStatus::Running => action != Action::Start,
        ResourceStatus::Stopped => action == Action::Start,
        _ => true,
    }
}

/// Mutable view the poller reconciles snapshots into.
///
/// Implementations own whatever the "page" is (test fake, log mirror);
/// the reconciler only ever sets text, classes, widths, and enablement.
pub trait StatusView {
    /// Resource ids tagged on the current page. Rows are never added or
    /// removed by reconciliation; ids absent from a snapshot keep their
    /// last rendered state.
    fn resource_ids(&self) -> Vec<String>;

    fn set_text(&mut self, id: &str, field: RowField, text: &str);

    fn set_badge(&mut self, id: &str, tone: BadgeTone);

    /// Progress-bar width in percent, already clamped to [0, 100].
    fn set_bar_width(&mut self, id: &str, field: RowField, percent: f64);

    fn set_action_enabled(&mut self, id: &str, action: Action, enabled: bool);

    fn set_gauge(&mut self, gauge: Gauge, data: GaugeData);
}
