// Shared test doubles: an in-memory view and scripted snapshot sources.
#![allow(dead_code)] // not every test binary uses every helper

use panelwatch::models::{ContainerStats, DashboardSnapshot, ResourceStatus};
use panelwatch::stats_client::{ClientError, SnapshotSource};
use panelwatch::view::{Action, BadgeTone, Gauge, GaugeData, RowField, StatusView};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Records every write the reconciler makes, keyed the way a page would
/// key its elements. Equality compares the full visible state.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeView {
    ids: Vec<String>,
    pub text: HashMap<(String, RowField), String>,
    pub badges: HashMap<String, BadgeTone>,
    pub widths: HashMap<(String, RowField), f64>,
    pub actions: HashMap<(String, Action), bool>,
    pub gauges: HashMap<Gauge, GaugeData>,
}

impl FakeView {
    pub fn with_rows(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            text: HashMap::new(),
            badges: HashMap::new(),
            widths: HashMap::new(),
            actions: HashMap::new(),
            gauges: HashMap::new(),
        }
    }

    pub fn text_of(&self, id: &str, field: RowField) -> Option<&str> {
        self.text.get(&(id.to_string(), field)).map(String::as_str)
    }

    pub fn action_of(&self, id: &str, action: Action) -> Option<bool> {
        self.actions.get(&(id.to_string(), action)).copied()
    }
}

impl StatusView for FakeView {
    fn resource_ids(&self) -> Vec<String> {
        self.ids.clone()
    }

    fn set_text(&mut self, id: &str, field: RowField, text: &str) {
        self.text.insert((id.to_string(), field), text.to_string());
    }

    fn set_badge(&mut self, id: &str, tone: BadgeTone) {
        self.badges.insert(id.to_string(), tone);
    }

    fn set_bar_width(&mut self, id: &str, field: RowField, percent: f64) {
        self.widths.insert((id.to_string(), field), percent);
    }

    fn set_action_enabled(&mut self, id: &str, action: Action, enabled: bool) {
        self.actions.insert((id.to_string(), action), enabled);
    }

    fn set_gauge(&mut self, gauge: Gauge, data: GaugeData) {
        self.gauges.insert(gauge, data);
    }
}

/// Snapshot with a single fully-populated container entry.
pub fn snapshot_with(
    id: &str,
    status: ResourceStatus,
    cpu_percent: f64,
    memory_used: u64,
    memory_limit: u64,
) -> DashboardSnapshot {
    let mut snapshot = DashboardSnapshot::default();
    snapshot.container_stats.insert(
        id.to_string(),
        ContainerStats {
            status: Some(status),
            cpu_percent: Some(cpu_percent),
            memory_used: Some(memory_used),
            memory_limit: Some(memory_limit),
        },
    );
    snapshot
}

/// Pops one scripted result per fetch; an exhausted script serves empty
/// snapshots. Counts calls so tests can assert the timer kept firing.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<DashboardSnapshot, ClientError>>>,
    pub calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<DashboardSnapshot, ClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SnapshotSource for ScriptedSource {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(DashboardSnapshot::default()))
    }
}

/// First fetch stalls before answering, later fetches answer immediately;
/// reproduces responses completing out of issue order.
pub struct DelayedFirstSource {
    pub first: DashboardSnapshot,
    pub rest: DashboardSnapshot,
    pub delay: Duration,
    calls: AtomicUsize,
}

impl DelayedFirstSource {
    pub fn new(first: DashboardSnapshot, rest: DashboardSnapshot, delay: Duration) -> Self {
        Self {
            first,
            rest,
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for DelayedFirstSource {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ClientError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(self.delay).await;
            Ok(self.first.clone())
        } else {
            Ok(self.rest.clone())
        }
    }
}
