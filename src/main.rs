use anyhow::Result;
use panelwatch::config::AppConfig;
use panelwatch::poller::{Poller, PollerConfig};
use panelwatch::stats_client::{HttpStatsClient, SnapshotSource};
use panelwatch::view::{Action, BadgeTone, Gauge, GaugeData, RowField, StatusView};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Headless view that mirrors panel rows into the log, reporting only
/// changes so steady-state polling stays quiet.
struct LogView {
    ids: Vec<String>,
    text: HashMap<(String, RowField), String>,
    badges: HashMap<String, BadgeTone>,
    widths: HashMap<(String, RowField), f64>,
    actions: HashMap<(String, Action), bool>,
    gauges: HashMap<Gauge, GaugeData>,
}

impl LogView {
    fn new(ids: Vec<String>) -> Self {
        Self {
            ids,
            text: HashMap::new(),
            badges: HashMap::new(),
            widths: HashMap::new(),
            actions: HashMap::new(),
            gauges: HashMap::new(),
        }
    }
}

impl StatusView for LogView {
    fn resource_ids(&self) -> Vec<String> {
        self.ids.clone()
    }

    fn set_text(&mut self, id: &str, field: RowField, text: &str) {
        let key = (id.to_string(), field);
        if self.text.get(&key).map(String::as_str) != Some(text) {
            tracing::info!(resource = id, field = ?field, value = text, "row updated");
            self.text.insert(key, text.to_string());
        }
    }

    fn set_badge(&mut self, id: &str, tone: BadgeTone) {
        if self.badges.get(id) != Some(&tone) {
            tracing::info!(resource = id, tone = ?tone, "badge updated");
            self.badges.insert(id.to_string(), tone);
        }
    }

    fn set_bar_width(&mut self, id: &str, field: RowField, percent: f64) {
        self.widths.insert((id.to_string(), field), percent);
    }

    fn set_action_enabled(&mut self, id: &str, action: Action, enabled: bool) {
        let key = (id.to_string(), action);
        if self.actions.get(&key) != Some(&enabled) {
            tracing::debug!(resource = id, action = ?action, enabled, "action toggled");
            self.actions.insert(key, enabled);
        }
    }

    fn set_gauge(&mut self, gauge: Gauge, data: GaugeData) {
        if self.gauges.get(&gauge).map(|g| &g.center_text) != Some(&data.center_text) {
            tracing::info!(gauge = ?gauge, percent = %data.center_text, "gauge updated");
        }
        self.gauges.insert(gauge, data);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = AppConfig::load()?;
    let client = Arc::new(HttpStatsClient::new(
        &app_config.panel.base_url,
        Duration::from_secs(app_config.panel.request_timeout_secs),
    )?);
    tracing::info!(url = client.stats_url(), "watching panel stats");

    // Discovery fetch: a rendered page gets its rows from the server; a
    // headless mirror seeds them from the first snapshot instead.
    let ids = match client.fetch_snapshot().await {
        Ok(snapshot) => {
            let mut ids: Vec<String> = snapshot.container_stats.keys().cloned().collect();
            ids.sort();
            ids
        }
        Err(e) => {
            tracing::warn!(error = %e, "initial snapshot failed; starting with no rows");
            Vec::new()
        }
    };
    tracing::info!(rows = ids.len(), "seeded resource rows");

    let view = Arc::new(Mutex::new(LogView::new(ids)));

    let dashboard_poller = Poller::new(
        client.clone(),
        view.clone(),
        PollerConfig {
            interval: Duration::from_secs(app_config.polling.dashboard_interval_secs),
            update_gauges: true,
        },
    );
    let list_poller = Poller::new(
        client,
        view,
        PollerConfig {
            interval: Duration::from_secs(app_config.polling.resource_interval_secs),
            update_gauges: false,
        },
    );
    dashboard_poller.start();
    list_poller.start();

    #[cfg(unix)]
    {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable; ctrl-c only");
                tokio::signal::ctrl_c().await?;
                shutdown(&dashboard_poller, &list_poller).await;
                return Ok(());
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Received shutdown signal");
    shutdown(&dashboard_poller, &list_poller).await;
    Ok(())
}

async fn shutdown(
    dashboard_poller: &Poller<HttpStatsClient, LogView>,
    list_poller: &Poller<HttpStatsClient, LogView>,
) {
    dashboard_poller.stop().await;
    list_poller.stop().await;
}
