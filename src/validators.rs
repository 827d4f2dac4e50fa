// Named form validators, consolidated from the panel's per-form checks.
// Peripheral to the poller; kept small on purpose.

use cron::Schedule;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Alphanumeric and underscore only, must start with a letter.
/// Shared by database names and database usernames.
static SQL_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").expect("valid regex"));

static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("valid regex")
});

pub fn is_valid_database_name(name: &str) -> bool {
    SQL_IDENTIFIER.is_match(name)
}

pub fn is_valid_database_username(username: &str) -> bool {
    SQL_IDENTIFIER.is_match(username)
}

pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN.is_match(domain)
}

/// Five-field cron schedule (minute hour day month weekday).
/// The cron crate parses with a leading seconds field, so one is prepended
/// for validation only.
pub fn is_valid_cron_schedule(schedule: &str) -> bool {
    let fields: Vec<&str> = schedule.split_whitespace().collect();
    if fields.len() != 5 {
        return false;
    }
    Schedule::from_str(&format!("0 {}", fields.join(" "))).is_ok()
}
