// Cron schedule helpers for the panel's job form: build a five-field
// expression from the fixed choice set and describe it in plain English.

/// Join the five schedule fields in cron order.
pub fn build_schedule(minute: &str, hour: &str, day: &str, month: &str, weekday: &str) -> String {
    format!("{minute} {hour} {day} {month} {weekday}")
}

/// Plain-English description of a five-field schedule. Covers the shapes
/// the builder form produces; anything more exotic falls back to echoing
/// the expression itself.
pub fn describe_schedule(expression: &str) -> String {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    let [minute, hour, day, month, weekday] = parts[..] else {
        return "Invalid cron expression".to_string();
    };

    let mut description = String::from("Runs ");
    description.push_str(&match (minute, hour) {
        ("*", "*") => "every minute".to_string(),
        ("0", "*") => "at the start of every hour".to_string(),
        ("0", "0") => "at midnight".to_string(),
        ("0", "12") => "at noon".to_string(),
        (m, "*") if m.starts_with("*/") => format!("every {} minutes", &m[2..]),
        ("0", h) if h.starts_with("*/") => {
            format!("every {} hours at the start of the hour", &h[2..])
        }
        (m, h) => format!("at {m} minutes past hour {h}"),
    });

    match (day, month, weekday) {
        ("*", "*", "*") => description.push_str(", every day"),
        ("*", "*", "1-5") => description.push_str(", Monday through Friday"),
        ("*", "*", "0,6") => description.push_str(", on weekends"),
        (d, "*", "*") if d != "*" => {
            description.push_str(&format!(", on day {d} of every month"));
        }
        ("*", m, "*") if m != "*" => {
            description.push_str(&format!(", every day in month {m}"));
        }
        _ => {
            description = format!("Runs according to the schedule: {expression}");
        }
    }

    description
}
