// Pure display formatting: human-readable bytes and percentages.

/// Unit ladder for base-1024 byte formatting.
const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with the largest fitting unit, base 1024.
/// The mantissa is rounded to `decimals` places with trailing zeros trimmed
/// (104857600 with 2 decimals renders as "100 MB", not "100.00 MB").
/// Zero short-circuits to the literal "0 Bytes" instead of hitting the log.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let mantissa = format!("{value:.decimals$}");
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        &mantissa
    };
    format!("{} {}", mantissa, UNITS[exp])
}

/// Percentage with one decimal place ("12.3%").
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", clamp_percent(percent))
}

/// Clamp a raw percentage into the displayable [0, 100] range.
/// Non-finite values collapse to 0 so a bad division never reaches the view.
pub fn clamp_percent(percent: f64) -> f64 {
    if !percent.is_finite() || percent < 0.0 {
        0.0
    } else {
        percent.min(100.0)
    }
}

/// used/limit as a clamped percentage. A limit of zero (or below, or
/// non-finite) reads as 0% used; the endpoint sometimes reports unlimited
/// resources that way and NaN must never leak into the view.
pub fn usage_percent(used: f64, limit: f64) -> f64 {
    if !used.is_finite() || !limit.is_finite() || limit <= 0.0 {
        return 0.0;
    }
    clamp_percent(used / limit * 100.0)
}

/// Two-slice used/available dataset for a doughnut gauge.
pub fn gauge_dataset(percent: f64) -> [f64; 2] {
    let p = clamp_percent(percent);
    [p, 100.0 - p]
}
