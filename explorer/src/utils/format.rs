//! Human-readable number formatting

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_MICRO: f64 = 1_000.0;

/// Format a span duration with a unit picked by magnitude.
///
/// Thresholds are strict: exactly one second still renders as milliseconds.
pub fn format_duration(duration_in_nanos: u64) -> String {
    if duration_in_nanos > NANOS_PER_SECOND {
        return format!(
            "{:.2}s",
            duration_in_nanos as f64 / NANOS_PER_SECOND as f64
        );
    }
    if duration_in_nanos > NANOS_PER_MILLI {
        return format!(
            "{:.2}ms",
            duration_in_nanos as f64 / NANOS_PER_MILLI as f64
        );
    }
    format!("{:.2}μs", duration_in_nanos as f64 / NANOS_PER_MICRO)
}

/// Duration in milliseconds with two decimals (details header)
pub fn format_millis(duration_in_nanos: u64) -> String {
    format!("{:.2}ms", duration_in_nanos as f64 / NANOS_PER_MILLI as f64)
}

/// Duration in seconds as a float (trace list)
pub fn nanos_to_seconds(duration_in_nanos: u64) -> f64 {
    duration_in_nanos as f64 / NANOS_PER_SECOND as f64
}

/// Group digits in thousands (`12345` -> `12,345`)
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
