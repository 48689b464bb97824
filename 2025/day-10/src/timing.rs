use std::time::{Duration, Instant};

/// Runs `f`, returning its result and how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Formats a duration in the largest unit that keeps it readable:
/// whole microseconds below 3ms, then two decimals of ms, s, m, h or d.
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 3000 {
        return format!("{micros}μs");
    }

    let millis = micros as f64 / 1000.0;
    if millis < 3000.0 {
        return format!("{millis:.2}ms");
    }
    let seconds = millis / 1000.0;
    if seconds < 180.0 {
        return format!("{seconds:.2}s");
    }
    let minutes = seconds / 60.0;
    if minutes < 180.0 {
        return format!("{minutes:.2}m");
    }
    let hours = minutes / 60.0;
    if hours < 72.0 {
        return format!("{hours:.2}h");
    }
    format!("{:.2}d", hours / 24.0)
}
