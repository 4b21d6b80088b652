//! Shared formatting utilities for UI components.

/// Format a value with smart precision.
pub fn format_stat_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else if abs_val >= 1.0 {
        format!("{:.4}", val)
    } else {
        format!("{:.5}", val)
    }
}

/// Format a tick label compactly: integers without decimals, trailing zeros trimmed.
pub fn format_axis_label(val: f64) -> String {
    if val == 0.0 {
        return "0".to_string();
    }
    if !(1e-3..1e5).contains(&val.abs()) {
        return format!("{:.1e}", val);
    }
    if val.fract() == 0.0 {
        return format!("{:.0}", val);
    }
    let s = format!("{:.3}", val);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Round a raw step up to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced round tick positions within `[min, max]`.
pub fn tick_values(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || max_ticks < 2 {
        return Vec::new();
    }
    let step = nice_step(span / (max_ticks - 1) as f64);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let first = (min / step).ceil();
    let last = (max / step).floor();
    // Rounding can at most double the requested count.
    if !first.is_finite() || !last.is_finite() || last - first > (max_ticks * 2) as f64 {
        return Vec::new();
    }
    let (first, last) = (first as i64, last as i64);
    (first..=last)
        .map(|i| i as f64 * step)
        .collect()
}
