// File: crates/chart-core/src/grid.rs
// Summary: Tick value helpers for axis boxes (evenly spaced linear ticks, decade ticks, label formatting).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced ticks from `min` to `max`, at most `max_ticks` of them.
pub fn linear_ticks(min: f64, mut max: f64, max_ticks: usize) -> Vec<f64> {
    if (max - min).abs() < 1e-9 { max = min + 1.0; }
    linspace(min, max, max_ticks.max(2))
}

/// Powers of ten covering `[min, max]`. A non-positive `min` falls back to one decade below `max`.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    let hi = if max > 0.0 { max } else { 1.0 };
    let lo = if min > 0.0 && min < hi { min } else { (hi / 10.0).max(1e-12) };
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;
    (first..=last.max(first + 1)).map(|e| 10f64.powi(e)).collect()
}

/// Short label for a tick value: integers without decimals, otherwise up to two places.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        let r = v.round();
        // avoid "-0"
        return format!("{}", if r == 0.0 { 0.0 } else { r });
    }
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
