pub mod flatten;
pub mod forecast;
pub mod history;
pub mod smoothing;
pub mod summary;

/// Round to one decimal place. Only applied to reported values, never to
/// values carried forward by a computation.
///
/// Rounds the exact decimal value of `value`, so `0.15` (stored as
/// 0.1499...) gives `0.1`. Exact halves such as `0.25` go away from zero.
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;

    // x * 4 is exact, so this only matches values that are true halves
    let exact_half = (value * 4.0).fract() == 0.0 && scaled.fract().abs() == 0.5;
    if exact_half {
        return (scaled.abs().floor() + 1.0).copysign(value) / 10.0;
    }

    format!("{value:.1}").parse().unwrap_or(value)
}
