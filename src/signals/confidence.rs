//! Confidence scoring for crossover signals.

/// Ceiling for any reported confidence: a crossover is never reported with
/// absolute certainty.
pub const CONFIDENCE_CAP: f64 = 99.0;

/// Score a crossover from the relative divergence of the two averages:
/// `min(|short - long| / long * 100, 99)`, rounded to one decimal place.
///
/// Returns `None` when `long` is zero; the ratio is undefined for a zero
/// baseline and must never surface as NaN or infinity.
pub fn divergence_confidence(short_avg: f64, long_avg: f64) -> Option<f64> {
    if long_avg == 0.0 {
        return None;
    }
    let diff_ratio = (short_avg - long_avg).abs() / long_avg;
    Some(round_percent(f64::min(diff_ratio * 100.0, CONFIDENCE_CAP)))
}

/// Round a percentage to one decimal place.
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
