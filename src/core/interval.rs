use tracing::warn;

use crate::error::{RulerError, RulerResult};

/// Multipliers of a power of ten that may separate two major ticks.
///
/// Every interval is `d * 10^n` for some `d` in this ladder and `n >= 0`.
pub const INTERVAL_LADDER: [i64; 6] = [1, 5, 10, 25, 50, 100];

/// Interval used when the selector inputs are unusable.
pub const DEFAULT_INTERVAL: i64 = 1;

/// Largest ladder value representable as an `i64` (`5 * 10^18`).
///
/// Ranges too wide for any larger ladder value are clamped to it.
pub const MAX_LADDER_INTERVAL: i64 = 5_000_000_000_000_000_000;

/// Default minimum amount of pixels between two major ticks.
pub const DEFAULT_MIN_MAJOR_TICK_SPACING_PX: i32 = 80;

/// Chooses the major tick interval for an axis of `pixel_span` pixels showing
/// `range_size` ruler units, keeping major ticks at least `min_spacing` pixels apart.
///
/// Never fails: unusable inputs log a warning and yield [`DEFAULT_INTERVAL`].
#[must_use]
pub fn select_interval(pixel_span: i32, min_spacing: i32, range_size: f64) -> i64 {
    match try_select_interval(pixel_span, min_spacing, range_size) {
        Ok(interval) => interval,
        Err(err) => {
            warn!(error = %err, "falling back to default ruler interval");
            DEFAULT_INTERVAL
        }
    }
}

/// Fallible form of [`select_interval`].
pub fn try_select_interval(pixel_span: i32, min_spacing: i32, range_size: f64) -> RulerResult<i64> {
    if pixel_span <= 0 || min_spacing <= 0 || !range_size.is_finite() || range_size <= 0.0 {
        return Err(RulerError::InvalidIntervalInput {
            pixel_span,
            min_spacing,
            range_size,
        });
    }

    let max_segments = (f64::from(pixel_span) / f64::from(min_spacing))
        .floor()
        .max(1.0);
    let smallest_interval = (range_size / max_segments).ceil();
    let magnitude = (smallest_interval.log10().ceil() - 1.0).max(0.0) as u32;
    let multiplier = ladder_multiplier(smallest_interval, 10_f64.powi(magnitude as i32));

    let interval = 10_i64
        .checked_pow(magnitude)
        .and_then(|scale| multiplier.checked_mul(scale))
        .unwrap_or_else(|| {
            warn!(
                range_size,
                magnitude,
                multiplier,
                clamped = MAX_LADDER_INTERVAL,
                "ruler interval exceeds i64, clamping to largest representable"
            );
            MAX_LADDER_INTERVAL
        });
    Ok(interval)
}

/// First ladder multiplier whose scaled value reaches `smallest_interval`.
///
/// Falls back to the last multiplier when none does.
fn ladder_multiplier(smallest_interval: f64, scale: f64) -> i64 {
    INTERVAL_LADDER
        .iter()
        .copied()
        .find(|&multiplier| multiplier as f64 * scale >= smallest_interval)
        .unwrap_or_else(|| {
            let largest = INTERVAL_LADDER[INTERVAL_LADDER.len() - 1];
            // Only reachable through float rounding around exact powers of ten.
            warn!(
                smallest_interval,
                scale, largest, "interval ladder exhausted, using largest candidate"
            );
            largest
        })
}

/// Returns the largest multiple of `interval` not exceeding `range_lower`.
///
/// `None` when `interval` is not positive or the multiple does not fit in
/// an `i64`.
#[must_use]
pub fn first_major_tick(range_lower: f64, interval: i64) -> Option<i64> {
    if interval <= 0 {
        return None;
    }
    let index = (range_lower / interval as f64).floor();
    if !index.is_finite() || index < i64::MIN as f64 || index >= i64::MAX as f64 {
        return None;
    }
    (index as i64).checked_mul(interval)
}
