use crate::core::TickPlanTuning;
use crate::error::{RulerError, RulerResult};

use super::RulerStyle;

pub const MIN_MAJOR_TICK_LENGTH: f64 = 0.1;
pub const MAX_MAJOR_TICK_LENGTH: f64 = 1.0;

pub(super) fn validate_major_tick_length(length: f64) -> RulerResult<()> {
    if !length.is_finite() || !(MIN_MAJOR_TICK_LENGTH..=MAX_MAJOR_TICK_LENGTH).contains(&length) {
        return Err(RulerError::InvalidConfig(format!(
            "major tick length must be in [{MIN_MAJOR_TICK_LENGTH}, {MAX_MAJOR_TICK_LENGTH}], got {length}"
        )));
    }
    Ok(())
}

pub(super) fn validate_min_major_tick_spacing(spacing: i32) -> RulerResult<()> {
    if spacing < 1 {
        return Err(RulerError::InvalidConfig(format!(
            "min major tick spacing must be >= 1px, got {spacing}"
        )));
    }
    Ok(())
}

pub(super) fn validate_desired_size(name: &str, size: i32) -> RulerResult<()> {
    if size < 0 {
        return Err(RulerError::InvalidConfig(format!(
            "desired {name} must be >= 0, got {size}"
        )));
    }
    Ok(())
}

pub(super) fn validate_tick_tuning(tuning: TickPlanTuning) -> RulerResult<()> {
    if tuning.min_minor_spacing_px < 1 {
        return Err(RulerError::InvalidConfig(format!(
            "min minor tick spacing must be >= 1px, got {}",
            tuning.min_minor_spacing_px
        )));
    }
    Ok(())
}

pub(super) fn validate_style(style: RulerStyle) -> RulerResult<()> {
    style.foreground.validate()?;
    if let Some(background) = style.background {
        background.validate()?;
    }
    if !style.tick_width.is_finite() || style.tick_width <= 0.0 {
        return Err(RulerError::InvalidConfig(
            "tick width must be finite and > 0".to_owned(),
        ));
    }
    if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
        return Err(RulerError::InvalidConfig(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_tick_length_bounds_are_inclusive() {
        assert!(validate_major_tick_length(0.1).is_ok());
        assert!(validate_major_tick_length(1.0).is_ok());
        assert!(validate_major_tick_length(0.05).is_err());
        assert!(validate_major_tick_length(1.5).is_err());
        assert!(validate_major_tick_length(f64::NAN).is_err());
    }

    #[test]
    fn zero_desired_size_is_allowed() {
        assert!(validate_desired_size("width", 0).is_ok());
        assert!(validate_desired_size("width", -1).is_err());
    }
}
