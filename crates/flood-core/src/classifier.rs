use crate::types::AlertLevel;

/// Lower bound (inclusive) of the Warning tier, in meters.
pub const WARNING_LEVEL_M: f64 = 525.0;
/// Lower bound (inclusive) of the High Alert tier, in meters.
pub const HIGH_ALERT_LEVEL_M: f64 = 527.0;
/// Lower bound (inclusive) of the Severe Flood tier, in meters.
pub const SEVERE_FLOOD_LEVEL_M: f64 = 529.0;

/// Map a water level in meters to its alert tier.
///
/// Each threshold belongs to the higher tier.
pub fn classify(water_level: f64) -> AlertLevel {
    if water_level < WARNING_LEVEL_M {
        AlertLevel::Normal
    } else if water_level < HIGH_ALERT_LEVEL_M {
        AlertLevel::Warning
    } else if water_level < SEVERE_FLOOD_LEVEL_M {
        AlertLevel::HighAlert
    } else {
        AlertLevel::SevereFlood
    }
}
