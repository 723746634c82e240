//! Volume average, ratio and activity level

use crate::common::math;
use crate::indicators::volumes;
use crate::models::indicators::{Candle, VolumeActivity, VolumeLevel};

pub const HIGH_VOLUME_RATIO: f64 = 1.5;
pub const LOW_VOLUME_RATIO: f64 = 0.5;

/// Latest volume relative to its `period` SMA
pub fn calculate_volume_activity(candles: &[Candle], period: u32) -> Option<VolumeActivity> {
    let volumes = volumes(candles);
    let average = math::finite(math::sma(&volumes, period as usize)?)?;
    let volume = *volumes.last()?;
    let ratio = if average > 0.0 { volume / average } else { 0.0 };

    let level = if average <= 0.0 {
        VolumeLevel::Normal
    } else if ratio > HIGH_VOLUME_RATIO {
        VolumeLevel::High
    } else if ratio < LOW_VOLUME_RATIO {
        VolumeLevel::Low
    } else {
        VolumeLevel::Normal
    };

    Some(VolumeActivity {
        volume,
        average,
        ratio,
        level,
    })
}

pub fn calculate_volume_activity_default(candles: &[Candle]) -> Option<VolumeActivity> {
    calculate_volume_activity(candles, 20)
}
