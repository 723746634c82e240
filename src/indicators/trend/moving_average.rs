//! Simple and exponential moving averages, SMA trend and golden/death crosses

use crate::common::math;
use crate::indicators::closes;
use crate::models::indicators::{Candle, CrossoverType, MovingAverage, MovingAverages, Signal};

pub const SMA_PERIODS: [u32; 3] = [20, 50, 200];
pub const EMA_PERIODS: [u32; 3] = [8, 21, 55];

fn distance_pct(price: f64, value: f64) -> f64 {
    if value > 0.0 {
        (price / value - 1.0) * 100.0
    } else {
        0.0
    }
}

/// Calculate the SMA over the last `period` closes
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<MovingAverage> {
    let price = candles.last()?.close;
    let value = math::finite(math::sma(&closes(candles), period as usize)?)?;
    Some(MovingAverage {
        period,
        value,
        price_distance_pct: distance_pct(price, value),
    })
}

/// Calculate EMA for a specific period
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<MovingAverage> {
    let price = candles.last()?.close;
    let value = math::finite(math::ema(&closes(candles), period as usize)?)?;
    Some(MovingAverage {
        period,
        value,
        price_distance_pct: distance_pct(price, value),
    })
}

/// Calculate multiple EMAs at once
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<MovingAverage> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(candles, period))
        .collect()
}

/// Detect a fast SMA crossing the slow SMA between the last two bars
pub fn check_ma_cross(candles: &[Candle], fast_period: u32, slow_period: u32) -> Option<CrossoverType> {
    let closes = closes(candles);
    let fast = math::sma_series(&closes, fast_period as usize);
    let slow = math::sma_series(&closes, slow_period as usize);
    if fast.len() < 2 || slow.len() < 2 {
        return None;
    }

    let (fast_prev, fast_cur) = (fast[fast.len() - 2], fast[fast.len() - 1]);
    let (slow_prev, slow_cur) = (slow[slow.len() - 2], slow[slow.len() - 1]);

    if fast_cur > slow_cur && fast_prev <= slow_prev {
        Some(CrossoverType::Bullish)
    } else if fast_cur < slow_cur && fast_prev >= slow_prev {
        Some(CrossoverType::Bearish)
    } else {
        Some(CrossoverType::None)
    }
}

/// Ordering of the 20/50/200 SMAs; falls back to 20 vs 50 without a 200-bar history
pub fn sma_trend(
    sma_20: Option<&MovingAverage>,
    sma_50: Option<&MovingAverage>,
    sma_200: Option<&MovingAverage>,
) -> Signal {
    match (sma_20, sma_50, sma_200) {
        (Some(s20), Some(s50), Some(s200)) => {
            if s20.value > s50.value && s50.value > s200.value {
                Signal::Bullish
            } else if s20.value < s50.value && s50.value < s200.value {
                Signal::Bearish
            } else {
                Signal::Neutral
            }
        }
        (Some(s20), Some(s50), None) => math::compare_signal(s20.value, s50.value),
        _ => Signal::Neutral,
    }
}

/// Calculate the full moving-average block; `None` when no window fits
pub fn calculate_moving_averages(candles: &[Candle]) -> Option<MovingAverages> {
    let sma_20 = calculate_sma(candles, SMA_PERIODS[0]);
    let sma_50 = calculate_sma(candles, SMA_PERIODS[1]);
    let sma_200 = calculate_sma(candles, SMA_PERIODS[2]);
    let ema_8 = calculate_ema(candles, EMA_PERIODS[0]);
    let ema_21 = calculate_ema(candles, EMA_PERIODS[1]);
    let ema_55 = calculate_ema(candles, EMA_PERIODS[2]);

    if sma_20.is_none() && ema_8.is_none() {
        return None;
    }

    let cross = check_ma_cross(candles, SMA_PERIODS[1], SMA_PERIODS[2]);
    let trend = sma_trend(sma_20.as_ref(), sma_50.as_ref(), sma_200.as_ref());

    Some(MovingAverages {
        sma_20,
        sma_50,
        sma_200,
        ema_8,
        ema_21,
        ema_55,
        sma_trend: trend,
        golden_cross: cross == Some(CrossoverType::Bullish),
        death_cross: cross == Some(CrossoverType::Bearish),
        signal: trend,
    })
}
