use crate::indicators::error::IndicatorError;
use crate::models::correlation::BenchmarkSeries;
use crate::models::indicators::Candle;

pub fn validate_price(value: f64, field: &str, index: usize) -> Result<(), IndicatorError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(IndicatorError::invalid_input(format!(
            "bar {}: {} must be a positive finite number, got {}",
            index, field, value
        )));
    }
    Ok(())
}

pub fn validate_candle(candle: &Candle, index: usize) -> Result<(), IndicatorError> {
    validate_price(candle.open, "open", index)?;
    validate_price(candle.high, "high", index)?;
    validate_price(candle.low, "low", index)?;
    validate_price(candle.close, "close", index)?;

    if !candle.volume.is_finite() || candle.volume < 0.0 {
        return Err(IndicatorError::invalid_input(format!(
            "bar {}: volume must be a non-negative finite number, got {}",
            index, candle.volume
        )));
    }

    if candle.high < candle.low {
        return Err(IndicatorError::invalid_input(format!(
            "bar {}: high {} below low {}",
            index, candle.high, candle.low
        )));
    }

    if candle.high < candle.open.max(candle.close) || candle.low > candle.open.min(candle.close) {
        return Err(IndicatorError::invalid_input(format!(
            "bar {}: open/close outside the high-low range",
            index
        )));
    }

    Ok(())
}

/// Reject series that indicate an upstream bug: empty, malformed bars, or
/// dates that are not strictly increasing.
pub fn validate_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    if candles.is_empty() {
        return Err(IndicatorError::invalid_input("empty OHLCV series"));
    }

    for (index, candle) in candles.iter().enumerate() {
        validate_candle(candle, index)?;
    }

    for (index, pair) in candles.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(IndicatorError::invalid_input(format!(
                "bar {}: date {} is not after {}",
                index + 1,
                pair[1].date,
                pair[0].date
            )));
        }
    }

    Ok(())
}

/// Sort a benchmark by date and reject non-positive closes or repeated dates.
pub fn validate_benchmark(series: &BenchmarkSeries) -> Result<BenchmarkSeries, IndicatorError> {
    let mut points = series.points.clone();
    points.sort_by_key(|p| p.date);

    for point in &points {
        if !point.close.is_finite() || point.close <= 0.0 {
            return Err(IndicatorError::invalid_input(format!(
                "benchmark {}: close on {} must be a positive finite number, got {}",
                series.symbol, point.date, point.close
            )));
        }
    }

    if let Some(pair) = points.windows(2).find(|pair| pair[0].date == pair[1].date) {
        return Err(IndicatorError::invalid_input(format!(
            "benchmark {}: duplicate date {}",
            series.symbol, pair[0].date
        )));
    }

    Ok(BenchmarkSeries::new(series.symbol.clone(), points))
}
