use std::fs;
use std::path::Path;
use tickerscope::config::Config;
use tickerscope::indicators::validate_benchmark;
use tickerscope::logging;
use tickerscope::models::BenchmarkSeries;
use tickerscope::services::{JsonFileProvider, MarketDataProvider};
use tickerscope::signals::SignalEngine;
use tracing::{info, warn};

/// Usage: tickerscope <SYMBOL> [BENCHMARK...]
///
/// Reads `<DATA_DIR>/<SYMBOL>.json`, prints the technical report as JSON and
/// writes a copy to `<REPORTS_DIR>/<SYMBOL>_technical.json`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    logging::init_logging(&config);

    let mut args = std::env::args().skip(1);
    let symbol = args
        .next()
        .ok_or("usage: tickerscope <SYMBOL> [BENCHMARK...]")?
        .to_ascii_uppercase();
    let mut benchmark_symbols: Vec<String> = args.collect();
    if benchmark_symbols.is_empty() {
        benchmark_symbols.push(config.analysis.market_benchmark.clone());
    }

    let provider = JsonFileProvider::new(&config.data_dir);
    let candles = provider.get_candles(&symbol, config.technical_analysis_period)?;

    let benchmarks: Vec<BenchmarkSeries> = benchmark_symbols
        .iter()
        .filter_map(|b| match provider.get_benchmark(b, config.technical_analysis_period) {
            Ok(series) => match validate_benchmark(&series) {
                Ok(series) => Some(series),
                Err(e) => {
                    warn!(benchmark = %b, error = %e, "benchmark rejected");
                    None
                }
            },
            Err(e) => {
                warn!(benchmark = %b, error = %e, "benchmark unavailable");
                None
            }
        })
        .collect();

    let engine = SignalEngine::new(config.analysis.clone());
    let report = engine.analyze(&symbol, &candles, &benchmarks)?;
    let json = serde_json::to_string_pretty(&report)?;

    fs::create_dir_all(&config.reports_dir)?;
    let path = Path::new(&config.reports_dir).join(format!("{}_technical.json", symbol));
    fs::write(&path, &json)?;
    info!(path = %path.display(), "report written");

    println!("{}", json);
    Ok(())
}
