//! Unit tests for the signal engine pipeline

use chrono::{TimeZone, Utc};
use trendsig::config::{CrossoverPolicy, EngineConfig};
use trendsig::models::{Direction, PriceBar, RawRecord};
use trendsig::series::SeriesError;
use trendsig::signals::{recent_alerts, SignalEngine, CONFIDENCE_CAP};

fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(
                "BTC",
                Utc.timestamp_opt(i as i64 * 60, 0).unwrap(),
                close,
                close,
                close,
                close,
                1000.0,
            )
        })
        .collect()
}

fn raw(timestamp: &str, close: &str) -> RawRecord {
    RawRecord {
        symbol: "BTC".to_string(),
        timestamp: timestamp.to_string(),
        open: close.to_string(),
        high: close.to_string(),
        low: close.to_string(),
        close: close.to_string(),
        volume: "1".to_string(),
    }
}

#[test]
fn short_series_yields_no_signals() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    assert!(SignalEngine::run(&bars, &EngineConfig::default()).is_empty());
}

#[test]
fn constant_closes_yield_no_signals() {
    // Both averages sit at 100 everywhere: equal state, no crossover.
    let bars = bars_from_closes(&[100.0; 11]);
    assert!(SignalEngine::run(&bars, &EngineConfig::default()).is_empty());
}

#[test]
fn rising_ramp_yields_one_buy() {
    let closes: Vec<f64> = (1..=11).map(|i| i as f64).collect();
    let bars = bars_from_closes(&closes);
    let signals = SignalEngine::run(&bars, &EngineConfig::default());

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].direction, Direction::Buy);
    assert_eq!(signals[0].id, 1);
    // short = 8, long = 5.5 at the first defined index -> 45.5%
    assert_eq!(signals[0].confidence, 45.5);
}

#[test]
fn snapshot_policy_emits_at_every_qualifying_index() {
    let closes: Vec<f64> = (1..=11).map(|i| i as f64).collect();
    let bars = bars_from_closes(&closes);
    let config = EngineConfig {
        policy: CrossoverPolicy::Snapshot,
        ..EngineConfig::default()
    };
    let signals = SignalEngine::run(&bars, &config);

    // Two defined windows on an 11-bar series, short above long at both.
    assert_eq!(signals.len(), 2);
    assert!(signals.iter().all(|s| s.direction == Direction::Buy));
    assert_eq!(signals[0].id, 1);
    assert_eq!(signals[1].id, 2);
}

#[test]
fn confidence_always_bounded_and_finite() {
    let closes: Vec<f64> = (0..60)
        .map(|i| if i % 7 < 3 { 1.0 + i as f64 } else { 200.0 - i as f64 })
        .collect();
    let bars = bars_from_closes(&closes);
    let config = EngineConfig {
        policy: CrossoverPolicy::Snapshot,
        ..EngineConfig::default()
    };
    for signal in SignalEngine::run(&bars, &config) {
        assert!(signal.confidence.is_finite());
        assert!(signal.confidence >= 0.0 && signal.confidence <= CONFIDENCE_CAP);
    }
}

#[test]
fn signals_are_in_index_order_with_sequential_ids() {
    let closes: Vec<f64> = (0..40)
        .map(|i| if (i / 6) % 2 == 0 { 100.0 + i as f64 } else { 100.0 - i as f64 })
        .collect();
    let bars = bars_from_closes(&closes);
    let signals = SignalEngine::run(&bars, &EngineConfig::default());
    assert!(!signals.is_empty());
    for (i, signal) in signals.iter().enumerate() {
        assert_eq!(signal.id, i as u32 + 1);
        if i > 0 {
            assert!(signal.timestamp > signals[i - 1].timestamp);
        }
    }
}

#[test]
fn run_is_deterministic() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64).sin() * 10.0).collect();
    let bars = bars_from_closes(&closes);
    let config = EngineConfig::default();
    let first = serde_json::to_string(&SignalEngine::run(&bars, &config)).unwrap();
    let second = serde_json::to_string(&SignalEngine::run(&bars, &config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn evaluate_empty_batch_is_no_signals() {
    let signals = SignalEngine::evaluate(&[], &EngineConfig::default()).unwrap();
    assert!(signals.is_empty());
}

#[test]
fn evaluate_malformed_record_returns_no_partial_list() {
    let mut records: Vec<RawRecord> = (1..=11)
        .map(|i| raw(&format!("2024-01-{i:02}"), &i.to_string()))
        .collect();
    records[5].close = "abc".to_string();
    let err = SignalEngine::evaluate(&records, &EngineConfig::default()).unwrap_err();
    assert!(matches!(err, SeriesError::MalformedRecord { .. }));
}

#[test]
fn evaluate_sorts_before_tracking() {
    // Same ramp as the buy scenario, delivered in reverse order.
    let records: Vec<RawRecord> = (1..=11)
        .rev()
        .map(|i| raw(&format!("2024-01-{i:02}"), &i.to_string()))
        .collect();
    let signals = SignalEngine::evaluate(&records, &EngineConfig::default()).unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].direction, Direction::Buy);
}

#[test]
fn alert_lines_cover_most_recent_signals() {
    let closes: Vec<f64> = (0..40)
        .map(|i| if (i / 6) % 2 == 0 { 100.0 + i as f64 } else { 100.0 - i as f64 })
        .collect();
    let bars = bars_from_closes(&closes);
    let signals = SignalEngine::run(&bars, &EngineConfig::default());
    assert!(signals.len() >= 2);

    let alerts = recent_alerts(&signals, 5);
    assert!(alerts.len() <= 5);
    let last = signals.last().unwrap();
    assert_eq!(alerts.last().unwrap(), &last.alert_line());
    assert!(alerts.last().unwrap().contains("BTC signal:"));
}
