//! Tick interval parsing.

use anyhow::Context;
use std::time::Duration;

/// Parse a tick interval like "10ms", "1s", "1m30s", "1.5h" or "300".
/// Supports:
/// - Plain numbers (interpreted as seconds): "300"
/// - Unit suffixes: "ns", "us"/"µs", "ms", "s", "m", "h"
/// - Fractions and compound values: "1.5s", "1h15m"
///
/// The result must be a positive interval.
pub fn parse_tick(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    // No suffix - treat as seconds
    let nanos = if let Ok(secs) = s.parse::<f64>() {
        secs * 1e9
    } else {
        parse_with_units(s)?
    };

    if !nanos.is_finite() || nanos < 1.0 {
        anyhow::bail!("tick must be a positive interval, got {s:?}");
    }

    Ok(Duration::from_nanos(nanos as u64))
}

fn parse_with_units(s: &str) -> anyhow::Result<f64> {
    let mut rest = s;
    let mut nanos = 0.0;

    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            anyhow::bail!("Invalid duration value: {s}");
        }
        let (num_str, tail) = rest.split_at(num_len);
        let value: f64 = num_str
            .parse()
            .with_context(|| format!("Invalid duration value: {num_str}"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);
        let scale = match unit {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => anyhow::bail!("Missing unit in duration: {s}"),
            other => anyhow::bail!("Unknown unit '{other}' in duration: {s}"),
        };

        nanos += value * scale;
        rest = next;
    }

    Ok(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_units() {
        assert_eq!(parse_tick("10ms").unwrap(), Duration::from_millis(10));
        assert_eq!(parse_tick("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_tick("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_tick("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_tick("250us").unwrap(), Duration::from_micros(250));
        assert_eq!(parse_tick("250µs").unwrap(), Duration::from_micros(250));
        assert_eq!(parse_tick("100ns").unwrap(), Duration::from_nanos(100));
    }

    #[test]
    fn test_plain_number_is_seconds() {
        assert_eq!(parse_tick("3").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_tick(" 0.5 ").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_compound_and_fractional() {
        assert_eq!(parse_tick("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_tick("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_tick("1h0m1s").unwrap(), Duration::from_secs(3601));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(parse_tick("0").is_err());
        assert!(parse_tick("0s").is_err());
        assert!(parse_tick("-1s").is_err());
        assert!(parse_tick("-5").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_tick("").is_err());
        assert!(parse_tick("fast").is_err());
        assert!(parse_tick("10 ms").is_err());
        assert!(parse_tick("10d").is_err());
        assert!(parse_tick("1s5").is_err());
        assert!(parse_tick("1..2s").is_err());
    }
}
