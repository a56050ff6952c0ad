//! Time-based generators.

use crate::error::GeneratorError;
use crate::registry::Resolver;

/// Decimal nanoseconds since the Unix epoch.
pub fn unixtime(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let nanos = r
        .now()
        .timestamp_nanos_opt()
        .ok_or(GeneratorError::ClockOutOfRange)?;
    Ok(nanos.to_string())
}

#[cfg(test)]
mod tests {
    use crate::{FixedClock, Registry, WordList};
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unixtime_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let registry = Registry::builtin(&WordList::new()).with_clock(FixedClock(instant));
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            registry.get(&mut rng, "unixtime").unwrap(),
            "1704067200000000000"
        );
    }

    #[test]
    fn test_unixtime_system_clock() {
        let registry = Registry::builtin(&WordList::new());
        let mut rng = StdRng::seed_from_u64(42);

        let nanos: i64 = registry.get(&mut rng, "unixtime").unwrap().parse().unwrap();
        // 2020-09-13, well before any plausible test run
        assert!(nanos > 1_600_000_000_000_000_000);
    }
}
