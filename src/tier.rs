/// Picks the configured tier for the panel's refresh rate.
use crate::config::{Config, Tier};
use crate::error::Error;

/// The tier whose refresh rate is closest to `actual_refresh_rate`.
///
/// Ties go to the tier that comes first in the configuration.
pub fn select_tier(actual_refresh_rate: i32, config: &Config) -> Result<&Tier, Error> {
    config
        .tiers
        .iter()
        .min_by_key(|t| (actual_refresh_rate as i64 - t.refresh_rate as i64).abs())
        .ok_or(Error::NoTierFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rates: &[i32]) -> Config {
        Config {
            tiers: rates
                .iter()
                .map(|&refresh_rate| Tier {
                    refresh_rate,
                    breakpoints: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn empty_config() {
        assert!(matches!(select_tier(60, &config(&[])), Err(Error::NoTierFound)));
    }

    #[test]
    fn exact_rate() {
        let conf = config(&[60, 90, 120]);
        assert_eq!(90, select_tier(90, &conf).unwrap().refresh_rate);
    }

    #[test]
    fn closest_rate() {
        let conf = config(&[120, 60, 90]);
        assert_eq!(60, select_tier(48, &conf).unwrap().refresh_rate);
        assert_eq!(90, select_tier(100, &conf).unwrap().refresh_rate);
        assert_eq!(120, select_tier(144, &conf).unwrap().refresh_rate);
        assert_eq!(60, select_tier(0, &conf).unwrap().refresh_rate);
        assert_eq!(60, select_tier(-30, &conf).unwrap().refresh_rate);
    }

    #[test]
    fn single_tier_always_selected() {
        let conf = config(&[90]);
        assert_eq!(90, select_tier(30, &conf).unwrap().refresh_rate);
        assert_eq!(90, select_tier(240, &conf).unwrap().refresh_rate);
    }

    #[test]
    fn tie_goes_to_first_tier() {
        assert_eq!(60, select_tier(75, &config(&[60, 90])).unwrap().refresh_rate);
        assert_eq!(90, select_tier(75, &config(&[90, 60])).unwrap().refresh_rate);
    }

    #[test]
    fn extreme_rates_do_not_overflow() {
        let conf = config(&[i32::MIN, i32::MAX]);
        assert_eq!(i32::MAX, select_tier(1, &conf).unwrap().refresh_rate);
    }
}
