use crate::color_curve::Breakpoint;
use crate::error::Error;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq)]
struct TierConfig {
    brightness_levels: Vec<Breakpoint>,
}

/// Brightness to color breakpoints for one panel refresh rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    pub refresh_rate: i32,
    pub breakpoints: Vec<Breakpoint>,
}

/// Tiers in the order they appear in the file.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub tiers: Vec<Tier>,
}

impl Config {
    pub fn from_str(conf: &str) -> Result<Self, Error> {
        Self::from_map(serde_json::from_str(conf)?)
    }

    pub fn read_from_file<P: AsRef<Path>>(file: P) -> Result<Self, Error> {
        Self::from_map(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    fn from_map(raw: Map<String, Value>) -> Result<Self, Error> {
        let tiers = raw
            .into_iter()
            .map(|(key, value)| {
                let refresh_rate = key
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| Error::InvalidRefreshRate(key.clone()))?;
                let tier: TierConfig = serde_json::from_value(value)
                    .map_err(|source| Error::InvalidTier { refresh_rate, source })?;

                Ok(Tier {
                    refresh_rate,
                    breakpoints: tier.brightness_levels,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Config { tiers })
    }
}

pub const DEFAULT_CONFIG: &str = r#"{
    "60": {
        "brightness_levels": [
            { "brightness": 0, "red": 255, "green": 236, "blue": 220 },
            { "brightness": 50, "red": 255, "green": 245, "blue": 238 },
            { "brightness": 100, "red": 255, "green": 255, "blue": 255 }
        ]
    },
    "90": {
        "brightness_levels": [
            { "brightness": 0, "red": 255, "green": 232, "blue": 214 },
            { "brightness": 50, "red": 255, "green": 242, "blue": 233 },
            { "brightness": 100, "red": 255, "green": 252, "blue": 250 }
        ]
    },
    "120": {
        "brightness_levels": [
            { "brightness": 0, "red": 255, "green": 228, "blue": 208 },
            { "brightness": 50, "red": 255, "green": 240, "blue": 229 },
            { "brightness": 100, "red": 255, "green": 250, "blue": 246 }
        ]
    }
}
"#;
