use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use uom::si::{f64::Length, length::millimeter, Quantity};

/// Coordinates of profiles are unitless numbers interpreted as millimeters.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Config {
    pub builder: BuilderConfig,
    pub sampler: SamplerConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::get_path()?)
    }

    pub fn get_path() -> Result<PathBuf> {
        let home_dir = home::home_dir().context("Failed to get user's home directory.")?;
        Ok(home_dir.join(".config/profile_forge/config.yaml"))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(path).context("Failed to read config file.")?;
        Self::from_yaml(&config)
    }

    pub fn from_yaml(config: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(config).context("Failed to decode config file.")?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BuilderConfig {
    /// Length of the provisional rays that stand in for infinite lines.
    #[serde(deserialize_with = "parse_quantity")]
    pub ray_length: Length,

    /// Largest gap tolerated when two resolved runs are joined.
    pub continuity_tolerance: f64,
}

impl BuilderConfig {
    pub fn ray_length(&self) -> f64 {
        self.ray_length.get::<millimeter>()
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            ray_length: Length::new::<millimeter>(1000.0),
            continuity_tolerance: 1e-8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
    /// Largest distance allowed between two neighbouring points of a sampled profile.
    #[serde(deserialize_with = "parse_quantity")]
    pub resolution: Length,
}

impl SamplerConfig {
    pub fn resolution(&self) -> f64 {
        self.resolution.get::<millimeter>()
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            resolution: Length::new::<millimeter>(0.1),
        }
    }
}

fn parse_quantity<'de, U, V, D, DE>(deserializer: DE) -> Result<Quantity<D, U, V>, DE::Error>
where
    DE: Deserializer<'de>,
    D: uom::si::Dimension + ?Sized,
    U: uom::si::Units<V> + ?Sized,
    V: uom::num_traits::Num + uom::Conversion<V>,
    Quantity<D, U, V>: FromStr,
    <uom::si::Quantity<D, U, V> as std::str::FromStr>::Err: std::fmt::Debug,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    let quantity = Quantity::from_str(&s)
        .map_err(|error| DE::Error::custom(format!("Number formatting: {:?}", error)))?;

    Ok(quantity)
}
