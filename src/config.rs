//! Configuration for geohash encoding and circle expansion.
use crate::hash::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::de::Error;

/// Encoding and expansion settings.
///
/// ```rust
/// use geocircle::Config;
///
/// let config = Config::default().with_precision(10).with_expand_step(2);
/// let json = config.to_json()?;
/// assert_eq!(Config::from_json(&json)?.precision, 10);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geohash length used when encoding points
    #[serde(default = "Config::default_precision")]
    pub precision: usize,

    /// Characters dropped per `HashCircle` expansion step
    #[serde(default = "Config::default_expand_step")]
    pub expand_step: usize,
}

impl Config {
    const fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    const fn default_expand_step() -> usize {
        1
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        assert!(
            (1..=MAX_PRECISION).contains(&precision),
            "Geohash precision must be between 1 and {}",
            MAX_PRECISION
        );

        if precision > 10 {
            log::warn!(
                "Geohash precision {} produces sub-meter cells; circles will need many \
                expansion steps to reach useful radii",
                precision
            );
        }

        self.precision = precision;
        self
    }

    pub fn with_expand_step(mut self, step: usize) -> Self {
        assert!(step > 0, "Expand step must be greater than zero");
        self.expand_step = step;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(format!(
                "Precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.precision
            ));
        }

        if self.expand_step == 0 {
            return Err("Expand step must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            expand_step: Self::default_expand_step(),
        }
    }
}
